//! JSON body extractor
//!
//! Like `axum::Json`, but every rejection becomes a plain-text 400 in the
//! relay's own error format.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// JSON webhook body
#[derive(Debug, Clone)]
pub struct WebhookJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for WebhookJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| match e {
                JsonRejection::JsonDataError(e) => ApiError::invalid_json(e.body_text()),
                JsonRejection::JsonSyntaxError(e) => ApiError::invalid_json(e.body_text()),
                JsonRejection::MissingJsonContentType(e) => ApiError::invalid_json(e.body_text()),
                JsonRejection::BytesRejection(e) => ApiError::invalid_json(e.body_text()),
                _ => ApiError::invalid_json("Invalid JSON body"),
            })?;

        Ok(WebhookJson(value))
    }
}
