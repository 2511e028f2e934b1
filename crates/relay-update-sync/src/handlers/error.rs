//! Handler error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;

use crate::signature::SignatureError;

/// Handler error type
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Signature verification failed
    #[error("Invalid request signature: {0}")]
    InvalidSignature(#[from] SignatureError),

    /// Body is not a Slack Events API envelope
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

impl HandlerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidSignature(_) => StatusCode::UNAUTHORIZED,
            Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        warn!(error = %self, "Rejected Slack request");

        let body = match self {
            Self::InvalidSignature(_) => "Invalid request signature",
            Self::InvalidPayload(_) => "Invalid payload",
        };
        (self.status_code(), body).into_response()
    }
}

/// Handler result type
pub type HandlerResult<T> = Result<T, HandlerError>;
