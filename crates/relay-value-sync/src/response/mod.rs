//! Response types and error handling for the webhook endpoint
//!
//! monday.com only looks at the status code, so bodies are short plain-text
//! messages. Details go to the log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use relay_service::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Body of a 200 for an applied change
pub const SUCCESS: &str = "Success";

/// Body of every 500
pub const PROCESSING_FAILED: &str = "Failed to process webhook";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid webhook payload: Missing event data")]
    MissingEvent,

    #[error("Invalid webhook payload: Missing required fields")]
    MissingFields(String),

    #[error("Invalid webhook payload: {0}")]
    InvalidJson(String),

    #[error("Failed to process webhook")]
    Service(#[from] ServiceError),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingEvent | Self::MissingFields(_) | Self::InvalidJson(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::MissingEvent => "MISSING_EVENT",
            Self::MissingFields(_) => "MISSING_FIELDS",
            Self::InvalidJson(_) => "INVALID_JSON",
            Self::Service(e) => e.error_code(),
        }
    }

    /// Create an invalid body error
    pub fn invalid_json(msg: impl Into<String>) -> Self {
        Self::InvalidJson(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Service(e) => {
                error!(code = self.error_code(), error = %e, "Webhook processing failed");
            }
            Self::MissingFields(detail) | Self::InvalidJson(detail) => {
                warn!(code = self.error_code(), detail = %detail, "Rejected webhook");
            }
            Self::MissingEvent => warn!(code = self.error_code(), "Rejected webhook"),
        }

        (status, self.to_string()).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
