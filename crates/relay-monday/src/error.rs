//! Client errors and their mapping into the domain

use relay_core::DomainError;
use thiserror::Error;

/// monday.com client error
#[derive(Debug, Error)]
pub enum MondayError {
    #[error("API key is not a valid header value")]
    InvalidApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("Invalid response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Response contained no data")]
    MissingData,
}

/// Convert a client error to a DomainError
pub fn map_api_error(e: MondayError) -> DomainError {
    DomainError::Upstream(e.to_string())
}
