//! GraphQL request and response envelopes

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for the monday.com API
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: Value,
}

impl<'a> GraphQlRequest<'a> {
    pub fn new(query: &'a str, variables: Value) -> Self {
        Self { query, variables }
    }
}

/// Response body
///
/// monday.com reports GraphQL errors in `errors` (often with HTTP 200) and
/// request-level failures (auth, complexity budget) in `error_message`.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
    pub error_message: Option<String>,
    pub error_code: Option<String>,
}

/// Single GraphQL error entry
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl<T> GraphQlResponse<T> {
    /// Error messages carried by the response, if any
    pub fn error_summary(&self) -> Option<String> {
        if !self.errors.is_empty() {
            let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
            return Some(messages.join("; "));
        }

        self.error_message.as_ref().map(|message| match &self.error_code {
            Some(code) => format!("{code}: {message}"),
            None => message.clone(),
        })
    }
}
