//! Application error types
//!
//! Startup and serving failures shared by both relay binaries.

/// Errors that stop a relay process
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to bind to {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error")]
    Server(#[source] std::io::Error),
}
