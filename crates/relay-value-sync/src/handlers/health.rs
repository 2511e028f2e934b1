//! Liveness endpoint

/// Plain-text liveness message
pub const RUNNING: &str = "monday-sync-value, server is running!";

/// GET /
pub async fn health_check() -> &'static str {
    RUNNING
}
