//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, webhook};
use crate::state::AppState;

/// Path monday.com delivers webhooks to
pub const WEBHOOK_PATH: &str = "/monday-webhook";

/// Create the router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::health_check))
        .route(WEBHOOK_PATH, post(webhook::monday_webhook))
}
