//! Axum extractors for request handling

mod json;

pub use json::WebhookJson;
