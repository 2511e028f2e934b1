//! # relay-value-sync
//!
//! HTTP relay that receives monday.com "column value changed" webhooks from
//! a source board and mirrors the new value onto the target board.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
