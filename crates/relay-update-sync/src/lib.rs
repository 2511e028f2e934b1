//! # relay-update-sync
//!
//! Slack Events API endpoint that mirrors monday.com notifications posted by
//! the integration bot as updates on the target board.

pub mod handlers;
pub mod server;
pub mod signature;

pub use server::{create_app, create_relay_state, run, run_server, RelayState};
pub use signature::{SignatureError, SlackVerifier};
