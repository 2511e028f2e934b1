//! Event handlers
//!
//! Error mapping and background processing of message events.

pub mod error;
pub mod message;

pub use error::{HandlerError, HandlerResult};
pub use message::spawn_message;
