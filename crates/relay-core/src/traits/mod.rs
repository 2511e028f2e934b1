//! Port traits implemented by the infrastructure layer

mod board_api;

pub use board_api::{ApiResult, BoardApi};
