//! # relay-monday
//!
//! monday.com GraphQL client implementing the `BoardApi` port from
//! `relay-core`.
//!
//! ## Overview
//!
//! Every call is a `POST` of `{query, variables}` to the single API endpoint
//! with the API key in the `Authorization` header. Reads are queries, writes
//! are mutations. Values are always passed as variables, never spliced into
//! the query text.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use relay_monday::{MondayClient, MondayClientConfig};
//! use relay_core::BoardApi;
//!
//! async fn example(config: &relay_common::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MondayClient::new(MondayClientConfig::from(&config.monday))?;
//!     let board = client.fetch_target_board(config.monday.target_board_id, true).await?;
//!     println!("{} items", board.items.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod graphql;
pub mod models;
pub mod queries;

// Re-export commonly used types
pub use client::{MondayClient, MondayClientConfig};
pub use error::MondayError;
pub use graphql::{GraphQlError, GraphQlRequest, GraphQlResponse};
