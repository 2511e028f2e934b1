//! Integration test utilities for the relays
//!
//! This crate provides helpers for running end-to-end tests against both
//! relays, with a fake monday.com GraphQL API standing in for the real one.

pub mod fake_monday;
pub mod fixtures;

pub use fake_monday::{FakeMonday, GraphQlCall};
pub use fixtures::*;
pub use helpers::*;
