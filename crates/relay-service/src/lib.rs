//! # relay-service
//!
//! Application layer for both relays: the value-sync and update-sync use
//! cases, their request/response DTOs, and the service context that carries
//! the `BoardApi` implementation and the immutable settings they need.

pub mod dto;
pub mod services;


pub use services::{
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, SyncOutcome,
    UpdateOutcome, UpdateSyncService, ValueSyncService,
};
