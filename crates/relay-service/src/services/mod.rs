//! Business logic services
//!
//! One service per relay. Both are thin orchestrations over the `BoardApi`
//! port and the pure functions in `relay-core`.

pub mod context;
pub mod error;
pub mod update_sync;
pub mod value_sync;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use update_sync::{UpdateOutcome, UpdateSyncService};
pub use value_sync::{SyncOutcome, ValueSyncService};
