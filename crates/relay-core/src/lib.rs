//! # relay-core
//!
//! Domain layer for the monday.com sync relays: board entities, value
//! normalization, cross-board name resolution and Slack message extraction.
//! This crate has no dependencies on HTTP clients or servers.

pub mod entities;
pub mod error;
pub mod sync;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ChangeNotification, ColumnValue, CommentMessage, SourceSnapshot, TargetBoard, TargetColumn,
    TargetRecord,
};
pub use error::DomainError;
pub use sync::{
    extract_comment, plan_column_write, resolve_column, resolve_record, ColumnWrite,
    CompositeClearColumns, MessageExtractor,
};
pub use traits::{ApiResult, BoardApi};
pub use value_objects::{BoardId, ColumnId, IdParseError, ItemId};
