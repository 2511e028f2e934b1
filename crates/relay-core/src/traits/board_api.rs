//! Board API port
//!
//! The domain layer defines the reads and writes it needs against the
//! work-management platform; `relay-monday` provides the GraphQL
//! implementation and tests provide in-memory fakes.

use async_trait::async_trait;

use crate::entities::{SourceSnapshot, TargetBoard};
use crate::error::DomainError;
use crate::value_objects::{BoardId, ColumnId, ItemId};

/// Result type for board API operations
pub type ApiResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait BoardApi: Send + Sync {
    /// Read the item name and one column (title and raw value) of a source item
    async fn fetch_source_snapshot(
        &self,
        item_id: ItemId,
        column_id: &ColumnId,
    ) -> ApiResult<SourceSnapshot>;

    /// Read one page of items of a board, and its columns when requested
    async fn fetch_target_board(
        &self,
        board_id: BoardId,
        include_columns: bool,
    ) -> ApiResult<TargetBoard>;

    /// `change_column_value`; `value` is a JSON-encoded string
    async fn change_column_value(
        &self,
        board_id: BoardId,
        item_id: ItemId,
        column_id: &ColumnId,
        value: &str,
    ) -> ApiResult<ItemId>;

    /// `change_simple_column_value`
    async fn change_simple_column_value(
        &self,
        board_id: BoardId,
        item_id: ItemId,
        column_id: &ColumnId,
        value: &str,
    ) -> ApiResult<ItemId>;

    /// `create_update`; returns the id of the new update
    async fn create_update(&self, item_id: ItemId, body: &str) -> ApiResult<String>;
}
