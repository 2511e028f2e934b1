//! Value sync service
//!
//! Mirrors a changed column value from a source item onto the item and
//! column with the same name and title on the target board.

use relay_core::{plan_column_write, ChangeNotification, ColumnId, DomainError, ItemId};
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Result of handling one change notification
#[derive(Debug)]
pub enum SyncOutcome {
    /// Exactly one mutation was sent to the target board
    Applied {
        item_id: ItemId,
        column_id: ColumnId,
        /// `set`, `clear_simple` or `clear_composite`
        write: &'static str,
    },
    /// Nothing was written because a name or title did not resolve
    Skipped { reason: DomainError },
}

impl SyncOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Value sync service
pub struct ValueSyncService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ValueSyncService<'a> {
    /// Create a new ValueSyncService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Mirror one column change onto the target board
    ///
    /// Resolution misses on either board are reported as `Skipped`. Decode
    /// and upstream failures are errors. No retries.
    #[instrument(
        skip(self, notification),
        fields(
            board_id = %notification.board_id,
            item_id = %notification.item_id,
            column_id = %notification.column_id
        )
    )]
    pub async fn sync_column_change(
        &self,
        notification: &ChangeNotification,
    ) -> ServiceResult<SyncOutcome> {
        let api = self.ctx.board_api();
        let target_board_id = self.ctx.target_board_id();

        let snapshot = match api
            .fetch_source_snapshot(notification.item_id, &notification.column_id)
            .await
        {
            Ok(snapshot) => snapshot,
            Err(e) if e.is_not_found() => return Ok(skipped(e)),
            Err(e) => return Err(e.into()),
        };

        let board = api.fetch_target_board(target_board_id, true).await?;

        let Some(record) = board.resolve_record(&snapshot.item_name) else {
            return Ok(skipped(DomainError::ItemNotFound {
                board_id: target_board_id,
                name: snapshot.item_name,
            }));
        };

        let Some(column) = board.resolve_column(&snapshot.column.column_title) else {
            return Ok(skipped(DomainError::ColumnNotFound {
                board_id: target_board_id,
                title: snapshot.column.column_title,
            }));
        };

        let write = plan_column_write(
            &snapshot.column,
            &column.title,
            self.ctx.composite_clear_columns(),
        )?;

        if write.is_simple() {
            api.change_simple_column_value(
                target_board_id,
                record.id,
                &column.id,
                write.mutation_value(),
            )
            .await?;
        } else {
            api.change_column_value(target_board_id, record.id, &column.id, write.mutation_value())
                .await?;
        }

        info!(
            target_item_id = %record.id,
            target_column_id = %column.id,
            item_name = %snapshot.item_name,
            column_title = %column.title,
            write = write.kind(),
            "Column value mirrored"
        );

        Ok(SyncOutcome::Applied {
            item_id: record.id,
            column_id: column.id.clone(),
            write: write.kind(),
        })
    }
}

fn skipped(reason: DomainError) -> SyncOutcome {
    warn!(code = reason.code(), reason = %reason, "Column change not mirrored");
    SyncOutcome::Skipped { reason }
}
