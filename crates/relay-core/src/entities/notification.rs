//! Change notification - which column changed on which item of which board

use crate::value_objects::{BoardId, ColumnId, ItemId};

/// A "column value changed" notification from the source board
///
/// Built from an inbound webhook body, consumed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeNotification {
    pub board_id: BoardId,
    pub item_id: ItemId,
    pub column_id: ColumnId,
}

impl ChangeNotification {
    pub fn new(board_id: BoardId, item_id: ItemId, column_id: ColumnId) -> Self {
        Self {
            board_id,
            item_id,
            column_id,
        }
    }
}
