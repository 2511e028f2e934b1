//! Target board contents used for name-based resolution

use serde::Deserialize;

use crate::value_objects::{ColumnId, ItemId};

/// Item on the target board
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TargetRecord {
    pub id: ItemId,
    pub name: String,
}

/// Column on the target board
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TargetColumn {
    pub id: ColumnId,
    pub title: String,
}

/// Items and columns of the target board, in API order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetBoard {
    pub items: Vec<TargetRecord>,
    pub columns: Vec<TargetColumn>,
}

impl TargetBoard {
    pub fn new(items: Vec<TargetRecord>, columns: Vec<TargetColumn>) -> Self {
        Self { items, columns }
    }
}
