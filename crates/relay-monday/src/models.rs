//! Response shapes of the queries in [`crate::queries`]

use relay_core::{ColumnValue, SourceSnapshot, TargetBoard, TargetColumn, TargetRecord};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ItemsData {
    pub items: Vec<ItemModel>,
}

#[derive(Debug, Deserialize)]
pub struct ItemModel {
    pub name: String,
    #[serde(default)]
    pub column_values: Vec<ColumnValueModel>,
}

#[derive(Debug, Deserialize)]
pub struct ColumnValueModel {
    pub column: ColumnRef,
    pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ColumnRef {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct BoardsData {
    pub boards: Vec<BoardModel>,
}

#[derive(Debug, Deserialize)]
pub struct BoardModel {
    pub items_page: ItemsPage,
    #[serde(default)]
    pub columns: Vec<TargetColumn>,
}

#[derive(Debug, Deserialize)]
pub struct ItemsPage {
    pub items: Vec<TargetRecord>,
}

/// `{ "<mutation name>": { "id": "..." } }`
#[derive(Debug, Deserialize)]
pub struct MutationData {
    #[serde(
        alias = "change_column_value",
        alias = "change_simple_column_value",
        alias = "create_update"
    )]
    pub result: Option<MutationResult>,
}

#[derive(Debug, Deserialize)]
pub struct MutationResult {
    pub id: serde_json::Value,
}

impl MutationResult {
    /// Id as a string regardless of how the API encoded it
    pub fn id_string(&self) -> String {
        match &self.id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl ItemModel {
    /// First column value, if the requested column exists
    pub fn into_snapshot(self) -> Option<SourceSnapshot> {
        let column = self.column_values.into_iter().next()?;
        Some(SourceSnapshot {
            item_name: self.name,
            column: ColumnValue::new(column.column.title, column.value),
        })
    }
}

impl From<BoardModel> for TargetBoard {
    fn from(board: BoardModel) -> Self {
        TargetBoard::new(board.items_page.items, board.columns)
    }
}
