//! GraphQL documents sent to monday.com
//!
//! Ids travel as `ID!` variables (strings), column values as `JSON!`
//! variables holding a JSON-encoded string.

/// Item name plus title and raw value of one column
pub const SOURCE_SNAPSHOT_QUERY: &str = r"query ($itemIds: [ID!], $columnIds: [String!]) {
  items(ids: $itemIds) {
    name
    column_values(ids: $columnIds) {
      column {
        title
      }
      value
    }
  }
}";

/// One page of items and all columns of a board
pub const TARGET_BOARD_QUERY: &str = r"query ($boardIds: [ID!]) {
  boards(ids: $boardIds) {
    items_page(limit: 500) {
      items {
        id
        name
      }
    }
    columns {
      id
      title
    }
  }
}";

/// One page of items of a board
pub const TARGET_ITEMS_QUERY: &str = r"query ($boardIds: [ID!]) {
  boards(ids: $boardIds) {
    items_page(limit: 500) {
      items {
        id
        name
      }
    }
  }
}";

pub const CHANGE_COLUMN_VALUE_MUTATION: &str = r"mutation ($boardId: ID!, $itemId: ID!, $columnId: String!, $value: JSON!) {
  change_column_value(board_id: $boardId, item_id: $itemId, column_id: $columnId, value: $value) {
    id
  }
}";

pub const CHANGE_SIMPLE_COLUMN_VALUE_MUTATION: &str = r"mutation ($boardId: ID!, $itemId: ID!, $columnId: String!, $value: String) {
  change_simple_column_value(board_id: $boardId, item_id: $itemId, column_id: $columnId, value: $value) {
    id
  }
}";

pub const CREATE_UPDATE_MUTATION: &str = r"mutation ($itemId: ID!, $body: String!) {
  create_update(item_id: $itemId, body: $body) {
    id
  }
}";
