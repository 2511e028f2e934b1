//! monday.com implementation of BoardApi

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, instrument};

use relay_common::MondayConfig;
use relay_core::traits::{ApiResult, BoardApi};
use relay_core::{BoardId, ColumnId, DomainError, ItemId, SourceSnapshot, TargetBoard};

use crate::error::{map_api_error, MondayError};
use crate::graphql::{GraphQlRequest, GraphQlResponse};
use crate::models::{BoardsData, ItemsData, MutationData};
use crate::queries::{
    CHANGE_COLUMN_VALUE_MUTATION, CHANGE_SIMPLE_COLUMN_VALUE_MUTATION, CREATE_UPDATE_MUTATION,
    SOURCE_SNAPSHOT_QUERY, TARGET_BOARD_QUERY, TARGET_ITEMS_QUERY,
};

/// API version pinned in the `API-Version` header
pub const API_VERSION: &str = "2024-10";

/// Client configuration
#[derive(Clone)]
pub struct MondayClientConfig {
    pub api_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for MondayClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MondayClientConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"[redacted]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl From<&MondayConfig> for MondayClientConfig {
    fn from(config: &MondayConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

/// GraphQL client for the monday.com API
#[derive(Clone)]
pub struct MondayClient {
    http: reqwest::Client,
    api_url: String,
}

impl MondayClient {
    /// Create a new client
    pub fn new(config: MondayClientConfig) -> Result<Self, MondayError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&config.api_key)
            .map_err(|_| MondayError::InvalidApiKey)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert("API-Version", HeaderValue::from_static(API_VERSION));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url,
        })
    }

    /// Send one query or mutation and decode its `data`
    pub async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<T, MondayError> {
        let response = self
            .http
            .post(&self.api_url)
            .json(&GraphQlRequest::new(query, variables))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let parsed: Result<GraphQlResponse<T>, _> = serde_json::from_str(&body);

        if !status.is_success() {
            let detail = parsed
                .ok()
                .and_then(|r| r.error_summary())
                .unwrap_or(body);
            return Err(MondayError::Status {
                status: status.as_u16(),
                body: detail,
            });
        }

        let parsed = parsed.map_err(MondayError::Decode)?;
        if let Some(summary) = parsed.error_summary() {
            return Err(MondayError::GraphQl(summary));
        }

        parsed.data.ok_or(MondayError::MissingData)
    }

    async fn mutate(&self, mutation: &str, variables: Value) -> ApiResult<String> {
        let data: MutationData = self
            .execute(mutation, variables)
            .await
            .map_err(map_api_error)?;

        data.result
            .map(|r| r.id_string())
            .ok_or_else(|| map_api_error(MondayError::MissingData))
    }
}

#[async_trait]
impl BoardApi for MondayClient {
    #[instrument(skip(self))]
    async fn fetch_source_snapshot(
        &self,
        item_id: ItemId,
        column_id: &ColumnId,
    ) -> ApiResult<SourceSnapshot> {
        let data: ItemsData = self
            .execute(
                SOURCE_SNAPSHOT_QUERY,
                json!({ "itemIds": [item_id], "columnIds": [column_id] }),
            )
            .await
            .map_err(map_api_error)?;

        let item = data
            .items
            .into_iter()
            .next()
            .ok_or(DomainError::SourceItemNotFound)?;
        let snapshot = item.into_snapshot().ok_or(DomainError::SourceColumnNotFound)?;

        debug!(
            item_name = %snapshot.item_name,
            column_title = %snapshot.column.column_title,
            raw_value = ?snapshot.column.raw_value,
            "Fetched source column value"
        );
        Ok(snapshot)
    }

    #[instrument(skip(self))]
    async fn fetch_target_board(
        &self,
        board_id: BoardId,
        include_columns: bool,
    ) -> ApiResult<TargetBoard> {
        let query = if include_columns {
            TARGET_BOARD_QUERY
        } else {
            TARGET_ITEMS_QUERY
        };

        let data: BoardsData = self
            .execute(query, json!({ "boardIds": [board_id] }))
            .await
            .map_err(map_api_error)?;

        let board: TargetBoard = data
            .boards
            .into_iter()
            .next()
            .map(Into::into)
            .ok_or_else(|| DomainError::Upstream(format!("board {board_id} was not returned")))?;

        debug!(
            items = board.items.len(),
            columns = board.columns.len(),
            "Fetched target board"
        );
        Ok(board)
    }

    #[instrument(skip(self, value))]
    async fn change_column_value(
        &self,
        board_id: BoardId,
        item_id: ItemId,
        column_id: &ColumnId,
        value: &str,
    ) -> ApiResult<ItemId> {
        let id = self
            .mutate(
                CHANGE_COLUMN_VALUE_MUTATION,
                json!({
                    "boardId": board_id,
                    "itemId": item_id,
                    "columnId": column_id,
                    "value": value,
                }),
            )
            .await?;
        parse_item_id(&id)
    }

    #[instrument(skip(self, value))]
    async fn change_simple_column_value(
        &self,
        board_id: BoardId,
        item_id: ItemId,
        column_id: &ColumnId,
        value: &str,
    ) -> ApiResult<ItemId> {
        let id = self
            .mutate(
                CHANGE_SIMPLE_COLUMN_VALUE_MUTATION,
                json!({
                    "boardId": board_id,
                    "itemId": item_id,
                    "columnId": column_id,
                    "value": value,
                }),
            )
            .await?;
        parse_item_id(&id)
    }

    #[instrument(skip(self, body))]
    async fn create_update(&self, item_id: ItemId, body: &str) -> ApiResult<String> {
        self.mutate(
            CREATE_UPDATE_MUTATION,
            json!({ "itemId": item_id, "body": body }),
        )
        .await
    }
}

fn parse_item_id(id: &str) -> ApiResult<ItemId> {
    ItemId::parse(id).map_err(|e| DomainError::Upstream(format!("unexpected item id {id:?}: {e}")))
}
