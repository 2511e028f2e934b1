//! In-process fake of the monday.com GraphQL endpoint
//!
//! Serves one source item and one target board from memory and records
//! every request it receives.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A request received by the fake, classified by operation
#[derive(Debug, Clone, PartialEq)]
pub enum GraphQlCall {
    SourceSnapshot { variables: Value },
    TargetBoard { variables: Value, with_columns: bool },
    ChangeColumnValue { variables: Value },
    ChangeSimpleColumnValue { variables: Value },
    CreateUpdate { variables: Value },
    Unknown { query: String },
}

impl GraphQlCall {
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::ChangeColumnValue { .. }
                | Self::ChangeSimpleColumnValue { .. }
                | Self::CreateUpdate { .. }
        )
    }

    fn classify(body: &Value) -> Self {
        let query = body["query"].as_str().unwrap_or_default().to_string();
        let variables = body["variables"].clone();

        if query.contains("change_simple_column_value(") {
            Self::ChangeSimpleColumnValue { variables }
        } else if query.contains("change_column_value(") {
            Self::ChangeColumnValue { variables }
        } else if query.contains("create_update(") {
            Self::CreateUpdate { variables }
        } else if query.contains("items(ids") {
            Self::SourceSnapshot { variables }
        } else if query.contains("boards(ids") {
            Self::TargetBoard {
                variables,
                with_columns: query.contains("columns {"),
            }
        } else {
            Self::Unknown { query }
        }
    }
}

#[derive(Default)]
struct Board {
    source_name: String,
    source_column_title: String,
    source_value: Option<String>,
    items: Vec<(String, String)>,
    columns: Vec<(String, String)>,
    fail_mutations: bool,
}

#[derive(Clone, Default)]
struct FakeState {
    board: Arc<Mutex<Board>>,
    calls: Arc<Mutex<Vec<GraphQlCall>>>,
    auth: Arc<Mutex<Vec<Option<String>>>>,
}

/// Running fake monday.com API
pub struct FakeMonday {
    pub addr: SocketAddr,
    state: FakeState,
    _handle: JoinHandle<()>,
}

impl FakeMonday {
    /// Start the fake on an ephemeral local port
    pub async fn start() -> Result<Self> {
        let state = FakeState::default();
        let app = Router::new()
            .route("/v2", post(graphql))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            state,
            _handle: handle,
        })
    }

    /// URL to configure as `MONDAY_API_URL`
    pub fn url(&self) -> String {
        format!("http://{}/v2", self.addr)
    }

    /// Set the source item and the value of its changed column
    pub fn set_source(&self, item_name: &str, column_title: &str, value: Option<&str>) {
        let mut board = self.state.board.lock();
        board.source_name = item_name.to_string();
        board.source_column_title = column_title.to_string();
        board.source_value = value.map(String::from);
    }

    pub fn add_item(&self, id: &str, name: &str) {
        self.state
            .board
            .lock()
            .items
            .push((id.to_string(), name.to_string()));
    }

    pub fn add_column(&self, id: &str, title: &str) {
        self.state
            .board
            .lock()
            .columns
            .push((id.to_string(), title.to_string()));
    }

    /// Answer every mutation with a GraphQL error
    pub fn fail_mutations(&self) {
        self.state.board.lock().fail_mutations = true;
    }

    pub fn calls(&self) -> Vec<GraphQlCall> {
        self.state.calls.lock().clone()
    }

    pub fn mutations(&self) -> Vec<GraphQlCall> {
        self.calls().into_iter().filter(GraphQlCall::is_mutation).collect()
    }

    /// `Authorization` header of every request, in order
    pub fn auth_headers(&self) -> Vec<Option<String>> {
        self.state.auth.lock().clone()
    }
}

async fn graphql(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let call = GraphQlCall::classify(&body);
    state.calls.lock().push(call.clone());
    state.auth.lock().push(
        headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(String::from),
    );

    let board = state.board.lock();

    if call.is_mutation() && board.fail_mutations {
        return (
            StatusCode::OK,
            Json(json!({"errors": [{"message": "Column not writable"}]})),
        );
    }

    let reply = match call {
        GraphQlCall::SourceSnapshot { .. } => json!({"data": {"items": [{
            "name": board.source_name,
            "column_values": [{
                "column": {"title": board.source_column_title},
                "value": board.source_value,
            }]
        }]}}),
        GraphQlCall::TargetBoard { with_columns, .. } => {
            let items: Vec<Value> = board
                .items
                .iter()
                .map(|(id, name)| json!({"id": id, "name": name}))
                .collect();
            let mut target = json!({"items_page": {"items": items}});
            if with_columns {
                target["columns"] = board
                    .columns
                    .iter()
                    .map(|(id, title)| json!({"id": id, "title": title}))
                    .collect();
            }
            json!({"data": {"boards": [target]}})
        }
        GraphQlCall::ChangeColumnValue { ref variables } => {
            json!({"data": {"change_column_value": {"id": variables["itemId"]}}})
        }
        GraphQlCall::ChangeSimpleColumnValue { ref variables } => {
            json!({"data": {"change_simple_column_value": {"id": variables["itemId"]}}})
        }
        GraphQlCall::CreateUpdate { .. } => json!({"data": {"create_update": {"id": "777"}}}),
        GraphQlCall::Unknown { .. } => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error_message": "Unsupported query", "status_code": 400})),
            );
        }
    };

    (StatusCode::OK, Json(reply))
}
