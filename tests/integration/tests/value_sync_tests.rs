//! Value-sync relay integration tests
//!
//! Each test starts a fake monday.com API and the relay on local ports.
//!
//! Run with: cargo test -p integration-tests --test value_sync_tests

use integration_tests::{
    assert_status, assert_text, column_change, FakeMonday, GraphQlCall, TestServer,
    TEST_TARGET_BOARD_ID,
};
use reqwest::StatusCode;
use serde_json::json;

async fn setup() -> (FakeMonday, TestServer) {
    let monday = FakeMonday::start().await.expect("Failed to start fake API");
    monday.add_item("3001", "Widget A");
    monday.add_item("3002", "Widget B");
    monday.add_column("status_mkr1", "Status");
    monday.add_column("timeline_mkr2", "Timeline");
    monday.add_column("text_mkr3", "Notes");

    let server = TestServer::value_sync(&monday)
        .await
        .expect("Failed to start server");
    (monday, server)
}

// ============================================================================
// Ingress
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let (_monday, server) = setup().await;
    let response = server.get("/").await.unwrap();
    let body = assert_text(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, "monday-sync-value, server is running!");
}

#[tokio::test]
async fn test_challenge_is_echoed() {
    let (monday, server) = setup().await;

    let response = server
        .post("/monday-webhook", &json!({"challenge": "abc123"}))
        .await
        .unwrap();
    let body = assert_text(response, StatusCode::OK).await.unwrap();

    assert_eq!(body, r#"{"challenge":"abc123"}"#);
    assert!(monday.calls().is_empty());
}

#[tokio::test]
async fn test_missing_event() {
    let (monday, server) = setup().await;

    let response = server.post("/monday-webhook", &json!({})).await.unwrap();
    let body = assert_text(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body, "Invalid webhook payload: Missing event data");
    assert!(monday.calls().is_empty());
}

#[tokio::test]
async fn test_missing_column_id_makes_no_outbound_call() {
    let (monday, server) = setup().await;
    let mut payload = column_change(100, 200, "status");
    payload["event"]
        .as_object_mut()
        .unwrap()
        .remove("columnId");

    let response = server.post("/monday-webhook", &payload).await.unwrap();
    let body = assert_text(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body, "Invalid webhook payload: Missing required fields");
    assert!(monday.calls().is_empty());
}

#[tokio::test]
async fn test_malformed_json() {
    let (monday, server) = setup().await;

    let response = server
        .post_raw("/monday-webhook", r#"{"event": {"boardId": 1"#)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(monday.calls().is_empty());
}

// ============================================================================
// Normalization and resolution
// ============================================================================

#[tokio::test]
async fn test_value_is_reserialized_onto_target() {
    let (monday, server) = setup().await;
    let raw = r#"{"index":1,"post_id":null,"changed_at":"2024-11-20T08:12:41.000Z"}"#;
    monday.set_source("Widget B", "Status", Some(raw));

    let response = server
        .post("/monday-webhook", &column_change(100, 200, "status"))
        .await
        .unwrap();
    let body = assert_text(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, "Success");

    let calls = monday.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(
        calls[0],
        GraphQlCall::SourceSnapshot {
            variables: json!({"itemIds": ["200"], "columnIds": ["status"]})
        }
    );
    assert!(matches!(
        calls[1],
        GraphQlCall::TargetBoard {
            with_columns: true,
            ..
        }
    ));
    assert_eq!(
        calls[2],
        GraphQlCall::ChangeColumnValue {
            variables: json!({
                "boardId": TEST_TARGET_BOARD_ID.to_string(),
                "itemId": "3002",
                "columnId": "status_mkr1",
                "value": raw,
            })
        }
    );
    assert!(monday
        .auth_headers()
        .iter()
        .all(|auth| auth.as_deref() == Some("test-api-key")));
}

#[tokio::test]
async fn test_quotes_in_values_survive() {
    let (monday, server) = setup().await;
    let raw = r#"{"text":"He said \"ship it\" \\o/"}"#;
    monday.set_source("Widget A", "Notes", Some(raw));

    let response = server
        .post("/monday-webhook", &column_change(100, 200, "text"))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let mutations = monday.mutations();
    let [GraphQlCall::ChangeColumnValue { variables }] = mutations.as_slice() else {
        panic!("expected one change_column_value, got {mutations:?}");
    };
    let sent: serde_json::Value =
        serde_json::from_str(variables["value"].as_str().unwrap()).unwrap();
    assert_eq!(sent, json!({"text": "He said \"ship it\" \\o/"}));
}

#[tokio::test]
async fn test_cleared_field_uses_simple_mutation() {
    let (monday, server) = setup().await;
    monday.set_source("Widget A", "Notes", None);

    let response = server
        .post("/monday-webhook", &column_change(100, 200, "text"))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    assert_eq!(
        monday.mutations(),
        vec![GraphQlCall::ChangeSimpleColumnValue {
            variables: json!({
                "boardId": TEST_TARGET_BOARD_ID.to_string(),
                "itemId": "3001",
                "columnId": "text_mkr3",
                "value": "",
            })
        }]
    );
}

#[tokio::test]
async fn test_cleared_timeline_uses_empty_object() {
    let (monday, server) = setup().await;
    monday.set_source("Widget A", "Timeline", None);

    let response = server
        .post("/monday-webhook", &column_change(100, 200, "timeline"))
        .await
        .unwrap();
    let body = assert_text(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, "Success");

    assert_eq!(
        monday.mutations(),
        vec![GraphQlCall::ChangeColumnValue {
            variables: json!({
                "boardId": TEST_TARGET_BOARD_ID.to_string(),
                "itemId": "3001",
                "columnId": "timeline_mkr2",
                "value": "{}",
            })
        }]
    );
}

#[tokio::test]
async fn test_unknown_target_item_is_not_written() {
    let (monday, server) = setup().await;
    monday.set_source("Widget Z", "Status", Some(r#"{"index":2}"#));

    let response = server
        .post("/monday-webhook", &column_change(100, 200, "status"))
        .await
        .unwrap();
    let body = assert_text(response, StatusCode::OK).await.unwrap();

    assert!(body.starts_with("Skipped"));
    assert!(monday.mutations().is_empty());
}

#[tokio::test]
async fn test_resolution_is_idempotent() {
    let (monday, server) = setup().await;
    monday.set_source("Widget B", "Status", Some(r#"{"index":3}"#));

    for _ in 0..2 {
        let response = server
            .post("/monday-webhook", &column_change(100, 200, "status"))
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let mutations = monday.mutations();
    assert_eq!(mutations.len(), 2);
    assert_eq!(mutations[0], mutations[1]);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_upstream_failure_is_500() {
    let (monday, server) = setup().await;
    monday.set_source("Widget A", "Status", Some(r#"{"index":1}"#));
    monday.fail_mutations();

    let response = server
        .post("/monday-webhook", &column_change(100, 200, "status"))
        .await
        .unwrap();
    let body = assert_text(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();

    assert_eq!(body, "Failed to process webhook");
    assert_eq!(monday.mutations().len(), 1);
}

#[tokio::test]
async fn test_undecodable_value_is_500() {
    let (monday, server) = setup().await;
    monday.set_source("Widget A", "Status", Some("{not json"));

    let response = server
        .post("/monday-webhook", &column_change(100, 200, "status"))
        .await
        .unwrap();
    assert_status(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert!(monday.mutations().is_empty());
}

#[tokio::test]
async fn test_empty_value_is_500_not_a_clear() {
    let (monday, server) = setup().await;
    monday.set_source("Widget A", "Timeline", Some(""));

    let response = server
        .post("/monday-webhook", &column_change(100, 200, "timeline"))
        .await
        .unwrap();
    let body = assert_text(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();

    assert_eq!(body, "Failed to process webhook");
    assert!(monday.mutations().is_empty());
}
