//! Update-sync relay integration tests
//!
//! Each test starts a fake monday.com API and the relay on local ports.
//! Message events are processed after the 200 is sent, so outbound calls
//! are polled for.
//!
//! Run with: cargo test -p integration-tests --test update_sync_tests

use std::time::Duration;

use integration_tests::{
    assert_json, assert_status, assert_text, eventually, slack_message, slack_url_verification,
    FakeMonday, GraphQlCall, TestServer, TEST_BOT_ID, TEST_CHANNEL_ID, TEST_SIGNING_SECRET,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

const EVENTS: &str = "/slack/events";

async fn setup() -> (FakeMonday, TestServer) {
    let monday = FakeMonday::start().await.expect("Failed to start fake API");
    monday.add_item("4001", "Widget A");
    monday.add_item("4002", "Widget B");

    let server = TestServer::update_sync(&monday)
        .await
        .expect("Failed to start server");
    (monday, server)
}

/// Give a spawned task time to make calls that must not happen
async fn settle() {
    tokio::time::sleep(Duration::from_millis(200)).await;
}

#[tokio::test]
async fn test_health_check() {
    let (_monday, server) = setup().await;
    let response = server.get("/").await.unwrap();
    let body = assert_text(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, "slack-sync-update, server is running!");
}

#[tokio::test]
async fn test_url_verification() {
    let (_monday, server) = setup().await;

    let response = server
        .post_slack(EVENTS, &slack_url_verification("abc123"), TEST_SIGNING_SECRET)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({"challenge": "abc123"}));
}

#[tokio::test]
async fn test_bad_signature_is_rejected_without_outbound_call() {
    let (monday, server) = setup().await;
    let body = slack_message(
        Some(TEST_BOT_ID),
        TEST_CHANNEL_ID,
        "Jane updated Widget A on board Project X",
        Some("New status: Done"),
    );

    let response = server.post_slack(EVENTS, &body, "wrong-secret").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    settle().await;
    assert!(monday.calls().is_empty());
}

#[tokio::test]
async fn test_bot_message_becomes_update() {
    let (monday, server) = setup().await;
    let body = slack_message(
        Some(TEST_BOT_ID),
        TEST_CHANNEL_ID,
        "Jane Doe updated *<https://acme.monday.com/boards/1/pulses/2|Widget B>* on board *Project X*",
        Some("New status: Done"),
    );

    let response = server
        .post_slack(EVENTS, &body, TEST_SIGNING_SECRET)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    assert!(eventually(|| !monday.mutations().is_empty()).await);
    assert_eq!(
        monday.mutations(),
        vec![GraphQlCall::CreateUpdate {
            variables: json!({"itemId": "4002", "body": "New status: Done"})
        }]
    );
    assert!(matches!(
        monday.calls()[0],
        GraphQlCall::TargetBoard {
            with_columns: false,
            ..
        }
    ));
}

#[tokio::test]
async fn test_unknown_item_makes_no_update() {
    let (monday, server) = setup().await;
    let body = slack_message(
        Some(TEST_BOT_ID),
        TEST_CHANNEL_ID,
        "... updated Widget C on board Project X ...",
        Some("New status: Done"),
    );

    let response = server
        .post_slack(EVENTS, &body, TEST_SIGNING_SECRET)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    assert!(eventually(|| !monday.calls().is_empty()).await);
    settle().await;
    assert!(monday.mutations().is_empty());
}

#[tokio::test]
async fn test_human_message_is_ignored() {
    let (monday, server) = setup().await;
    let body = slack_message(
        None,
        TEST_CHANNEL_ID,
        "I updated Widget A on board Project X",
        Some("hi"),
    );

    let response = server
        .post_slack(EVENTS, &body, TEST_SIGNING_SECRET)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    settle().await;
    assert!(monday.calls().is_empty());
}

#[tokio::test]
async fn test_other_bot_is_ignored() {
    let (monday, server) = setup().await;
    let body = slack_message(
        Some("B0OTHER"),
        TEST_CHANNEL_ID,
        "Jane updated Widget A on board Project X",
        Some("hi"),
    );

    let response = server
        .post_slack(EVENTS, &body, TEST_SIGNING_SECRET)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    settle().await;
    assert!(monday.calls().is_empty());
}

#[tokio::test]
async fn test_other_channel_is_still_synced() {
    let (monday, server) = setup().await;
    let body = slack_message(
        Some(TEST_BOT_ID),
        "C0ELSEWHERE",
        "Jane updated Widget A on board Project X",
        Some("Moved to review"),
    );

    let response = server
        .post_slack(EVENTS, &body, TEST_SIGNING_SECRET)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    assert!(eventually(|| !monday.mutations().is_empty()).await);
}

#[tokio::test]
async fn test_missing_attachment_is_discarded() {
    let (monday, server) = setup().await;
    let body = slack_message(
        Some(TEST_BOT_ID),
        TEST_CHANNEL_ID,
        "Jane updated Widget A on board Project X",
        None,
    );

    let response = server
        .post_slack(EVENTS, &body, TEST_SIGNING_SECRET)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    settle().await;
    assert!(monday.calls().is_empty());
}
