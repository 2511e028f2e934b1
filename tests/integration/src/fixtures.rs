//! Test fixtures
//!
//! Webhook and Slack payloads as the platforms send them.

use serde_json::{json, Value};

/// monday.com "column value changed" webhook
pub fn column_change(board_id: i64, pulse_id: i64, column_id: &str) -> Value {
    json!({
        "event": {
            "app": "monday",
            "type": "update_column_value",
            "triggerTime": "2024-11-20T08:12:41.000Z",
            "subscriptionId": 401_234_567,
            "userId": 55_555_555,
            "originalTriggerUuid": null,
            "boardId": board_id,
            "groupId": "topics",
            "pulseId": pulse_id,
            "pulseName": "Widget A",
            "columnId": column_id,
            "columnType": "color",
            "columnTitle": "Status",
            "value": {"label": {"index": 1, "text": "Done"}},
            "previousValue": null,
            "changedAt": 1_732_090_361.0,
            "isTopGroup": true,
            "triggerUuid": "2f1c6a4b7d8e9f0a1b2c3d4e5f6a7b8c"
        }
    })
}

/// Slack `event_callback` carrying a message
pub fn slack_message(bot_id: Option<&str>, channel: &str, text: &str, attachment: Option<&str>) -> String {
    let mut event = json!({
        "type": "message",
        "channel": channel,
        "channel_type": "channel",
        "text": text,
        "ts": "1732090361.000200",
    });
    if let Some(bot_id) = bot_id {
        event["subtype"] = json!("bot_message");
        event["bot_id"] = json!(bot_id);
    }
    if let Some(attachment) = attachment {
        event["attachments"] = json!([{"fallback": attachment, "text": attachment}]);
    }

    json!({
        "token": "legacy-verification-token",
        "team_id": "T0TEAM",
        "api_app_id": "A0APP",
        "type": "event_callback",
        "event_id": "Ev0EVENT",
        "event_time": 1_732_090_361,
        "event": event,
    })
    .to_string()
}

/// Slack endpoint verification
pub fn slack_url_verification(challenge: &str) -> String {
    json!({
        "token": "legacy-verification-token",
        "challenge": challenge,
        "type": "url_verification",
    })
    .to_string()
}
