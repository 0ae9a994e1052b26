//! Conversation API Tests

use axum::http::StatusCode;
use chrono::DateTime;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{str_field, TestApp};

#[tokio::test]
async fn test_create_conversation() {
    let app = TestApp::new();

    let conversation = app.create_conversation(&["u1", "u2"]).await;

    assert!(!str_field(&conversation, "id").is_empty());
    assert_eq!(conversation["participantIds"], json!(["u1", "u2"]));
    assert!(DateTime::parse_from_rfc3339(str_field(&conversation, "createdAt")).is_ok());
}

#[tokio::test]
async fn test_conversations_listed_for_every_participant_only() {
    let app = TestApp::new();
    let conversation = app.create_conversation(&["u1", "u2", "u3"]).await;
    let id = str_field(&conversation, "id").to_string();

    for user in ["u1", "u2", "u3"] {
        let response = app.server.get(&format!("/api/conversations/{}", user)).await;
        response.assert_status_ok();

        let listed: Vec<Value> = response.json();
        let ids: Vec<&str> = listed.iter().map(|c| str_field(c, "id")).collect();
        assert_eq!(ids, vec![id.as_str()]);
    }

    let response = app.server.get("/api/conversations/outsider").await;
    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_create_conversation_needs_two_distinct_participants() {
    let app = TestApp::new();

    for participants in [json!([]), json!(["u1"]), json!(["u1", "u1"])] {
        let response = app
            .server
            .post("/api/conversations")
            .json(&json!({ "participantIds": participants }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "Failed to create conversation" }));
    }

    let response = app.server.get("/api/conversations/u1").await;
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_create_conversation_malformed_body() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/conversations")
        .json(&json!({ "participantIds": "u1,u2" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Failed to create conversation" }));

    let response = app
        .server
        .post("/api/conversations")
        .json(&json!({}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
