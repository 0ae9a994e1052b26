//! Message API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{str_field, TestApp};

#[tokio::test]
async fn test_send_message_and_read_transcript() {
    let app = TestApp::new();
    let conversation = app.create_conversation(&["u1", "u2"]).await;
    let conversation_id = str_field(&conversation, "id");

    let created = app.send_message(conversation_id, "u1", "hi").await;
    assert_eq!(created["content"], "hi");
    assert_eq!(created["type"], "text");
    assert_eq!(created["isRead"], false);
    assert!(created.get("reactions").is_none());

    let transcript = app.transcript(conversation_id).await;
    assert_eq!(transcript.len(), 1);

    let message = &transcript[0];
    assert_eq!(message["id"], created["id"]);
    assert_eq!(message["conversationId"], conversation_id);
    assert_eq!(message["senderId"], "u1");
    assert_eq!(message["content"], "hi");
    assert_eq!(message["isRead"], false);
    assert_eq!(message["reactions"], json!([]));
}

#[tokio::test]
async fn test_transcript_in_creation_order() {
    let app = TestApp::new();
    let conversation = app.create_conversation(&["u1", "u2"]).await;
    let conversation_id = str_field(&conversation, "id");

    let mut sent = Vec::new();
    for i in 0..10 {
        let sender = if i % 2 == 0 { "u1" } else { "u2" };
        let message = app.send_message(conversation_id, sender, &format!("msg {}", i)).await;
        sent.push(str_field(&message, "id").to_string());
    }

    let listed: Vec<String> = app
        .transcript(conversation_id)
        .await
        .iter()
        .map(|m| str_field(m, "id").to_string())
        .collect();
    assert_eq!(listed, sent);
}

#[tokio::test]
async fn test_send_message_keeps_type_and_read_flag() {
    let app = TestApp::new();
    let conversation = app.create_conversation(&["u1", "u2"]).await;

    let response = app
        .server
        .post("/api/messages")
        .json(&json!({
            "conversationId": conversation["id"],
            "senderId": "u1",
            "content": "clip-42",
            "type": "audio",
            "isRead": true,
        }))
        .await;
    response.assert_status_ok();

    let message: Value = response.json();
    assert_eq!(message["type"], "audio");
    assert_eq!(message["isRead"], true);
}

#[tokio::test]
async fn test_send_message_missing_sender_is_rejected() {
    let app = TestApp::new();
    let conversation = app.create_conversation(&["u1", "u2"]).await;
    let conversation_id = str_field(&conversation, "id");

    let response = app
        .server
        .post("/api/messages")
        .json(&json!({ "conversationId": conversation_id, "content": "hi" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Invalid message data" }));
    assert!(app.transcript(conversation_id).await.is_empty());
    assert_eq!(app.storage.message_count(), 0);
}

#[tokio::test]
async fn test_send_message_empty_content_is_rejected() {
    let app = TestApp::new();
    let conversation = app.create_conversation(&["u1", "u2"]).await;
    let conversation_id = str_field(&conversation, "id");
    app.send_message(conversation_id, "u1", "first").await;

    let response = app
        .server
        .post("/api/messages")
        .json(&json!({ "conversationId": conversation_id, "senderId": "u1", "content": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Invalid message data" }));
    assert_eq!(app.storage.message_count(), 1);
}

#[tokio::test]
async fn test_send_message_wrong_field_type_is_rejected() {
    let app = TestApp::new();
    let conversation = app.create_conversation(&["u1", "u2"]).await;

    let response = app
        .server
        .post("/api/messages")
        .json(&json!({ "conversationId": conversation["id"], "senderId": 7, "content": "hi" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(app.storage.message_count(), 0);
}

#[tokio::test]
async fn test_send_message_to_unknown_conversation_is_rejected() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/messages")
        .json(&json!({ "conversationId": "nope", "senderId": "u1", "content": "hi" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Invalid message data" }));
    assert_eq!(app.storage.message_count(), 0);
}

#[tokio::test]
async fn test_send_message_invalid_json_is_rejected() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/messages")
        .bytes("{\"conversationId\": ".into())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Invalid message data" }));
}

#[tokio::test]
async fn test_transcript_of_unknown_conversation_is_empty() {
    let app = TestApp::new();
    assert!(app.transcript("missing").await.is_empty());
}
