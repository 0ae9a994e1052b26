//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use mockall::mock;
use serde_json::{json, Value};

use messaging_server::domain::{
    Conversation, Message, MessageReaction, NewMessage, NewReaction, NewUser, Storage,
    StorageError, User,
};
use messaging_server::infrastructure::storage::MemStorage;
use messaging_server::presentation::http::routes;
use messaging_server::startup::AppState;

/// Test application over an isolated in-memory store
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<MemStorage>,
}

impl TestApp {
    pub fn new() -> Self {
        let storage = Arc::new(MemStorage::new());
        let server = server_for(AppState::new(storage.clone()));
        Self { server, storage }
    }

    /// Create a conversation and return its JSON
    pub async fn create_conversation(&self, participants: &[&str]) -> Value {
        let response = self
            .server
            .post("/api/conversations")
            .json(&json!({ "participantIds": participants }))
            .await;
        response.assert_status_ok();
        response.json()
    }

    /// Send a text message and return its JSON
    pub async fn send_message(&self, conversation_id: &str, sender_id: &str, content: &str) -> Value {
        let response = self
            .server
            .post("/api/messages")
            .json(&json!({
                "conversationId": conversation_id,
                "senderId": sender_id,
                "content": content,
            }))
            .await;
        response.assert_status_ok();
        response.json()
    }

    /// Fetch the transcript of a conversation
    pub async fn transcript(&self, conversation_id: &str) -> Vec<Value> {
        let response = self
            .server
            .get(&format!("/api/conversations/{}/messages", conversation_id))
            .await;
        response.assert_status_ok();
        response.json()
    }
}

/// Build a test server over arbitrary state
pub fn server_for(state: AppState) -> TestServer {
    TestServer::new(routes::create_router(state)).expect("Failed to build test server")
}

/// Extract a string field from a JSON object
pub fn str_field<'a>(value: &'a Value, field: &str) -> &'a str {
    value[field]
        .as_str()
        .unwrap_or_else(|| panic!("missing string field `{}` in {}", field, value))
}

mock! {
    pub FaultyStorage {}

    #[async_trait]
    impl Storage for FaultyStorage {
        async fn get_user(&self, id: &str) -> Result<Option<User>, StorageError>;
        async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError>;
        async fn create_user(&self, user: NewUser) -> Result<User, StorageError>;
        async fn get_conversation(&self, id: &str) -> Result<Option<Conversation>, StorageError>;
        async fn get_conversations_by_user(&self, user_id: &str) -> Result<Vec<Conversation>, StorageError>;
        async fn create_conversation(&self, participant_ids: Vec<String>) -> Result<Conversation, StorageError>;
        async fn get_messages(&self, conversation_id: &str) -> Result<Vec<Message>, StorageError>;
        async fn create_message(&self, message: NewMessage) -> Result<Message, StorageError>;
        async fn mark_message_as_read(&self, message_id: &str) -> Result<(), StorageError>;
        async fn add_reaction(&self, reaction: NewReaction) -> Result<MessageReaction, StorageError>;
        async fn remove_reaction(&self, message_id: &str, user_id: &str, emoji: &str) -> Result<(), StorageError>;
        async fn get_message_reactions(&self, message_id: &str) -> Result<Vec<MessageReaction>, StorageError>;
    }
}

/// A storage fault carrying a detail that must never reach clients
pub fn connection_lost() -> StorageError {
    StorageError::Fault("connection to primary lost at 10.0.0.7".into())
}
