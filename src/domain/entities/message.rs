//! Message entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message type used when the sender does not supply one.
pub const DEFAULT_MESSAGE_TYPE: &str = "text";

/// Represents a message posted in a conversation.
///
/// - conversation_id: must reference an existing conversation
/// - content: non-empty text
/// - message_type: free-form token, `"text"` unless given
/// - is_read: only ever flips false -> true
/// - created_at: set once by the store, the transcript sort key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,

    pub conversation_id: String,

    pub sender_id: String,

    pub content: String,

    #[serde(rename = "type")]
    pub message_type: String,

    pub is_read: bool,

    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub conversation_id: String,
    pub sender_id: String,
    pub content: String,
    pub message_type: Option<String>,
    pub is_read: Option<bool>,
}

impl NewMessage {
    /// A plain unread text message.
    pub fn text(
        conversation_id: impl Into<String>,
        sender_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            sender_id: sender_id.into(),
            content: content.into(),
            message_type: None,
            is_read: None,
        }
    }
}
