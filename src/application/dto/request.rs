//! Request DTOs
//!
//! Data structures for API request bodies. Each body names the generic error
//! message its endpoint answers with when the body is rejected.

use serde::Deserialize;
use validator::Validate;

use crate::domain::{NewMessage, NewReaction};

/// A request body with a fixed client-facing rejection message.
pub trait RequestBody {
    const INVALID: &'static str;
}

/// Create message request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    pub conversation_id: String,

    pub sender_id: String,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,

    #[serde(rename = "type")]
    pub message_type: Option<String>,

    pub is_read: Option<bool>,
}

impl RequestBody for CreateMessageRequest {
    const INVALID: &'static str = "Invalid message data";
}

impl From<CreateMessageRequest> for NewMessage {
    fn from(body: CreateMessageRequest) -> Self {
        Self {
            conversation_id: body.conversation_id,
            sender_id: body.sender_id,
            content: body.content,
            message_type: body.message_type,
            is_read: body.is_read,
        }
    }
}

/// Add reaction request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddReactionRequest {
    #[validate(length(min = 1, message = "User ID is required"))]
    pub user_id: String,

    #[validate(length(min = 1, message = "Emoji is required"))]
    pub emoji: String,
}

impl RequestBody for AddReactionRequest {
    const INVALID: &'static str = "Failed to add reaction";
}

impl AddReactionRequest {
    pub fn into_new_reaction(self, message_id: String) -> NewReaction {
        NewReaction {
            message_id,
            user_id: self.user_id,
            emoji: self.emoji,
        }
    }
}

/// Remove reaction request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RemoveReactionRequest {
    #[validate(length(min = 1, message = "User ID is required"))]
    pub user_id: String,

    #[validate(length(min = 1, message = "Emoji is required"))]
    pub emoji: String,
}

impl RequestBody for RemoveReactionRequest {
    const INVALID: &'static str = "Failed to remove reaction";
}

/// Create conversation request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateConversationRequest {
    pub participant_ids: Vec<String>,
}

impl RequestBody for CreateConversationRequest {
    const INVALID: &'static str = "Failed to create conversation";
}
