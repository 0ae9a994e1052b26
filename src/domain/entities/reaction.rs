//! Message Reaction entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An emoji annotation a user attached to a single message.
///
/// At most one row exists per (message_id, user_id, emoji) triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageReaction {
    /// Store-assigned identifier
    pub id: String,

    /// Message this reaction is on
    pub message_id: String,

    /// User who added the reaction
    pub user_id: String,

    /// Emoji token, not checked against any allowed set
    pub emoji: String,

    /// When the reaction was added
    pub created_at: DateTime<Utc>,
}

impl MessageReaction {
    /// Check whether this row is the given (message, user, emoji) triple.
    pub fn matches(&self, message_id: &str, user_id: &str, emoji: &str) -> bool {
        self.message_id == message_id && self.user_id == user_id && self.emoji == emoji
    }
}

/// Fields accepted when adding a reaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReaction {
    pub message_id: String,
    pub user_id: String,
    pub emoji: String,
}

impl NewReaction {
    pub fn new(
        message_id: impl Into<String>,
        user_id: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            message_id: message_id.into(),
            user_id: user_id.into(),
            emoji: emoji.into(),
        }
    }
}
