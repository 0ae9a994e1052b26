//! Conversation entity.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimum number of distinct participants a conversation needs.
pub const MIN_PARTICIPANTS: usize = 2;

/// A grouping of participants under which messages are exchanged.
///
/// `participant_ids` keeps the order supplied at creation. `created_at` is set
/// once by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub participant_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// Check whether the given user takes part in this conversation.
    pub fn has_participant(&self, user_id: &str) -> bool {
        self.participant_ids.iter().any(|p| p == user_id)
    }
}

/// Count the distinct, non-empty identifiers in a participant list.
pub fn distinct_participants(participant_ids: &[String]) -> usize {
    participant_ids
        .iter()
        .filter(|p| !p.is_empty())
        .collect::<HashSet<_>>()
        .len()
}
