//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::{Message, MessageReaction};

/// A message together with every reaction attached to it.
#[derive(Debug, Clone, Serialize)]
pub struct MessageWithReactions {
    #[serde(flatten)]
    pub message: Message,
    pub reactions: Vec<MessageReaction>,
}

impl MessageWithReactions {
    pub fn new(message: Message, reactions: Vec<MessageReaction>) -> Self {
        Self { message, reactions }
    }
}

/// Acknowledgement for operations with nothing else to return.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
