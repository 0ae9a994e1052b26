//! Storage engine contract.
//!
//! Any backing technology (in-memory maps, a relational database, a document
//! store) implements [`Storage`] identically. Lookups report absence as `None`
//! or an empty `Vec`; only integrity violations and backend faults are errors.

use async_trait::async_trait;

use super::entities::{
    Conversation, Message, MessageReaction, NewMessage, NewReaction, NewUser, User,
};

/// Errors raised by a storage engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    #[error("Conversation needs at least {required} distinct participants, got {actual}")]
    NotEnoughParticipants { required: usize, actual: usize },

    #[error("Message content must not be empty")]
    EmptyContent,

    #[error("Unknown conversation: {0}")]
    UnknownConversation(String),

    #[error("Unknown message: {0}")]
    UnknownMessage(String),

    #[error("Storage fault: {0}")]
    Fault(String),
}

impl StorageError {
    /// Integrity violations are caused by the caller's input.
    pub fn is_integrity_violation(&self) -> bool {
        !matches!(self, Self::Fault(_))
    }
}

/// Storage engine operations for users, conversations, messages and reactions.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Find a user by id.
    async fn get_user(&self, id: &str) -> Result<Option<User>, StorageError>;

    /// Find a user by exact username.
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError>;

    /// Register a user. Fails with `DuplicateUsername` if the name is taken.
    async fn create_user(&self, user: NewUser) -> Result<User, StorageError>;

    /// Find a conversation by id.
    async fn get_conversation(&self, id: &str) -> Result<Option<Conversation>, StorageError>;

    /// Conversations the user participates in, newest first.
    async fn get_conversations_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<Conversation>, StorageError>;

    /// Create a conversation of at least two distinct participants.
    async fn create_conversation(
        &self,
        participant_ids: Vec<String>,
    ) -> Result<Conversation, StorageError>;

    /// Messages of a conversation, ascending by `created_at`, ties in
    /// insertion order. Empty if the conversation is unknown.
    async fn get_messages(&self, conversation_id: &str) -> Result<Vec<Message>, StorageError>;

    /// Create a message in an existing conversation.
    async fn create_message(&self, message: NewMessage) -> Result<Message, StorageError>;

    /// Set `is_read` on a message. Unknown ids are ignored.
    async fn mark_message_as_read(&self, message_id: &str) -> Result<(), StorageError>;

    /// Add a reaction to an existing message.
    ///
    /// Idempotent: if the exact triple is already present the existing row is
    /// returned and nothing is inserted.
    async fn add_reaction(&self, reaction: NewReaction) -> Result<MessageReaction, StorageError>;

    /// Delete the first reaction matching the triple. No-op if none match.
    async fn remove_reaction(
        &self,
        message_id: &str,
        user_id: &str,
        emoji: &str,
    ) -> Result<(), StorageError>;

    /// All reactions on a message, in the order they were added.
    async fn get_message_reactions(
        &self,
        message_id: &str,
    ) -> Result<Vec<MessageReaction>, StorageError>;
}
