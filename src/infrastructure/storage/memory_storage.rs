//! In-Memory Storage Implementation
//!
//! Keeps every entity in process memory. Each collection sits behind its own
//! `RwLock` so handlers on different runtime threads can share one store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::domain::{
    distinct_participants, Conversation, Message, MessageReaction, NewMessage, NewReaction,
    NewUser, Storage, StorageError, User, DEFAULT_MESSAGE_TYPE, MIN_PARTICIPANTS,
};
use crate::shared::id;

/// A stored row stamped with its insertion sequence number.
#[derive(Debug, Clone)]
struct Row<T> {
    seq: u64,
    value: T,
}

/// In-memory storage engine.
///
/// Rows are stamped from a store-wide sequence counter on insert; the stamp
/// breaks `created_at` ties so ordering always follows insertion.
#[derive(Debug, Default)]
pub struct MemStorage {
    users: RwLock<HashMap<String, User>>,
    conversations: RwLock<HashMap<String, Row<Conversation>>>,
    messages: RwLock<HashMap<String, Row<Message>>>,
    reactions: RwLock<Vec<MessageReaction>>,
    sequence: AtomicU64,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_seq(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed)
    }

    /// Total number of stored messages across all conversations.
    pub fn message_count(&self) -> usize {
        self.messages.read().len()
    }

    /// Total number of stored reactions across all messages.
    pub fn reaction_count(&self) -> usize {
        self.reactions.read().len()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: &str) -> Result<Option<User>, StorageError> {
        Ok(self.users.read().get(id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        Ok(self
            .users
            .read()
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StorageError> {
        let mut users = self.users.write();

        if users.values().any(|u| u.username == user.username) {
            return Err(StorageError::DuplicateUsername(user.username));
        }

        let user = User {
            id: id::generate(),
            username: user.username,
            password: user.password,
        };
        users.insert(user.id.clone(), user.clone());

        tracing::debug!(user_id = %user.id, "User created");
        Ok(user)
    }

    async fn get_conversation(&self, id: &str) -> Result<Option<Conversation>, StorageError> {
        Ok(self
            .conversations
            .read()
            .get(id)
            .map(|row| row.value.clone()))
    }

    async fn get_conversations_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<Conversation>, StorageError> {
        let conversations = self.conversations.read();

        let mut rows: Vec<&Row<Conversation>> = conversations
            .values()
            .filter(|row| row.value.has_participant(user_id))
            .collect();

        // Newest first
        rows.sort_by(|a, b| {
            b.value
                .created_at
                .cmp(&a.value.created_at)
                .then(b.seq.cmp(&a.seq))
        });

        Ok(rows.into_iter().map(|row| row.value.clone()).collect())
    }

    async fn create_conversation(
        &self,
        participant_ids: Vec<String>,
    ) -> Result<Conversation, StorageError> {
        let actual = distinct_participants(&participant_ids);
        if actual < MIN_PARTICIPANTS {
            return Err(StorageError::NotEnoughParticipants {
                required: MIN_PARTICIPANTS,
                actual,
            });
        }

        // Timestamp and sequence are taken under the write lock so they agree
        let mut conversations = self.conversations.write();
        let conversation = Conversation {
            id: id::generate(),
            participant_ids,
            created_at: Utc::now(),
        };
        conversations.insert(
            conversation.id.clone(),
            Row {
                seq: self.next_seq(),
                value: conversation.clone(),
            },
        );
        drop(conversations);

        tracing::debug!(
            conversation_id = %conversation.id,
            participants = actual,
            "Conversation created"
        );
        Ok(conversation)
    }

    async fn get_messages(&self, conversation_id: &str) -> Result<Vec<Message>, StorageError> {
        let messages = self.messages.read();

        let mut rows: Vec<&Row<Message>> = messages
            .values()
            .filter(|row| row.value.conversation_id == conversation_id)
            .collect();

        rows.sort_by(|a, b| {
            a.value
                .created_at
                .cmp(&b.value.created_at)
                .then(a.seq.cmp(&b.seq))
        });

        Ok(rows.into_iter().map(|row| row.value.clone()).collect())
    }

    async fn create_message(&self, message: NewMessage) -> Result<Message, StorageError> {
        if message.content.is_empty() {
            return Err(StorageError::EmptyContent);
        }

        if !self
            .conversations
            .read()
            .contains_key(&message.conversation_id)
        {
            return Err(StorageError::UnknownConversation(message.conversation_id));
        }

        let mut messages = self.messages.write();
        let message = Message {
            id: id::generate(),
            conversation_id: message.conversation_id,
            sender_id: message.sender_id,
            content: message.content,
            message_type: message
                .message_type
                .unwrap_or_else(|| DEFAULT_MESSAGE_TYPE.to_string()),
            is_read: message.is_read.unwrap_or(false),
            created_at: Utc::now(),
        };

        messages.insert(
            message.id.clone(),
            Row {
                seq: self.next_seq(),
                value: message.clone(),
            },
        );
        drop(messages);

        tracing::debug!(
            message_id = %message.id,
            conversation_id = %message.conversation_id,
            "Message created"
        );
        Ok(message)
    }

    async fn mark_message_as_read(&self, message_id: &str) -> Result<(), StorageError> {
        if let Some(row) = self.messages.write().get_mut(message_id) {
            row.value.is_read = true;
        }
        Ok(())
    }

    async fn add_reaction(&self, reaction: NewReaction) -> Result<MessageReaction, StorageError> {
        if !self.messages.read().contains_key(&reaction.message_id) {
            return Err(StorageError::UnknownMessage(reaction.message_id));
        }

        let mut reactions = self.reactions.write();

        if let Some(existing) = reactions
            .iter()
            .find(|r| r.matches(&reaction.message_id, &reaction.user_id, &reaction.emoji))
        {
            return Ok(existing.clone());
        }

        let reaction = MessageReaction {
            id: id::generate(),
            message_id: reaction.message_id,
            user_id: reaction.user_id,
            emoji: reaction.emoji,
            created_at: Utc::now(),
        };
        reactions.push(reaction.clone());

        tracing::debug!(
            reaction_id = %reaction.id,
            message_id = %reaction.message_id,
            "Reaction added"
        );
        Ok(reaction)
    }

    async fn remove_reaction(
        &self,
        message_id: &str,
        user_id: &str,
        emoji: &str,
    ) -> Result<(), StorageError> {
        let mut reactions = self.reactions.write();

        if let Some(pos) = reactions
            .iter()
            .position(|r| r.matches(message_id, user_id, emoji))
        {
            let removed = reactions.remove(pos);
            tracing::debug!(reaction_id = %removed.id, "Reaction removed");
        }

        Ok(())
    }

    async fn get_message_reactions(
        &self,
        message_id: &str,
    ) -> Result<Vec<MessageReaction>, StorageError> {
        Ok(self
            .reactions
            .read()
            .iter()
            .filter(|r| r.message_id == message_id)
            .cloned()
            .collect())
    }
}
