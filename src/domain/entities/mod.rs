//! # Domain Entities
//!
//! Core domain entities of the messaging subsystem.
//!
//! - **User**: registered account with a unique username
//! - **Conversation**: a set of participants exchanging messages
//! - **Message**: text posted in a conversation
//! - **MessageReaction**: an emoji a user attached to a message
//!
//! Each entity has a `New*` companion carrying the client-supplied fields; the
//! store fills in identifiers and timestamps.

mod conversation;
mod message;
mod reaction;
mod user;

pub use conversation::{distinct_participants, Conversation, MIN_PARTICIPANTS};
pub use message::{Message, NewMessage, DEFAULT_MESSAGE_TYPE};
pub use reaction::{MessageReaction, NewReaction};
pub use user::{NewUser, User};
