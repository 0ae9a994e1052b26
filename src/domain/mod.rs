//! # Domain Layer
//!
//! Entities of the messaging subsystem and the storage contract they are kept
//! behind. Nothing here depends on the HTTP layer or on a concrete store.
//!
//! - **entities**: User, Conversation, Message, MessageReaction
//! - **storage**: the `Storage` trait and `StorageError`

pub mod entities;
pub mod storage;

pub use entities::*;
pub use storage::{Storage, StorageError};
