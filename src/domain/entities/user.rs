//! User entity.
//!
//! Users are created once through registration and never change afterwards.

use serde::{Deserialize, Serialize};

/// Represents a registered account.
///
/// - id: opaque unique string assigned by the store
/// - username: unique across all users
/// - password: opaque credential string, never serialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier
    pub id: String,

    /// Unique login name
    pub username: String,

    /// Opaque credential
    #[serde(skip_serializing, default)]
    pub password: String,
}

/// Fields required to register a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}
