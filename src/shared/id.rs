//! Identifier Generation
//!
//! Random UUIDv4 strings. All four collections draw from the same generator,
//! so ids never collide across entity kinds.

use uuid::Uuid;

/// Generate a fresh opaque identifier.
pub fn generate() -> String {
    Uuid::new_v4().to_string()
}
