//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints. Handlers hold no state of their
//! own; everything goes through the `Storage` in `AppState`.

pub mod conversation;
pub mod health;
pub mod message;
pub mod reaction;
