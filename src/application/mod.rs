//! Application Layer
//!
//! Data transfer objects exchanged between the HTTP layer and clients.

pub mod dto;
