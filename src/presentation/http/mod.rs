//! HTTP Layer
//!
//! Router, extractors and endpoint handlers.

pub mod extractors;
pub mod handlers;
pub mod routes;
