//! # Messaging Server Library
//!
//! Conversations, messages and per-message emoji reactions served over a
//! small JSON API.
//!
//! ## Architecture
//!
//! - **Domain Layer**: entities and the `Storage` contract
//! - **Application Layer**: request/response DTOs
//! - **Infrastructure Layer**: storage engine implementations
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! messaging_server/
//! +-- config/         Configuration management
//! +-- domain/         Entities and the storage trait
//! +-- application/    DTOs
//! +-- infrastructure/ In-memory storage engine
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Errors, validation, id generation
//! ```

// Configuration module
pub mod config;

// Domain layer - Entities and storage contract
pub mod domain;

// Application layer - DTOs
pub mod application;

// Infrastructure layer - Storage engines
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Logging setup
pub mod telemetry;
