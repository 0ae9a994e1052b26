//! Storage Implementations
//!
//! Concrete variants of the domain `Storage` trait.
//!
//! ## Available Engines
//!
//! - **MemStorage** - process-lifetime maps, reset on restart
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use messaging_server::domain::Storage;
//! use messaging_server::infrastructure::storage::MemStorage;
//!
//! let storage: Arc<dyn Storage> = Arc::new(MemStorage::new());
//! ```

pub mod memory_storage;

pub use memory_storage::MemStorage;
