//! In-memory storage backend.
//!
//! Every table lives behind one `tokio::sync::RwLock`, so each repository
//! call is atomic with respect to the others. Unique keys, foreign keys and
//! cascading deletes are enforced the way the SQLite schema enforces them.
//!
//! # Example
//!
//! ```rust,ignore
//! use saunalog::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
