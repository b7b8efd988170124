//! SQLite storage backend implementation.
//!
//! Implements the repository traits using `rusqlite` for synchronous
//! operations and `tokio-rusqlite` for async wrapping. Foreign keys are
//! enforced by SQLite itself, with cascading deletes from users and saunas.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
