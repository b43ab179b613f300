//! Message persistence
//!
//! One relational table of messages, scoped by owner. The `MessageStore`
//! trait abstracts the engine: `PgStore` is the production PostgreSQL
//! backend, `MemoryStore` backs the test suites.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

// Re-exports for convenience
pub use memory::MemoryStore;
pub use postgres::{PgStore, connect_options, ensure_database_exists};

/// Errors surfaced by a message store backend
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing database rejected or failed the operation
    #[error("Storage unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

/// A stored message, as returned by owner-scoped listing
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct StoredMessage {
    /// Storage-assigned id, monotonic, never reused
    pub id: i64,
    /// Message content exactly as received
    pub text: String,
    /// Timestamp assigned at insert time
    pub created_at: DateTime<Utc>,
}

/// Storage backend for user messages
///
/// Every operation takes the owner identity as its first argument; no
/// operation can observe or mutate another owner's records. Records are
/// never updated after insert, only inserted and deleted.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Append a new record, returning the storage-assigned id.
    async fn save_message(&self, owner_id: i64, text: &str) -> Result<i64, StorageError>;

    /// All records owned by `owner_id`, newest first; ties on `created_at`
    /// break toward the higher id. Empty when the owner has none.
    async fn messages_for_owner(&self, owner_id: i64) -> Result<Vec<StoredMessage>, StorageError>;

    /// Delete every record owned by `owner_id`, returning the number removed.
    /// Reports zero, not an error, when none existed.
    async fn delete_all_messages(&self, owner_id: i64) -> Result<u64, StorageError>;

    /// Delete one record if it exists and belongs to `owner_id`.
    ///
    /// Returns whether a row was actually removed. An id owned by someone
    /// else reports `false`, exactly like a missing id.
    async fn delete_message(&self, owner_id: i64, message_id: i64) -> Result<bool, StorageError>;
}
