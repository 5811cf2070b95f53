//! Storage error types for ballerup-storage.
//!
//! [`StorageError`] covers all anticipated failure modes in the storage
//! layer: invalid input, queue membership conflicts, and underlying SQLite
//! or migration faults.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A participant name was empty after normalization.
    #[error("name is empty after normalization")]
    EmptyName,

    /// A join collided with an existing entry (case-insensitive).
    #[error("already in queue: {name}")]
    AlreadyQueued { name: String },

    /// A leave targeted a name not present in the queue.
    #[error("not in queue: {name}")]
    NotInQueue { name: String },

    /// Schema migration failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// Underlying SQLite failure.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
