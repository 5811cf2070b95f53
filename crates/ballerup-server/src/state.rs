//! Application state with the shared store for concurrent access.
//!
//! [`AppState`] wraps [`SqliteStore`] in `Arc<tokio::sync::Mutex<>>` for use
//! with axum handlers. Uses `tokio::sync::Mutex` (async-aware) instead of
//! `std::sync::Mutex` (blocking) so handlers await the lock without blocking
//! the tokio runtime.
//!
//! The mutex is also what makes queue mutations linearizable: the original
//! deployment relied on a single-threaded event loop to serialize join/
//! leave/advance, and on a multi-threaded runtime that serialization must be
//! explicit or the dense-position invariant breaks. A `tokio::sync::RwLock`
//! would allow concurrent reads, but `rusqlite::Connection` is `!Sync`,
//! preventing the store from being held behind one.

use std::sync::Arc;

use ballerup_storage::SqliteStore;

use crate::error::ApiError;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared store (async Mutex -- non-blocking await, serializes
    /// mutations).
    pub store: Arc<tokio::sync::Mutex<SqliteStore>>,
}

impl AppState {
    /// Creates a new `AppState` backed by the SQLite database at `db_path`,
    /// creating the schema idempotently if absent.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let store = SqliteStore::new(db_path)?;
        Ok(AppState {
            store: Arc::new(tokio::sync::Mutex::new(store)),
        })
    }

    /// Creates a new `AppState` with an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, ApiError> {
        let store = SqliteStore::in_memory()?;
        Ok(AppState {
            store: Arc::new(tokio::sync::Mutex::new(store)),
        })
    }
}
