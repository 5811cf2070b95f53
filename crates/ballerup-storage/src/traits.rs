//! The [`QueueStore`] and [`ScoreStore`] traits defining the storage
//! contract.
//!
//! The queue and the scoreboard are independent stores that happen to share
//! one embedded database; each backend (InMemoryStore, SqliteStore)
//! implements both traits, so they are fully swappable without changing the
//! boundary layer.
//!
//! The traits are synchronous (not async): operations are short-lived and
//! the server serializes access behind an async-aware mutex.

use crate::error::StorageError;
use crate::types::{AdvanceOutcome, QueueEntry, Scoreboard};

/// The storage contract for the ordered waiting queue.
///
/// Implementations maintain the dense-position invariant: after every
/// mutation the set of positions is exactly `{1..N}`. Mutating operations
/// are atomic; a failed mutation leaves the queue unchanged.
pub trait QueueStore {
    /// Lists participant names ascending by position. Side-effect free.
    fn list(&self) -> Result<Vec<String>, StorageError>;

    /// Lists full queue rows ascending by position.
    fn entries(&self) -> Result<Vec<QueueEntry>, StorageError>;

    /// Appends a participant to the back of the queue.
    ///
    /// The name is normalized first (see [`crate::name::normalize_name`]).
    /// Fails with [`StorageError::EmptyName`] on an empty result and
    /// [`StorageError::AlreadyQueued`] on a case-insensitive collision.
    /// Returns the updated ordered name list.
    fn join(&mut self, name: &str) -> Result<Vec<String>, StorageError>;

    /// Removes a participant by name (case-insensitive) and compacts the
    /// remaining positions.
    ///
    /// Fails with [`StorageError::EmptyName`] or [`StorageError::NotInQueue`].
    /// Returns the updated ordered name list.
    fn leave(&mut self, name: &str) -> Result<Vec<String>, StorageError>;

    /// Removes and returns the participant at position 1, compacting the
    /// rest.
    ///
    /// An empty queue is not an error: the outcome carries `next: None` and
    /// an empty list.
    fn advance(&mut self) -> Result<AdvanceOutcome, StorageError>;
}

/// The storage contract for the two tally counters.
pub trait ScoreStore {
    /// Returns the persisted counters, initializing them to `{0, 0}` on
    /// first access.
    fn scoreboard(&self) -> Result<Scoreboard, StorageError>;

    /// Partially updates the counters; an omitted field keeps its stored
    /// value. The update is atomic against the persisted row.
    ///
    /// Values are not validated: negative integers are stored as given.
    fn set_scoreboard(
        &mut self,
        good: Option<i64>,
        bad: Option<i64>,
    ) -> Result<Scoreboard, StorageError>;
}
