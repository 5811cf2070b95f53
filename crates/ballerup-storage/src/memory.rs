//! In-memory implementation of [`QueueStore`] and [`ScoreStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and ephemeral runs
//! where persistence isn't needed. Semantics are identical to the SQLite
//! backend: dense 1-based positions, ASCII case-insensitive name uniqueness
//! (matching SQLite's `NOCASE` collation), and failed mutations leaving the
//! queue untouched.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::StorageError;
use crate::name::normalize_name;
use crate::traits::{QueueStore, ScoreStore};
use crate::types::{AdvanceOutcome, QueueEntry, Scoreboard};

/// Vec-backed implementation of the queue and scoreboard stores.
///
/// Entries are kept sorted by position at all times, so the Vec index is
/// always `position - 1`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    queue: Vec<QueueEntry>,
    scoreboard: Option<Scoreboard>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InMemoryStore::default()
    }

    fn names(&self) -> Vec<String> {
        self.queue.iter().map(|e| e.name.clone()).collect()
    }

    fn find(&self, name: &str) -> Option<usize> {
        self.queue
            .iter()
            .position(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Removes the entry at `index` and renumbers the survivors so
    /// positions stay exactly {1..N}.
    fn remove_and_compact(&mut self, index: usize) -> QueueEntry {
        let removed = self.queue.remove(index);
        for entry in &mut self.queue[index..] {
            entry.position -= 1;
        }
        removed
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as i64)
}

impl QueueStore for InMemoryStore {
    fn list(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.names())
    }

    fn entries(&self) -> Result<Vec<QueueEntry>, StorageError> {
        Ok(self.queue.clone())
    }

    fn join(&mut self, name: &str) -> Result<Vec<String>, StorageError> {
        let name = normalize_name(name)?;
        if self.find(&name).is_some() {
            return Err(StorageError::AlreadyQueued { name });
        }
        let position = self.queue.len() as i64 + 1;
        self.queue.push(QueueEntry {
            name,
            position,
            created_at: now_millis(),
        });
        Ok(self.names())
    }

    fn leave(&mut self, name: &str) -> Result<Vec<String>, StorageError> {
        let name = normalize_name(name)?;
        let index = match self.find(&name) {
            Some(i) => i,
            None => return Err(StorageError::NotInQueue { name }),
        };
        self.remove_and_compact(index);
        Ok(self.names())
    }

    fn advance(&mut self) -> Result<AdvanceOutcome, StorageError> {
        if self.queue.is_empty() {
            return Ok(AdvanceOutcome {
                next: None,
                queue: Vec::new(),
            });
        }
        let removed = self.remove_and_compact(0);
        Ok(AdvanceOutcome {
            next: Some(removed.name),
            queue: self.names(),
        })
    }
}

impl ScoreStore for InMemoryStore {
    fn scoreboard(&self) -> Result<Scoreboard, StorageError> {
        Ok(self.scoreboard.unwrap_or(Scoreboard { good: 0, bad: 0 }))
    }

    fn set_scoreboard(
        &mut self,
        good: Option<i64>,
        bad: Option<i64>,
    ) -> Result<Scoreboard, StorageError> {
        let current = self.scoreboard.unwrap_or(Scoreboard { good: 0, bad: 0 });
        let updated = Scoreboard {
            good: good.unwrap_or(current.good),
            bad: bad.unwrap_or(current.bad),
        };
        self.scoreboard = Some(updated);
        Ok(updated)
    }
}
