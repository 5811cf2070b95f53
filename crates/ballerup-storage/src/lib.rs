//! Storage layer for the Baller Up pickup-game queue.
//!
//! Provides the [`QueueStore`] and [`ScoreStore`] traits defining the storage
//! contract, plus [`InMemoryStore`] and [`SqliteStore`] as first-class
//! backends.
//!
//! # Invariants
//!
//! The queue is an ordered list of participant names with a dense 1-based
//! `position` column:
//! - positions are always exactly `{1..N}` for N entries (no gaps, no
//!   duplicates) after every mutation;
//! - names are unique case-insensitively (ASCII folding, matching SQLite's
//!   `NOCASE` collation);
//! - iteration order is ascending position.
//!
//! Every multi-step mutation (lookup + insert, or delete + compaction) runs
//! as a single atomic unit, so a mid-sequence fault can never leave the
//! positions gapped or duplicated.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`types`]: QueueEntry, Scoreboard, AdvanceOutcome
//! - [`name`]: participant name normalization
//! - [`traits`]: QueueStore and ScoreStore trait definitions
//! - [`memory`]: InMemoryStore implementation
//! - [`schema`]: SQL schema constants and migration setup
//! - [`sqlite`]: SqliteStore implementation

pub mod error;
pub mod memory;
pub mod name;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use name::normalize_name;
pub use sqlite::SqliteStore;
pub use traits::{QueueStore, ScoreStore};
pub use types::{AdvanceOutcome, QueueEntry, Scoreboard};
