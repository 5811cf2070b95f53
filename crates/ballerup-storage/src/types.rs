//! Storage-layer types for queue entries and the scoreboard.

use serde::{Deserialize, Serialize};

/// A single row of the waiting queue.
///
/// `position` is the 1-based dense rank defining serving order; `created_at`
/// (unix milliseconds) is informational only and never used for ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Case-preserved display name, unique case-insensitively.
    pub name: String,
    /// 1-based dense rank.
    pub position: i64,
    /// Insertion timestamp in unix milliseconds.
    pub created_at: i64,
}

/// The pair of independent tally counters.
///
/// The store accepts any integer, including negative values; clamping to
/// zero is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub good: i64,
    pub bad: i64,
}

/// Result of advancing the queue: the served participant (if any) and the
/// remaining queue in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvanceOutcome {
    /// The name that was at position 1, or `None` when the queue was empty.
    pub next: Option<String>,
    /// The remaining names, ascending by position.
    pub queue: Vec<String>,
}
