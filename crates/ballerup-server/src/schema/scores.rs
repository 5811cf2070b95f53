//! Schema types for the scoreboard routes.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/scores`. Either counter may be omitted, leaving the
/// stored value unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct SetScoresRequest {
    pub good: Option<i64>,
    pub bad: Option<i64>,
}

/// The scoreboard counters, returned by both GET and POST.
#[derive(Debug, Serialize)]
pub struct ScoresResponse {
    pub good: i64,
    pub bad: i64,
}
