//! Schema types for the queue routes.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/join`.
///
/// `name` defaults to empty when absent, so a missing field surfaces as the
/// same 400 as a blank one.
#[derive(Debug, Deserialize)]
pub struct JoinRequest {
    #[serde(default)]
    pub name: String,
}

/// Body of `POST /api/leave`.
#[derive(Debug, Deserialize)]
pub struct LeaveRequest {
    #[serde(default)]
    pub name: String,
}

/// The ordered queue, returned by list/join/leave.
#[derive(Debug, Serialize)]
pub struct QueueResponse {
    /// Participant names ascending by position.
    pub queue: Vec<String>,
}

/// Response of `POST /api/next`.
#[derive(Debug, Serialize)]
pub struct AdvanceResponse {
    /// The participant who was at the front, or `null` if the queue was
    /// empty.
    pub next: Option<String>,
    /// The remaining queue in order.
    pub queue: Vec<String>,
}
