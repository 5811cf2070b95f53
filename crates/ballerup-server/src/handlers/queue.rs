//! Queue handlers (list, join, leave, advance).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use ballerup_storage::QueueStore;

use crate::error::ApiError;
use crate::schema::queue::{AdvanceResponse, JoinRequest, LeaveRequest, QueueResponse};
use crate::state::AppState;

/// Lists the current queue in serving order.
///
/// `GET /api/queue`
pub async fn list_queue(
    State(state): State<AppState>,
) -> Result<Json<QueueResponse>, ApiError> {
    let store = state.store.lock().await;
    let queue = store.list()?;
    Ok(Json(QueueResponse { queue }))
}

/// Appends a participant to the back of the queue.
///
/// `POST /api/join` -- 201 on success, 400 on an empty name, 409 on a
/// case-insensitive duplicate.
pub async fn join_queue(
    State(state): State<AppState>,
    Json(req): Json<JoinRequest>,
) -> Result<(StatusCode, Json<QueueResponse>), ApiError> {
    let mut store = state.store.lock().await;
    let queue = store.join(&req.name)?;
    Ok((StatusCode::CREATED, Json(QueueResponse { queue })))
}

/// Removes a participant by name.
///
/// `POST /api/leave` -- 400 on an empty name, 404 if not queued.
pub async fn leave_queue(
    State(state): State<AppState>,
    Json(req): Json<LeaveRequest>,
) -> Result<Json<QueueResponse>, ApiError> {
    let mut store = state.store.lock().await;
    let queue = store.leave(&req.name)?;
    Ok(Json(QueueResponse { queue }))
}

/// Serves the front of the queue.
///
/// `POST /api/next` -- an empty queue yields `{next: null, queue: []}` with
/// status 200, not an error.
pub async fn advance_queue(
    State(state): State<AppState>,
) -> Result<Json<AdvanceResponse>, ApiError> {
    let mut store = state.store.lock().await;
    let outcome = store.advance()?;
    Ok(Json(AdvanceResponse {
        next: outcome.next,
        queue: outcome.queue,
    }))
}
