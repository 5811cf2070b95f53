//! Scoreboard handlers (get, partial set).

use axum::extract::State;
use axum::Json;

use ballerup_storage::ScoreStore;

use crate::error::ApiError;
use crate::schema::scores::{ScoresResponse, SetScoresRequest};
use crate::state::AppState;

/// Returns the current counters, initializing them on first access.
///
/// `GET /api/scores`
pub async fn get_scores(
    State(state): State<AppState>,
) -> Result<Json<ScoresResponse>, ApiError> {
    let store = state.store.lock().await;
    let board = store.scoreboard()?;
    Ok(Json(ScoresResponse {
        good: board.good,
        bad: board.bad,
    }))
}

/// Partially updates the counters; omitted fields keep their stored value.
///
/// `POST /api/scores`
pub async fn set_scores(
    State(state): State<AppState>,
    Json(req): Json<SetScoresRequest>,
) -> Result<Json<ScoresResponse>, ApiError> {
    let mut store = state.store.lock().await;
    let board = store.set_scoreboard(req.good, req.bad)?;
    Ok(Json(ScoresResponse {
        good: board.good,
        bad: board.bad,
    }))
}
