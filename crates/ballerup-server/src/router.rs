//! Router assembly for the Baller Up HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with CORS
//! and tracing middleware layers. The CORS layer is built separately via
//! [`cors_layer`] from the externally supplied allowed origin.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api/queue", get(handlers::queue::list_queue))
        .route("/api/join", post(handlers::queue::join_queue))
        .route("/api/leave", post(handlers::queue::leave_queue))
        .route("/api/next", post(handlers::queue::advance_queue))
        .route(
            "/api/scores",
            get(handlers::scores::get_scores).post(handlers::scores::set_scores),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Builds a CORS layer allowing exactly `origin` with the methods the UI
/// uses.
///
/// Falls back to a permissive layer (with a warning) if the configured
/// origin is not a valid header value.
pub fn cors_layer(origin: &str) -> CorsLayer {
    match origin.parse::<HeaderValue>() {
        Ok(value) => CorsLayer::new()
            .allow_origin(AllowOrigin::exact(value))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE]),
        Err(_) => {
            tracing::warn!(origin, "invalid CORS origin, falling back to permissive");
            CorsLayer::permissive()
        }
    }
}
