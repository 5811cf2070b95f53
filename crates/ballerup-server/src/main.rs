//! Binary entrypoint for the Baller Up HTTP server.
//!
//! Reads configuration from environment variables:
//! - `BALLERUP_DB_PATH`: SQLite database file path (default: "ballerup.db")
//! - `BALLERUP_PORT`: Server listen port (default: "4000")
//! - `BALLERUP_CORS_ORIGIN`: Allowed browser origin
//!   (default: "http://localhost:5173")

use ballerup_server::router::{build_router, cors_layer};
use ballerup_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let db_path = std::env::var("BALLERUP_DB_PATH")
        .unwrap_or_else(|_| "ballerup.db".to_string());
    let port = std::env::var("BALLERUP_PORT")
        .unwrap_or_else(|_| "4000".to_string());
    let cors_origin = std::env::var("BALLERUP_CORS_ORIGIN")
        .unwrap_or_else(|_| "http://localhost:5173".to_string());

    let state = AppState::new(&db_path)
        .expect("Failed to initialize application state");

    let app = build_router(state, cors_layer(&cors_origin));

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("Baller Up backend listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
