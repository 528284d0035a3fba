//! HTTP viewer.
//!
//! Serves the slider page at `/` and the JSON endpoints it polls. Every
//! request regenerates its snowflake from scratch; nothing is cached.

mod routes;
mod state;

pub use routes::{ApiError, ErrorBody, LevelQuery, SnowflakeResponse};
pub use state::AppState;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Builds the viewer router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/api/snowflake", get(routes::snowflake))
        .route("/api/figure", get(routes::figure))
        .route("/healthz", get(routes::healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the viewer on an already-bound listener until the process stops.
///
/// # Errors
///
/// Returns an I/O error if accepting connections fails.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, default_level = %state.default_level, "kochflake listening");
    }
    axum::serve(listener, router(state)).await
}
