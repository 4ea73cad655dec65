//! Population dashboard backend
//!
//! HTTP transport over the population simulation, plus the terminal
//! client and offline replay commands.

pub mod commands;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(routes::health::get_health))
        .route("/api/population", get(routes::population::get_population))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
