use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;

use crate::state::AppState;

/// Every call advances the simulation, so responses must not be cached
pub async fn get_population(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.snapshot();
    ([(header::CACHE_CONTROL, "no-store")], Json(snapshot))
}
