use axum::Json;

use crate::state::HealthStatus;

pub async fn get_health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
