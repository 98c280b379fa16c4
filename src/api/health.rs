use axum::{extract::State, response::Json};

use super::routes::AppState;
use crate::models::HealthReport;

/// Report gateway liveness together with the recommendation service's state.
/// Always answers 200; an unreachable upstream is reported in the body.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthReport> {
    Json(state.recommender.check_health().await)
}
