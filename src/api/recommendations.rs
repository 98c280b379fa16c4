use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};
use axum_extra::extract::WithRejection;

use super::routes::AppState;
use crate::errors::GatewayError;
use crate::models::{CatalogRecommendationRequest, CatalogRecommendationResponse, ProfileRequest};

/// Recommend exercises from the built-in catalog by workout type and difficulty.
///
/// Serves both `/api/recommend` and the legacy `/recommend` path.
pub async fn recommend_from_catalog(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<CatalogRecommendationRequest>, GatewayError>,
) -> Result<Json<CatalogRecommendationResponse>, GatewayError> {
    let recommendations = state.recommendations.select_recommendations(
        request.workout_type.as_deref(),
        request.difficulty_level.as_deref(),
    )?;

    Ok(Json(CatalogRecommendationResponse {
        success: true,
        recommendations,
    }))
}

/// Forward a body profile to the recommendation service and relay its answer
pub async fn recommend_from_profile(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<ProfileRequest>, GatewayError>,
) -> Result<Response, GatewayError> {
    let relayed = state.recommender.forward_profile(&request).await?;

    Ok((relayed.status, Json(relayed.body)).into_response())
}
