use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::health::health_check;
use super::middleware::{cors_layer, security_headers_layer};
use super::recommendations::{recommend_from_catalog, recommend_from_profile};
use crate::config::AppConfig;
use crate::models::Catalog;
use crate::services::{RecommendationService, RecommenderClient};

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub recommendations: RecommendationService,
    pub recommender: RecommenderClient,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, config: &AppConfig) -> Result<Self> {
        Ok(Self {
            recommendations: RecommendationService::new(catalog),
            recommender: RecommenderClient::new(config.recommender_url.clone())?,
        })
    }
}

pub fn create_routes(state: AppState, config: &AppConfig) -> Router {
    // Unknown paths get the front-end entry document so client-side routing works.
    let frontend = ServeDir::new(&config.frontend_dir).fallback(ServeFile::new(config.index_file()));

    // Other methods on API paths fall through to the front-end as well.
    Router::new()
        .route(
            "/api/recommend",
            post(recommend_from_catalog).fallback_service(frontend.clone()),
        )
        // Legacy route for older clients
        .route(
            "/recommend",
            post(recommend_from_catalog).fallback_service(frontend.clone()),
        )
        .route(
            "/api/recommendations",
            post(recommend_from_profile).fallback_service(frontend.clone()),
        )
        .route("/api/health", get(health_check).fallback_service(frontend.clone()))
        .fallback_service(frontend)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer())
                .layer(security_headers_layer()),
        )
}
