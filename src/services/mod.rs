// Business logic services

pub mod difficulty_mapper;
pub mod recommendation_service;
pub mod recommender_client;

pub use difficulty_mapper::map_difficulty;
pub use recommendation_service::RecommendationService;
pub use recommender_client::{RecommenderClient, RelayedResponse};
