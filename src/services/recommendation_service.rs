use std::sync::Arc;

use tracing::debug;

use crate::errors::GatewayError;
use crate::models::{Catalog, Exercise, Subcategories};
use crate::services::difficulty_mapper::map_difficulty;

/// Category value selecting every category in the catalog
pub const ALL_CATEGORIES: &str = "semua";

/// Difficulty value disabling the difficulty filter
pub const ALL_DIFFICULTIES: &str = "all";

/// Selects exercises from the in-memory catalog
#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<Catalog>,
}

impl RecommendationService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Flatten the requested category (or every category) and optionally
    /// keep only exercises at the requested difficulty.
    pub fn select_recommendations(
        &self,
        category: Option<&str>,
        difficulty_alias: Option<&str>,
    ) -> Result<Vec<Exercise>, GatewayError> {
        let category = category
            .filter(|c| !c.is_empty())
            .ok_or(GatewayError::MissingField("workoutType"))?;

        let exercises: Vec<&Exercise> = if category == ALL_CATEGORIES {
            self.catalog
                .categories()
                .flat_map(|(_, subs)| flatten(subs))
                .collect()
        } else {
            let subs = self
                .catalog
                .category(category)
                .ok_or_else(|| GatewayError::InvalidCategory(category.to_string()))?;
            flatten(subs).collect()
        };

        let selected: Vec<Exercise> = match difficulty_alias.filter(|d| !d.is_empty() && *d != ALL_DIFFICULTIES) {
            Some(alias) => {
                let label = map_difficulty(alias);
                exercises
                    .into_iter()
                    .filter(|exercise| exercise.difficulty.as_str() == label)
                    .cloned()
                    .collect()
            }
            None => exercises.into_iter().cloned().collect(),
        };

        debug!(
            "Selected {} exercises for category={} difficulty={:?}",
            selected.len(),
            category,
            difficulty_alias
        );

        Ok(selected)
    }
}

fn flatten(subs: &Subcategories) -> impl Iterator<Item = &Exercise> {
    subs.values().flat_map(|exercises| exercises.iter())
}
