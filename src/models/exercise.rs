use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Catalog data compiled into the binary
const EMBEDDED_CATALOG: &str = include_str!("../../data/workouts.json");

/// Difficulty labels used by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Pemula,
    Menengah,
    Lanjutan,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Pemula, Difficulty::Menengah, Difficulty::Lanjutan];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Pemula => "Pemula",
            Difficulty::Menengah => "Menengah",
            Difficulty::Lanjutan => "Lanjutan",
        }
    }
}

/// A single exercise record from the catalog.
///
/// Only `name` and `difficulty` are interpreted; everything else is carried
/// through to API responses untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub difficulty: Difficulty,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// Exercises grouped by subcategory, in catalog order
pub type Subcategories = IndexMap<String, Vec<Exercise>>;

/// Read-only workout catalog: category -> subcategory -> exercises
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: IndexMap<String, Subcategories>,
}

impl Catalog {
    /// Load the catalog bundled with the binary
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG).context("Failed to load embedded workout catalog")
    }

    /// Parse a catalog from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json).context("Invalid workout catalog JSON")?;
        Ok(catalog)
    }

    pub fn category(&self, name: &str) -> Option<&Subcategories> {
        self.categories.get(name)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &Subcategories)> {
        self.categories.iter().map(|(name, subs)| (name.as_str(), subs))
    }

    /// Total number of exercise records across every category
    pub fn len(&self) -> usize {
        self.categories
            .values()
            .flat_map(|subs| subs.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
