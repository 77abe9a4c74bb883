//! Review catalog.
//!
//! Reviews come from an external data-fetching collaborator behind
//! [`ReviewSource`]. The bundled [`StaticReviews`] serves a JSON file loaded
//! once at startup, keyed by restaurant name.

use std::collections::BTreeMap;
use std::path::Path;

use client::types::Review;

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("failed to read review catalog {path}: {source}")]
    Read { path: String, source: std::io::Error },
    #[error("failed to parse review catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait::async_trait]
pub trait ReviewSource: Send + Sync {
    /// Reviews for one restaurant, in catalog order. Unknown names yield none.
    async fn reviews_for(&self, restaurant: &str) -> Result<Vec<Review>, ReviewError>;

    /// Restaurant names containing `query`, case-insensitively, sorted.
    async fn search(&self, query: &str) -> Result<Vec<String>, ReviewError>;
}

/// In-memory catalog: `{ "<restaurant>": [Review, ...] }`.
#[derive(Debug, Default, Clone)]
pub struct StaticReviews {
    by_restaurant: BTreeMap<String, Vec<Review>>,
}

impl StaticReviews {
    #[must_use]
    pub fn new(by_restaurant: BTreeMap<String, Vec<Review>>) -> Self {
        Self { by_restaurant }
    }

    /// Parse a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ReviewError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Load a catalog file.
    pub fn load(path: &Path) -> Result<Self, ReviewError> {
        let json = std::fs::read_to_string(path)
            .map_err(|source| ReviewError::Read { path: path.display().to_string(), source })?;
        Self::from_json(&json)
    }

    #[must_use]
    pub fn restaurant_count(&self) -> usize {
        self.by_restaurant.len()
    }

    fn lookup(&self, restaurant: &str) -> Option<&Vec<Review>> {
        let wanted = restaurant.trim();
        self.by_restaurant.get(wanted).or_else(|| {
            self.by_restaurant
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
                .map(|(_, reviews)| reviews)
        })
    }
}

#[async_trait::async_trait]
impl ReviewSource for StaticReviews {
    async fn reviews_for(&self, restaurant: &str) -> Result<Vec<Review>, ReviewError> {
        Ok(self.lookup(restaurant).cloned().unwrap_or_default())
    }

    async fn search(&self, query: &str) -> Result<Vec<String>, ReviewError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .by_restaurant
            .keys()
            .filter(|name| name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
#[path = "reviews_test.rs"]
mod tests;
