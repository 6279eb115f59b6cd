use std::collections::HashSet;

use async_trait::async_trait;

use super::model::*;
use super::repo::*;

/// Read-only catalog held in memory. Backs the fixture deployment and
/// stands in for the database in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    artworks: Vec<Artwork>,
    trends: Vec<StyleTrend>,
}

impl MemoryRepository {
    pub fn new(artworks: Vec<Artwork>, trends: Vec<StyleTrend>) -> Self {
        Self { artworks, trends }
    }
}

#[async_trait]
impl ArtworkRepo for MemoryRepository {
    async fn list_artworks(&self) -> DbResult<Vec<Artwork>> {
        Ok(self.artworks.clone())
    }

    async fn get_artwork(&self, id: &str) -> DbResult<Artwork> {
        self.artworks
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| DbError::NotFound(format!("Artwork not found: {}", id)))
    }

    async fn list_distinct_style_tags(&self) -> DbResult<Vec<String>> {
        let mut seen = HashSet::new();
        let tags = self
            .artworks
            .iter()
            .flat_map(|a| a.style_tags.iter())
            .filter(|t| seen.insert(*t))
            .cloned()
            .collect();
        Ok(tags)
    }
}

#[async_trait]
impl TrendRepo for MemoryRepository {
    async fn list_trends(&self) -> DbResult<Vec<StyleTrend>> {
        Ok(self.trends.clone())
    }
}

impl Repository for MemoryRepository {
    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
