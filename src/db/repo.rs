use async_trait::async_trait;

use super::model::*;

#[async_trait]
pub trait ArtworkRepo: Send + Sync {
    /// All artwork, in the order the store yields it.
    async fn list_artworks(&self) -> DbResult<Vec<Artwork>>;
    async fn get_artwork(&self, id: &str) -> DbResult<Artwork>;
    /// Every style tag used by at least one artwork, without duplicates.
    async fn list_distinct_style_tags(&self) -> DbResult<Vec<String>>;
}

#[async_trait]
pub trait TrendRepo: Send + Sync {
    async fn list_trends(&self) -> DbResult<Vec<StyleTrend>>;
}

pub trait Repository: ArtworkRepo + TrendRepo + Send + Sync {
    fn backend_name(&self) -> &'static str;
}
