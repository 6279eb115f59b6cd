use crate::db::{ArtworkRepo, DbResult};

/// Where the `/styles` listing comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleSource {
    /// Distinct style tags across all stored artwork.
    Derived,
    /// A fixed list, served as-is.
    Static(Vec<String>),
}

impl StyleSource {
    pub async fn list_styles<R: ArtworkRepo + ?Sized>(&self, repo: &R) -> DbResult<Vec<String>> {
        match self {
            StyleSource::Derived => repo.list_distinct_style_tags().await,
            StyleSource::Static(styles) => Ok(styles.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use crate::db::MemoryRepository;

    #[tokio::test]
    async fn test_static_list_ignores_data() {
        let repo = MemoryRepository::default();
        let source = StyleSource::Static(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(source.list_styles(&repo).await.unwrap(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_derived_from_data() {
        let mut artworks = fixtures::artworks();
        artworks.truncate(1);
        artworks.push(artworks[0].clone());
        let repo = MemoryRepository::new(artworks, vec![]);

        let mut styles = StyleSource::Derived.list_styles(&repo).await.unwrap();
        styles.sort();
        assert_eq!(styles, vec!["abstract", "minimalist", "modern"]);
    }
}
