use crate::db::{Artwork, ArtworkRepo, DbResult};

pub const DEFAULT_LIMIT: usize = 20;

/// Optional narrowing applied to an artwork listing. Absent fields do not
/// filter anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtworkFilter {
    /// Exact, case-sensitive style tag.
    pub style: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: usize,
    pub limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArtworkPage {
    pub artworks: Vec<Artwork>,
    /// Matches before the pagination window was applied.
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
}

/// Filter `artworks` by style, then minimum price, then maximum price, count
/// what is left and cut out the requested window. Input order is kept.
pub fn query_artworks(
    mut artworks: Vec<Artwork>,
    filter: &ArtworkFilter,
    page: Pagination,
) -> ArtworkPage {
    if let Some(ref style) = filter.style {
        artworks.retain(|a| a.has_style(style));
    }

    // An unpriced artwork never satisfies a price bound.
    if let Some(min) = filter.price_min {
        artworks.retain(|a| a.price.is_some_and(|p| p >= min));
    }

    if let Some(max) = filter.price_max {
        artworks.retain(|a| a.price.is_some_and(|p| p <= max));
    }

    let total = artworks.len();

    let artworks = artworks
        .into_iter()
        .skip(page.skip)
        .take(page.limit)
        .collect();

    ArtworkPage {
        artworks,
        total,
        skip: page.skip,
        limit: page.limit,
    }
}

pub async fn search_artworks<R: ArtworkRepo + ?Sized>(
    repo: &R,
    filter: &ArtworkFilter,
    page: Pagination,
) -> DbResult<ArtworkPage> {
    let all = repo.list_artworks().await?;
    Ok(query_artworks(all, filter, page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    fn ids(page: &ArtworkPage) -> Vec<&str> {
        page.artworks.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_price_window() {
        let filter = ArtworkFilter {
            price_min: Some(160.0),
            price_max: Some(190.0),
            ..Default::default()
        };
        let page = query_artworks(fixtures::artworks(), &filter, Pagination::default());
        assert_eq!(ids(&page), vec!["3"]);
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_limit_does_not_change_total() {
        let page = query_artworks(
            fixtures::artworks(),
            &ArtworkFilter::default(),
            Pagination { skip: 0, limit: 2 },
        );
        assert_eq!(ids(&page), vec!["1", "2"]);
        assert_eq!(page.total, 3);
        assert_eq!(page.limit, 2);
    }

    #[test]
    fn test_skip_window() {
        let page = query_artworks(
            fixtures::artworks(),
            &ArtworkFilter::default(),
            Pagination { skip: 1, limit: 20 },
        );
        assert_eq!(ids(&page), vec!["2", "3"]);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_skip_past_end_is_empty() {
        for skip in [3, 4, 1000] {
            let page = query_artworks(
                fixtures::artworks(),
                &ArtworkFilter::default(),
                Pagination { skip, limit: 20 },
            );
            assert!(page.artworks.is_empty());
            assert_eq!(page.total, 3);
            assert_eq!(page.skip, skip);
        }
    }

    #[test]
    fn test_zero_limit_is_empty() {
        let page = query_artworks(
            fixtures::artworks(),
            &ArtworkFilter::default(),
            Pagination { skip: 0, limit: 0 },
        );
        assert!(page.artworks.is_empty());
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_style_is_exact_match() {
        let filter = ArtworkFilter {
            style: Some("nature".to_string()),
            ..Default::default()
        };
        let page = query_artworks(fixtures::artworks(), &filter, Pagination::default());
        assert_eq!(ids(&page), vec!["2"]);

        let filter = ArtworkFilter {
            style: Some("Nature".to_string()),
            ..Default::default()
        };
        let page = query_artworks(fixtures::artworks(), &filter, Pagination::default());
        assert_eq!(page.total, 0);

        let filter = ArtworkFilter {
            style: Some("natur".to_string()),
            ..Default::default()
        };
        let page = query_artworks(fixtures::artworks(), &filter, Pagination::default());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_unknown_style_yields_nothing() {
        let filter = ArtworkFilter {
            style: Some("baroque".to_string()),
            ..Default::default()
        };
        let page = query_artworks(fixtures::artworks(), &filter, Pagination::default());
        assert_eq!(page.total, 0);
        assert!(page.artworks.is_empty());
    }

    #[test]
    fn test_unpriced_artwork_excluded_by_price_bounds() {
        let mut artworks = fixtures::artworks();
        artworks[0].price = None;

        let page = query_artworks(artworks.clone(), &ArtworkFilter::default(), Pagination::default());
        assert_eq!(page.total, 3);

        let filter = ArtworkFilter {
            price_min: Some(0.0),
            ..Default::default()
        };
        let page = query_artworks(artworks.clone(), &filter, Pagination::default());
        assert_eq!(ids(&page), vec!["2", "3"]);

        let filter = ArtworkFilter {
            price_max: Some(1000.0),
            ..Default::default()
        };
        let page = query_artworks(artworks, &filter, Pagination::default());
        assert_eq!(ids(&page), vec!["2", "3"]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let filter = ArtworkFilter {
            price_min: Some(150.0),
            price_max: Some(180.0),
            ..Default::default()
        };
        let page = query_artworks(fixtures::artworks(), &filter, Pagination::default());
        assert_eq!(ids(&page), vec!["1", "3"]);
    }

    #[test]
    fn test_total_independent_of_window() {
        let filters = [
            ArtworkFilter::default(),
            ArtworkFilter {
                style: Some("vintage".to_string()),
                ..Default::default()
            },
            ArtworkFilter {
                price_min: Some(170.0),
                ..Default::default()
            },
            ArtworkFilter {
                price_max: Some(199.0),
                ..Default::default()
            },
        ];
        for filter in &filters {
            let full = query_artworks(
                fixtures::artworks(),
                filter,
                Pagination {
                    skip: 0,
                    limit: usize::MAX,
                },
            );
            for skip in 0..5 {
                for limit in 0..5 {
                    let page = query_artworks(
                        fixtures::artworks(),
                        filter,
                        Pagination { skip, limit },
                    );
                    assert_eq!(page.total, full.artworks.len());
                    assert!(page.artworks.len() <= limit);
                    if skip >= page.total {
                        assert!(page.artworks.is_empty());
                    }
                }
            }
        }
    }

    #[tokio::test]
    async fn test_search_uses_repository_order() {
        let repo = crate::db::MemoryRepository::new(fixtures::artworks(), vec![]);
        let page = search_artworks(&repo, &ArtworkFilter::default(), Pagination::default())
            .await
            .unwrap();
        assert_eq!(ids(&page), vec!["1", "2", "3"]);
    }
}
