use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{SecondsFormat, Utc};
use tracing::debug;

use super::error::ApiError;
use super::types::*;
use crate::catalog::{search_artworks, ArtworkFilter, Pagination, DEFAULT_LIMIT};
use crate::db::DbError;
use crate::server::AppState;
use crate::util::QueryParams;

pub const API_VERSION: &str = "1.0.0";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Art.Decor.AI API is running".to_string(),
        version: API_VERSION.to_string(),
        features: strings(&[
            "Multimodal input (photo, text, voice)",
            "AI-powered décor recommendations",
            "Style analysis and matching",
            "Local store integration",
        ]),
    })
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

/// Negative, non-finite or unparsable prices are treated as not given.
fn price_param(params: &QueryParams, key: &str) -> Option<f64> {
    params
        .parse::<f64>(key)
        .filter(|p| p.is_finite() && *p >= 0.0)
}

pub fn artwork_filter(params: &QueryParams) -> ArtworkFilter {
    ArtworkFilter {
        style: params.get("style").map(str::to_string),
        price_min: price_param(params, "price_min"),
        price_max: price_param(params, "price_max"),
    }
}

/// A count that is all digits but too large for `usize` saturates.
fn count_param(params: &QueryParams, key: &str) -> Option<usize> {
    let value = params.get(key)?.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let count = value.parse::<u128>().unwrap_or(u128::MAX);
    Some(usize::try_from(count).unwrap_or(usize::MAX))
}

pub fn pagination(params: &QueryParams) -> Pagination {
    Pagination {
        skip: count_param(params, "skip").unwrap_or(0),
        limit: count_param(params, "limit").unwrap_or(DEFAULT_LIMIT),
    }
}

pub async fn list_artworks(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<ArtworkList>, ApiError> {
    let filter = artwork_filter(&params);
    let page = pagination(&params);

    let result = search_artworks(state.repo.as_ref(), &filter, page).await?;
    debug!(
        ?filter,
        skip = page.skip,
        limit = page.limit,
        total = result.total,
        "Artwork query"
    );

    Ok(Json(result.into()))
}

pub async fn get_artwork(
    State(state): State<AppState>,
    Path(artwork_id): Path<String>,
) -> Result<Json<ArtworkDetail>, ApiError> {
    let artwork = state
        .repo
        .get_artwork(&artwork_id)
        .await
        .map_err(|e| match e {
            DbError::NotFound(_) => ApiError::NotFound("Artwork not found".to_string()),
            e => ApiError::Storage(e),
        })?;

    Ok(Json(artwork.into()))
}

pub async fn list_styles(State(state): State<AppState>) -> Result<Json<StyleList>, ApiError> {
    let styles = state.styles.list_styles(state.repo.as_ref()).await?;
    Ok(Json(StyleList { styles }))
}

pub async fn list_trends(State(state): State<AppState>) -> Result<Json<TrendList>, ApiError> {
    let trends = state.repo.list_trends().await?;
    Ok(Json(TrendList {
        trends: trends.into_iter().map(Into::into).collect(),
    }))
}

pub async fn analyze_room() -> Json<Placeholder> {
    Json(Placeholder {
        message: "Room analysis endpoint - to be implemented in Week 2".to_string(),
        features: strings(&[
            "Wall detection using YOLOv8",
            "Color palette extraction",
            "Lighting analysis",
            "Style classification",
        ]),
    })
}

pub async fn recommendations() -> Json<Placeholder> {
    Json(Placeholder {
        message: "Recommendation endpoint - to be implemented in Week 3-4".to_string(),
        features: strings(&[
            "Vision-Match Agent integration",
            "FAISS vector search",
            "Multimodal reasoning",
            "Personalized suggestions",
        ]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_defaults() {
        let p = params(&[]);
        assert_eq!(artwork_filter(&p), ArtworkFilter::default());
        assert_eq!(pagination(&p), Pagination { skip: 0, limit: 20 });
    }

    #[test]
    fn test_all_params() {
        let p = params(&[
            ("style", "vintage"),
            ("price_min", "10.5"),
            ("price_max", "99"),
            ("skip", "4"),
            ("limit", "2"),
        ]);
        assert_eq!(
            artwork_filter(&p),
            ArtworkFilter {
                style: Some("vintage".to_string()),
                price_min: Some(10.5),
                price_max: Some(99.0),
            }
        );
        assert_eq!(pagination(&p), Pagination { skip: 4, limit: 2 });
    }

    #[test]
    fn test_malformed_values_are_dropped() {
        let p = params(&[
            ("style", ""),
            ("price_min", "-1"),
            ("price_max", "NaN"),
            ("skip", "x"),
            ("limit", "-5"),
        ]);
        assert_eq!(artwork_filter(&p), ArtworkFilter::default());
        assert_eq!(pagination(&p), Pagination::default());
    }

    #[test]
    fn test_oversized_counts_saturate() {
        let p = params(&[
            ("skip", "99999999999999999999999"),
            ("limit", "340282366920938463463374607431768211456000"),
        ]);
        assert_eq!(
            pagination(&p),
            Pagination {
                skip: usize::MAX,
                limit: usize::MAX,
            }
        );

        let p = params(&[("skip", "+3"), ("limit", "1e3")]);
        assert_eq!(pagination(&p), Pagination::default());
    }

    #[test]
    fn test_style_is_kept_verbatim() {
        let p = params(&[("style", " vintage")]);
        assert_eq!(artwork_filter(&p).style.as_deref(), Some(" vintage"));
    }
}
