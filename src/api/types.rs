use serde::{Deserialize, Serialize};

use crate::catalog::ArtworkPage;
use crate::db::{Artwork, Dimensions, Palette, StyleTrend};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkSummary {
    pub id: String,
    pub title: String,
    pub brand: Option<String>,
    pub price: Option<f64>,
    pub style_tags: Vec<String>,
    pub dominant_palette: Palette,
    pub image_url: String,
    pub dimensions: Option<Dimensions>,
    pub description: Option<String>,
}

impl From<Artwork> for ArtworkSummary {
    fn from(a: Artwork) -> Self {
        Self {
            id: a.id,
            title: a.title,
            brand: a.brand,
            price: a.price,
            style_tags: a.style_tags,
            dominant_palette: a.dominant_palette,
            image_url: a.image_url,
            dimensions: a.dimensions,
            description: a.description,
        }
    }
}

/// Single-artwork view: the listing fields plus the creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkDetail {
    #[serde(flatten)]
    pub summary: ArtworkSummary,
    pub created_at: String,
}

impl From<Artwork> for ArtworkDetail {
    fn from(a: Artwork) -> Self {
        let created_at = a.created_at.to_rfc3339();
        Self {
            summary: a.into(),
            created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkList {
    pub artworks: Vec<ArtworkSummary>,
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
}

impl From<ArtworkPage> for ArtworkList {
    fn from(page: ArtworkPage) -> Self {
        Self {
            artworks: page.artworks.into_iter().map(Into::into).collect(),
            total: page.total,
            skip: page.skip,
            limit: page.limit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleList {
    pub styles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendInfo {
    pub style: String,
    pub trend_score: f64,
    pub seasonal_factor: f64,
    pub region: Option<String>,
    pub analysis_data: serde_json::Value,
}

impl From<StyleTrend> for TrendInfo {
    fn from(t: StyleTrend) -> Self {
        Self {
            style: t.style,
            trend_score: t.trend_score,
            seasonal_factor: t.seasonal_factor,
            region: t.region,
            analysis_data: t.analysis_data,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendList {
    pub trends: Vec<TrendInfo>,
}

/// Body returned by endpoints whose feature is not built yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placeholder {
    pub message: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
