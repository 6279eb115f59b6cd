use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dominant colours of an artwork, as extracted at seeding time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: String,
    pub title: String,
    pub brand: Option<String>,
    pub price: Option<f64>,
    pub style_tags: Vec<String>,
    pub dominant_palette: Palette,
    pub image_url: String,
    pub dimensions: Option<Dimensions>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Artwork {
    pub fn has_style(&self, style: &str) -> bool {
        self.style_tags.iter().any(|t| t == style)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleTrend {
    pub id: String,
    pub style: String,
    pub trend_score: f64,
    pub seasonal_factor: f64,
    pub region: Option<String>,
    pub analysis_data: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Corrupt column {column} in row {id}: {reason}")]
    Decode {
        id: String,
        column: &'static str,
        reason: String,
    },
}

pub type DbResult<T> = Result<T, DbError>;
