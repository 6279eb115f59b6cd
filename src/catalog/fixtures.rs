//! The small built-in catalog served by the `memory` backend.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::db::{Artwork, Dimensions, Palette, StyleTrend};

const STATIC_STYLES: &[&str] = &[
    "minimalist",
    "abstract",
    "modern",
    "nature",
    "green",
    "organic",
    "vintage",
    "classic",
    "warm",
];

// 2024-01-01T00:00:00Z
fn fixture_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_704_067_200, 0).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn palette(colors: &[&str]) -> Palette {
    Palette {
        colors: strings(colors),
        primary: colors.first().map(|c| c.to_string()),
        secondary: colors.get(1).map(|c| c.to_string()),
        accent: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn artwork(
    id: &str,
    title: &str,
    brand: &str,
    price: f64,
    tags: &[&str],
    colors: &[&str],
    size: u32,
    description: &str,
) -> Artwork {
    Artwork {
        id: id.to_string(),
        title: title.to_string(),
        brand: Some(brand.to_string()),
        price: Some(price),
        style_tags: strings(tags),
        dominant_palette: palette(colors),
        image_url: format!("https://example.com/artwork{}.jpg", id),
        dimensions: Some(Dimensions {
            width: size,
            height: size,
            unit: "inches".to_string(),
        }),
        description: Some(description.to_string()),
        created_at: fixture_time(),
        updated_at: fixture_time(),
    }
}

pub fn artworks() -> Vec<Artwork> {
    vec![
        artwork(
            "1",
            "Minimalist Abstract #1",
            "Modern Art Co.",
            150.0,
            &["minimalist", "abstract", "modern"],
            &["#FFFFFF", "#E0E0E0", "#BDBDBD"],
            24,
            "A beautiful minimalist abstract piece perfect for modern spaces.",
        ),
        artwork(
            "2",
            "Nature Inspired #2",
            "Natural Elements",
            200.0,
            &["nature", "green", "organic"],
            &["#228B22", "#32CD32", "#90EE90"],
            30,
            "Inspired by nature with calming green tones.",
        ),
        artwork(
            "3",
            "Vintage Classic #3",
            "Retro Revival",
            180.0,
            &["vintage", "classic", "warm"],
            &["#8B4513", "#D2691E", "#CD853F"],
            36,
            "A classic vintage piece with warm, nostalgic tones.",
        ),
    ]
}

pub fn static_styles() -> Vec<String> {
    strings(STATIC_STYLES)
}

pub fn trends() -> Vec<StyleTrend> {
    vec![
        StyleTrend {
            id: "trend-minimalist".to_string(),
            style: "minimalist".to_string(),
            trend_score: 0.85,
            seasonal_factor: 1.2,
            region: Some("global".to_string()),
            analysis_data: json!({"popularity": "high", "season": "spring"}),
            created_at: fixture_time(),
        },
        StyleTrend {
            id: "trend-nature".to_string(),
            style: "nature".to_string(),
            trend_score: 0.78,
            seasonal_factor: 1.5,
            region: Some("global".to_string()),
            analysis_data: json!({"popularity": "rising", "season": "spring"}),
            created_at: fixture_time(),
        },
    ]
}
