//! Random sample catalog used to populate a fresh database.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use serde_json::json;
use tracing::info;
use uuid::Builder;

use crate::db::{Artwork, DbResult, Dimensions, Palette, SqliteRepository, StyleTrend};

struct StyleProfile {
    name: &'static str,
    tags: [&'static str; 4],
    palettes: [[&'static str; 4]; 3],
    price_range: (f64, f64),
    brands: [&'static str; 3],
}

const STYLES: &[StyleProfile] = &[
    StyleProfile {
        name: "abstract",
        tags: ["modern", "contemporary", "geometric", "colorful"],
        palettes: [
            ["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4"],
            ["#FF9A9E", "#FECFEF", "#FECFEF", "#FAD0C4"],
            ["#A8E6CF", "#FFD3A5", "#FFAAA5", "#FF8B94"],
        ],
        price_range: (50.0, 500.0),
        brands: ["Modern Art Co.", "Contemporary Canvas", "Abstract Expressions"],
    },
    StyleProfile {
        name: "minimalist",
        tags: ["clean", "simple", "monochrome", "geometric"],
        palettes: [
            ["#FFFFFF", "#F5F5F5", "#E0E0E0", "#BDBDBD"],
            ["#2C3E50", "#34495E", "#7F8C8D", "#BDC3C7"],
            ["#F8F9FA", "#E9ECEF", "#DEE2E6", "#CED4DA"],
        ],
        price_range: (30.0, 300.0),
        brands: ["Clean Lines", "Simple Spaces", "Minimal Design Co."],
    },
    StyleProfile {
        name: "vintage",
        tags: ["retro", "classic", "warm", "nostalgic"],
        palettes: [
            ["#8B4513", "#D2691E", "#CD853F", "#F4A460"],
            ["#2F4F4F", "#708090", "#A9A9A9", "#D3D3D3"],
            ["#8B0000", "#B22222", "#DC143C", "#FF6347"],
        ],
        price_range: (40.0, 400.0),
        brands: ["Retro Revival", "Classic Collection", "Vintage Vibes"],
    },
    StyleProfile {
        name: "nature",
        tags: ["organic", "green", "natural", "botanical"],
        palettes: [
            ["#228B22", "#32CD32", "#90EE90", "#98FB98"],
            ["#8FBC8F", "#9ACD32", "#ADFF2F", "#7FFF00"],
            ["#2E8B57", "#3CB371", "#20B2AA", "#40E0D0"],
        ],
        price_range: (35.0, 350.0),
        brands: ["Natural Elements", "Botanical Art", "Green Living"],
    },
    StyleProfile {
        name: "bohemian",
        tags: ["eclectic", "colorful", "patterned", "artistic"],
        palettes: [
            ["#FF1493", "#FF69B4", "#FFB6C1", "#FFC0CB"],
            ["#8A2BE2", "#9370DB", "#BA55D3", "#DA70D6"],
            ["#FF4500", "#FF6347", "#FF7F50", "#FFA500"],
        ],
        price_range: (60.0, 600.0),
        brands: ["Boho Chic", "Eclectic Arts", "Free Spirit"],
    },
    StyleProfile {
        name: "industrial",
        tags: ["urban", "metallic", "raw", "modern"],
        palettes: [
            ["#2F4F4F", "#708090", "#A9A9A9", "#D3D3D3"],
            ["#696969", "#808080", "#A9A9A9", "#C0C0C0"],
            ["#8B0000", "#B22222", "#DC143C", "#FF6347"],
        ],
        price_range: (45.0, 450.0),
        brands: ["Urban Edge", "Industrial Design", "Metro Art"],
    },
];

const TITLE_NOUNS: &[&str] = &["Composition", "Study", "Expression", "Piece", "Work"];
const ROOMS: &[&str] = &["living rooms", "bedrooms", "offices", "dining areas"];
const SIZES: &[u32] = &[24, 30, 36, 48, 60];

#[derive(Debug, Clone, Copy)]
pub struct SeedOptions {
    pub min_per_style: u32,
    pub max_per_style: u32,
    /// Fixed RNG seed for a reproducible catalog.
    pub rng_seed: Option<u64>,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            min_per_style: 80,
            max_per_style: 120,
            rng_seed: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub artworks: Vec<Artwork>,
    pub trends: Vec<StyleTrend>,
}

fn pick<R: Rng>(rng: &mut R, items: &[&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn generate_artwork<R: Rng>(
    rng: &mut R,
    style: &StyleProfile,
    index: u32,
    now: DateTime<Utc>,
) -> Artwork {
    let colors = style.palettes[rng.random_range(0..style.palettes.len())];
    let (low, high) = style.price_range;
    let price = (rng.random_range(low..=high) * 100.0).round() / 100.0;

    let mut style_tags: Vec<String> = style.tags.iter().map(|t| t.to_string()).collect();
    style_tags.push(style.name.to_string());

    let width = SIZES.choose(rng).copied().unwrap_or(24);
    let height = SIZES.choose(rng).copied().unwrap_or(24);

    Artwork {
        id: Builder::from_random_bytes(rng.random()).into_uuid().to_string(),
        title: format!(
            "{} {} #{}",
            title_case(style.name),
            pick(rng, TITLE_NOUNS),
            index
        ),
        brand: Some(pick(rng, &style.brands).to_string()),
        price: Some(price),
        style_tags,
        dominant_palette: Palette {
            colors: colors.iter().map(|c| c.to_string()).collect(),
            primary: Some(colors[0].to_string()),
            secondary: Some(colors[1].to_string()),
            accent: Some(colors[2].to_string()),
        },
        image_url: format!(
            "https://example-artwork-images.com/{}/{}.jpg",
            style.name, index
        ),
        dimensions: Some(Dimensions {
            width,
            height,
            unit: "inches".to_string(),
        }),
        description: Some(format!(
            "A beautiful {} artwork featuring {}, {} tones. Perfect for {}.",
            style.name,
            colors[0],
            colors[1],
            pick(rng, ROOMS)
        )),
        created_at: now,
        updated_at: now,
    }
}

fn sample_trends<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Vec<StyleTrend> {
    let rows = [
        ("minimalist", 0.85, 1.2, "high", "spring", vec!["millennials", "gen_z"]),
        ("nature", 0.78, 1.5, "rising", "spring", vec!["all_ages"]),
        ("bohemian", 0.65, 0.9, "stable", "all", vec!["young_adults"]),
    ];

    rows.into_iter()
        .map(
            |(style, trend_score, seasonal_factor, popularity, season, demographics)| StyleTrend {
                id: Builder::from_random_bytes(rng.random()).into_uuid().to_string(),
                style: style.to_string(),
                trend_score,
                seasonal_factor,
                region: Some("global".to_string()),
                analysis_data: json!({
                    "popularity": popularity,
                    "season": season,
                    "demographics": demographics,
                }),
                created_at: now,
            },
        )
        .collect()
}

/// Build a shuffled sample catalog covering every known style.
pub fn generate_catalog(options: &SeedOptions) -> Catalog {
    let mut rng = match options.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let now = Utc::now();

    let min = options.min_per_style;
    let max = options.max_per_style.max(min);

    let mut artworks = Vec::new();
    for style in STYLES {
        let count = rng.random_range(min..=max);
        for i in 0..count {
            artworks.push(generate_artwork(&mut rng, style, i + 1, now));
        }
    }
    artworks.shuffle(&mut rng);

    let trends = sample_trends(&mut rng, now);

    Catalog { artworks, trends }
}

/// Replace whatever is in `repo` with a freshly generated catalog.
pub async fn seed_database(repo: &SqliteRepository, options: &SeedOptions) -> DbResult<Catalog> {
    info!(
        min_per_style = options.min_per_style,
        max_per_style = options.max_per_style,
        rng_seed = ?options.rng_seed,
        "Generating sample catalog"
    );
    let catalog = generate_catalog(options);
    repo.replace_catalog(&catalog.artworks, &catalog.trends)
        .await?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::ArtworkRepo;
    use std::collections::HashSet;

    fn small(seed: u64) -> SeedOptions {
        SeedOptions {
            min_per_style: 3,
            max_per_style: 5,
            rng_seed: Some(seed),
        }
    }

    #[test]
    fn test_counts_within_bounds() {
        let catalog = generate_catalog(&small(7));
        for style in STYLES {
            let n = catalog
                .artworks
                .iter()
                .filter(|a| a.style_tags.last().map(String::as_str) == Some(style.name))
                .count();
            assert!((3..=5).contains(&n), "{}: {}", style.name, n);
        }
        assert_eq!(catalog.trends.len(), 3);
    }

    #[test]
    fn test_prices_within_style_range() {
        let catalog = generate_catalog(&small(11));
        for artwork in &catalog.artworks {
            let style = STYLES
                .iter()
                .find(|s| artwork.has_style(s.name) && artwork.image_url.contains(s.name))
                .unwrap();
            let price = artwork.price.unwrap();
            assert!(price >= style.price_range.0 && price <= style.price_range.1);
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_catalog(&small(42));
        let b = generate_catalog(&small(42));
        let ids_a: Vec<&str> = a.artworks.iter().map(|x| x.id.as_str()).collect();
        let ids_b: Vec<&str> = b.artworks.iter().map(|x| x.id.as_str()).collect();
        assert_eq!(ids_a, ids_b);

        let unique: HashSet<&str> = ids_a.iter().copied().collect();
        assert_eq!(unique.len(), ids_a.len());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("bohemian"), "Bohemian");
        assert_eq!(title_case(""), "");
    }

    #[tokio::test]
    async fn test_seed_database() {
        let repo = SqliteRepository::new("sqlite::memory:").await.unwrap();
        let catalog = seed_database(&repo, &small(1)).await.unwrap();
        let stored = repo.list_artworks().await.unwrap();
        assert_eq!(stored.len(), catalog.artworks.len());
        assert_eq!(stored[0].id, catalog.artworks[0].id);
    }
}
