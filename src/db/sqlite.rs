use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use super::model::*;
use super::repo::*;

const ARTWORK_COLUMNS: &str = "id, title, brand, price, style_tags, dominant_palette, \
     image_url, dimensions, description, created_at, updated_at";

const TREND_COLUMNS: &str =
    "id, style, trend_score, seasonal_factor, region, analysis_data, created_at";

pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Open (creating if needed) the database at `db_path`. Accepts a bare
    /// filename, a `sqlite:` URL or `sqlite::memory:`.
    pub async fn new(db_path: &str) -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(db_path)?.create_if_missing(true);

        // An in-memory database lives only as long as its connections, so
        // keep exactly one open for the lifetime of the pool.
        let in_memory = db_path.contains(":memory:");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;

        let repo = Self { pool };
        repo.init_schema().await?;

        info!("Database initialized at {}", db_path);

        Ok(repo)
    }

    async fn init_schema(&self) -> DbResult<()> {
        let schema = include_str!("schema.sql");
        sqlx::raw_sql(schema).execute(&self.pool).await?;
        Ok(())
    }

    /// Replace the whole catalog in one transaction. Used by the seeder.
    pub async fn replace_catalog(
        &self,
        artworks: &[Artwork],
        trends: &[StyleTrend],
    ) -> DbResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM artwork").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM trend_analysis")
            .execute(&mut *tx)
            .await?;

        for artwork in artworks {
            sqlx::query(
                "INSERT INTO artwork
                (id, title, brand, price, style_tags, dominant_palette, image_url,
                 dimensions, description, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&artwork.id)
            .bind(&artwork.title)
            .bind(&artwork.brand)
            .bind(artwork.price)
            .bind(encode_json(&artwork.style_tags))
            .bind(encode_json(&artwork.dominant_palette))
            .bind(&artwork.image_url)
            .bind(artwork.dimensions.as_ref().map(encode_json))
            .bind(&artwork.description)
            .bind(artwork.created_at.to_rfc3339())
            .bind(artwork.updated_at.to_rfc3339())
            .execute(&mut *tx)
            .await?;
        }

        for trend in trends {
            sqlx::query(
                "INSERT INTO trend_analysis
                (id, style, trend_score, seasonal_factor, region, analysis_data, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&trend.id)
            .bind(&trend.style)
            .bind(trend.trend_score)
            .bind(trend.seasonal_factor)
            .bind(&trend.region)
            .bind(encode_json(&trend.analysis_data))
            .bind(trend.created_at.to_rfc3339())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        info!(
            artworks = artworks.len(),
            trends = trends.len(),
            "Catalog replaced"
        );
        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct ArtworkRow {
    id: String,
    title: String,
    brand: Option<String>,
    price: Option<f64>,
    style_tags: String,
    dominant_palette: String,
    image_url: String,
    dimensions: Option<String>,
    description: Option<String>,
    created_at: String,
    updated_at: String,
}

impl TryFrom<ArtworkRow> for Artwork {
    type Error = DbError;

    fn try_from(row: ArtworkRow) -> DbResult<Self> {
        let dimensions = match row.dimensions.as_deref() {
            Some(raw) => decode_json(&row.id, "dimensions", raw)?,
            None => None,
        };
        Ok(Artwork {
            style_tags: decode_json(&row.id, "style_tags", &row.style_tags)?,
            dominant_palette: decode_json(&row.id, "dominant_palette", &row.dominant_palette)?,
            created_at: decode_time(&row.id, "created_at", &row.created_at)?,
            updated_at: decode_time(&row.id, "updated_at", &row.updated_at)?,
            dimensions,
            id: row.id,
            title: row.title,
            brand: row.brand,
            price: row.price,
            image_url: row.image_url,
            description: row.description,
        })
    }
}

#[derive(sqlx::FromRow)]
struct TrendRow {
    id: String,
    style: String,
    trend_score: f64,
    seasonal_factor: f64,
    region: Option<String>,
    analysis_data: String,
    created_at: String,
}

impl TryFrom<TrendRow> for StyleTrend {
    type Error = DbError;

    fn try_from(row: TrendRow) -> DbResult<Self> {
        Ok(StyleTrend {
            analysis_data: decode_json(&row.id, "analysis_data", &row.analysis_data)?,
            created_at: decode_time(&row.id, "created_at", &row.created_at)?,
            id: row.id,
            style: row.style,
            trend_score: row.trend_score,
            seasonal_factor: row.seasonal_factor,
            region: row.region,
        })
    }
}

fn encode_json<T: serde::Serialize>(value: &T) -> String {
    // Plain data types; serialization cannot fail.
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

fn decode_json<T: DeserializeOwned>(id: &str, column: &'static str, raw: &str) -> DbResult<T> {
    serde_json::from_str(raw).map_err(|e| DbError::Decode {
        id: id.to_string(),
        column,
        reason: e.to_string(),
    })
}

fn decode_time(id: &str, column: &'static str, raw: &str) -> DbResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DbError::Decode {
            id: id.to_string(),
            column,
            reason: e.to_string(),
        })
}

#[async_trait]
impl ArtworkRepo for SqliteRepository {
    async fn list_artworks(&self) -> DbResult<Vec<Artwork>> {
        let rows = sqlx::query_as::<_, ArtworkRow>(&format!(
            "SELECT {} FROM artwork ORDER BY rowid",
            ARTWORK_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!("Loaded {} artwork rows", rows.len());
        rows.into_iter().map(Artwork::try_from).collect()
    }

    async fn get_artwork(&self, id: &str) -> DbResult<Artwork> {
        let row = sqlx::query_as::<_, ArtworkRow>(&format!(
            "SELECT {} FROM artwork WHERE id = ?",
            ARTWORK_COLUMNS
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => DbError::NotFound(format!("Artwork not found: {}", id)),
            _ => DbError::Sqlx(e),
        })?;

        Artwork::try_from(row)
    }

    async fn list_distinct_style_tags(&self) -> DbResult<Vec<String>> {
        let results = sqlx::query_as::<_, (String,)>(
            "SELECT DISTINCT tag.value FROM artwork, json_each(artwork.style_tags) AS tag",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(results.into_iter().map(|r| r.0).collect())
    }
}

#[async_trait]
impl TrendRepo for SqliteRepository {
    async fn list_trends(&self) -> DbResult<Vec<StyleTrend>> {
        let rows = sqlx::query_as::<_, TrendRow>(&format!(
            "SELECT {} FROM trend_analysis ORDER BY rowid",
            TREND_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(StyleTrend::try_from).collect()
    }
}

impl Repository for SqliteRepository {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
