use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog::{fixtures, StyleSource};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub styles: StylesConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// The one frontend origin allowed to call the API.
    #[serde(default = "default_origin")]
    pub origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Sqlite,
    Memory,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub backend: Backend,
    #[serde(default)]
    pub sqlite: Option<SqliteConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SqliteConfig {
    pub filename: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StylesMode {
    #[default]
    Derived,
    Static,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StylesConfig {
    #[serde(default)]
    pub source: StylesMode,
    /// Served verbatim when `source` is `static`. Empty means the built-in list.
    #[serde(default)]
    pub list: Vec<String>,
}

impl StylesConfig {
    pub fn style_source(&self) -> StyleSource {
        match self.source {
            StylesMode::Derived => StyleSource::Derived,
            StylesMode::Static if self.list.is_empty() => {
                StyleSource::Static(fixtures::static_styles())
            }
            StylesMode::Static => StyleSource::Static(self.list.clone()),
        }
    }
}

fn default_port() -> String {
    "8000".to_string()
}

fn default_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_database_file() -> String {
    "artdecor.db".to_string()
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        Self::from_yaml(path, &content)
    }

    pub fn from_yaml(path: &str, content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::ParseError(path.to_string(), e))?;

        config.validate()?;
        Ok(config)
    }

    /// Read `path` if it exists, fall back to defaults if it does not, then
    /// apply overrides from the environment (including a `.env` file).
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            Config::default()
        };

        dotenvy::dotenv().ok();
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.is_empty()) {
            self.database.sqlite = Some(SqliteConfig { filename: url });
        }
        if let Some(origin) = lookup("FRONTEND_ORIGIN").filter(|v| !v.is_empty()) {
            self.cors.origin = origin;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.cors.origin.parse::<axum::http::HeaderValue>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "cors.origin is not a valid origin: {}",
                self.cors.origin
            )));
        }
        if self.listen.tlscert.is_some() != self.listen.tlskey.is_some() {
            return Err(ConfigError::Invalid(
                "listen.tlscert and listen.tlskey must be set together".to_string(),
            ));
        }
        Ok(())
    }

    pub fn get_database_path(&self) -> String {
        self.database
            .sqlite
            .as_ref()
            .map(|s| s.filename.clone())
            .unwrap_or_else(default_database_file)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
