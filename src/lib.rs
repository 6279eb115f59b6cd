pub mod api;
pub mod catalog;
pub mod config;
pub mod db;
pub mod middleware;
pub mod server;
pub mod util;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use config::{Backend, Config};
use db::{MemoryRepository, Repository, SqliteRepository};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Database error: {0}")]
    Database(#[from] db::DbError),
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the catalog store selected by `database.backend`.
pub async fn open_repository(config: &Config) -> Result<Arc<dyn Repository>, ServerError> {
    match config.database.backend {
        Backend::Sqlite => {
            let db_path = config.get_database_path();
            info!("Opening database at {}", db_path);
            Ok(Arc::new(SqliteRepository::new(&db_path).await?))
        }
        Backend::Memory => {
            info!("Serving the built-in fixture catalog");
            Ok(Arc::new(MemoryRepository::new(
                catalog::fixtures::artworks(),
                catalog::fixtures::trends(),
            )))
        }
    }
}

pub async fn run(config_path: &str, debug_logs: bool) -> Result<(), ServerError> {
    let config = Config::load(config_path)?;

    info!("Using config file: {}", config_path);
    if debug_logs {
        info!("Debug logging enabled");
    }

    let repo = open_repository(&config).await?;
    info!(
        backend = repo.backend_name(),
        styles = ?config.styles.source,
        cors_origin = %config.cors.origin,
        "Catalog ready"
    );

    let address = config.listen.address.as_deref().unwrap_or("0.0.0.0");
    let port = &config.listen.port;
    let addr: SocketAddr = format!("{}:{}", address, port)
        .parse()
        .map_err(|e| ServerError::Server(format!("Invalid address: {}", e)))?;

    let tls = match (&config.listen.tlscert, &config.listen.tlskey) {
        (Some(cert), Some(key)) => Some((cert.clone(), key.clone())),
        _ => None,
    };

    let state = server::AppState::new(config, repo);
    let app = server::build_router(state)?;

    if let Some((cert_path, key_path)) = tls {
        info!("Loading TLS certificate from {}", cert_path);
        info!("Loading TLS key from {}", key_path);

        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(cert_path, key_path)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to load TLS config: {}", e)))?;

        info!("Serving HTTPS on {}", addr);

        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service())
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
    } else {
        info!("Serving HTTP on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
    }

    Ok(())
}

/// Populate the configured SQLite database with a generated sample catalog.
pub async fn seed(config_path: &str, options: catalog::SeedOptions) -> Result<(), ServerError> {
    let config = Config::load(config_path)?;
    if config.database.backend != Backend::Sqlite {
        return Err(ServerError::Server(
            "seeding needs database.backend set to sqlite".to_string(),
        ));
    }

    let db_path = config.get_database_path();
    info!("Seeding database at {}", db_path);
    let repo = SqliteRepository::new(&db_path).await?;

    let catalog = catalog::seed_database(&repo, &options).await?;
    info!(
        artworks = catalog.artworks.len(),
        trends = catalog.trends.len(),
        "Seeding complete"
    );
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
