use axum::{
    extract::Request,
    http::{HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::catalog::StyleSource;
use crate::config::{Config, ConfigError};
use crate::db::Repository;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub repo: Arc<dyn Repository>,
    pub styles: StyleSource,
}

impl AppState {
    pub fn new(config: Config, repo: Arc<dyn Repository>) -> Self {
        let styles = config.styles.style_source();
        Self {
            config: Arc::new(config),
            repo,
            styles,
        }
    }
}

pub fn build_router(state: AppState) -> Result<Router, ConfigError> {
    let origin = state
        .config
        .cors
        .origin
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::Invalid(format!("cors.origin: {}", e)))?;

    let catalog_routes = Router::new()
        .route("/artworks", get(crate::api::list_artworks))
        .route("/artworks/:id", get(crate::api::get_artwork))
        .route("/styles", get(crate::api::list_styles))
        .route("/trends", get(crate::api::list_trends));

    let placeholder_routes = Router::new()
        .route("/rooms/analyze", post(crate::api::analyze_room))
        .route("/recommendations", post(crate::api::recommendations));

    let router = Router::new()
        .route("/", get(crate::api::service_info))
        .route("/health", get(crate::api::health))
        .merge(catalog_routes)
        .merge(placeholder_routes)
        .fallback(fallback_handler)
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list([origin]))
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}

async fn fallback_handler(req: Request) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        axum::Json(crate::api::ErrorBody {
            detail: format!("Not Found: {}", req.uri().path()),
        }),
    )
}
