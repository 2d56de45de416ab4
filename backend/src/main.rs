use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Router};
use dotenvy::dotenv;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod config {
    pub mod app_config;
}
mod handlers {
    pub mod content_handlers;
}

use config::app_config::AppConfig;
use handlers::content_handlers;

pub struct AppState {
    pub config: AppConfig,
}

async fn health_check() -> &'static str {
    "OK"
}

fn cors_layer(frontend_url: Option<&str>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .expose_headers([axum::http::header::CONTENT_TYPE]);
    match frontend_url.and_then(|url| url.parse::<HeaderValue>().ok()) {
        Some(origin) => cors.allow_origin(origin),
        None => cors.allow_origin(Any),
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);
    Router::new()
        .route("/api/health", get(health_check))
        .route("/data/content.json", get(content_handlers::get_default_content))
        .fallback_service(static_files)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(state.config.frontend_url.as_deref()))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        "Serving {} and default content from {}",
        config.static_dir.display(),
        config.content_file.display()
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    let state = Arc::new(AppState { config });
    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}
