// ABOUTME: HTTP server bootstrap
// ABOUTME: Opens storage, wraps the API router in CORS and tracing layers and serves until ctrl-c

use std::net::SocketAddr;

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use axum::Router;
use folio_projects::DbState;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;

/// Build the CORS layer; `*` allows any origin, otherwise a comma separated list
pub fn cors_layer(origin: &str) -> anyhow::Result<CorsLayer> {
    let allow_origin = if origin.trim() == "*" {
        AllowOrigin::from(Any)
    } else {
        let origins = origin
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(|o| {
                o.parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin '{}'", o))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any))
}

/// Full application: API routes plus the server-wide layers
pub fn create_app(db: DbState, config: &Config) -> anyhow::Result<Router> {
    Ok(folio_api::create_router(db, config.max_upload_bytes)
        .layer(cors_layer(&config.cors_origin)?)
        .layer(TraceLayer::new_for_http()))
}

pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let db = DbState::init(
        config.database_path.clone(),
        config.images_dir.clone(),
        config.token_validity_secs,
    )
    .await
    .context("Failed to initialize storage")?;

    let app = create_app(db, &config)?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", config.host, config.port))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}
