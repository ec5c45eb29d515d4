//! HTTP server for the media analyzer

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::orchestrator::RecommendationEngine;
use crate::routes;

/// Application state shared across handlers
pub struct AppState {
    pub engine: RecommendationEngine,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(engine: RecommendationEngine, config: ServerConfig) -> Self {
        Self { engine, config }
    }
}

/// Build the router with all routes and layers attached
pub fn build_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .merge(routes::analyze_routes(state.clone()))
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until Ctrl-C
pub async fn run(config: ServerConfig) -> Result<()> {
    let addr = config.bind_addr;
    if !config.auth_enabled() {
        warn!("No shared secret configured, /analyze accepts unauthenticated requests");
    }

    let app = build_router(AppState::new(RecommendationEngine::new(), config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}
