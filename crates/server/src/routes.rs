//! API routes for the media analyzer
//!
//! - `POST /analyze`: recommendation for one request (shared-secret guarded)
//! - `GET /health`: liveness and version

use std::sync::Arc;

use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use domain::{AnalyzeRequest, AnalyzeResponse};

use crate::auth::require_shared_secret;
use crate::server::AppState;

type AppStateArc = Arc<AppState>;

pub const SERVICE_NAME: &str = "MeezGo AI Media Analyzer";

// ============================================================================
// Analyze Routes
// ============================================================================

pub fn analyze_routes(state: AppStateArc) -> Router<AppStateArc> {
    Router::new()
        .route("/analyze", post(analyze_media))
        .route_layer(middleware::from_fn_with_state(state, require_shared_secret))
}

async fn analyze_media(
    State(state): State<AppStateArc>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    info!(
        "Analyze request: mode={}, images={}, place_size={:?}",
        req.mode,
        req.image_urls.len(),
        req.context.place_size
    );
    let recommendation = state.engine.recommend(&req);
    Json(AnalyzeResponse::from(recommendation))
}

// ============================================================================
// Health Routes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
