//! Shared-secret check for the analyze endpoint.
//!
//! When a secret is configured, callers must send it in the
//! `X-MCP-Secret` header. Both sides are trimmed before comparison.
//! The recommendation engine never sees rejected requests.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::error::ApiError;
use crate::server::AppState;

/// Header carrying the shared secret
pub const SECRET_HEADER: &str = "x-mcp-secret";

/// Middleware rejecting requests whose secret header does not match
pub async fn require_shared_secret(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(expected) = state.config.api_secret.as_deref() {
        // Missing or non-ASCII headers count as an empty secret
        let presented = request
            .headers()
            .get(SECRET_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .unwrap_or_default();

        if presented != expected {
            warn!("Rejected {} {}: invalid secret", request.method(), request.uri().path());
            return Err(ApiError::InvalidSecret);
        }
    }

    Ok(next.run(request).await)
}
