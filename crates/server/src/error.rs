//! Error types for the server crate.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading server configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Bind address could not be parsed as host:port
    #[error("Invalid bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Errors returned to HTTP callers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Shared secret header missing or wrong
    #[error("Invalid secret")]
    InvalidSecret,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidSecret => StatusCode::UNAUTHORIZED,
        }
    }
}

/// JSON error body, `{"detail": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
