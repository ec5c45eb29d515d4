//! Server crate for the MeezGo media analyzer.
//!
//! This crate contains the recommendation engine that runs the pipeline,
//! plus the HTTP surface around it (configuration, shared-secret auth,
//! routes).

pub mod auth;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ConfigError};
pub use orchestrator::RecommendationEngine;
pub use server::{build_router, run, AppState};
