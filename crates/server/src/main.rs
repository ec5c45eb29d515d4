//! HTTP service for the MeezGo media analyzer.
//!
//! Reads its configuration from the environment (see `server::config`)
//! and serves `/analyze` and `/health`.

use anyhow::{Context, Result};
use tracing::info;

use server::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().context("Failed to load configuration")?;
    info!(
        "Starting MeezGo media analyzer v{} on {}",
        env!("CARGO_PKG_VERSION"),
        config.bind_addr
    );

    server::run(config).await
}
