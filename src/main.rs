//! taskboard - HTTP Server Entry Point
//!
//! Starts the HTTP server that exposes the task API and serves the
//! single-page client.

use taskboard::{api, config::Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Loaded configuration: host={} port={} clear_endpoint={}",
        config.host, config.port, config.enable_clear_endpoint
    );

    api::serve(config).await?;

    Ok(())
}
