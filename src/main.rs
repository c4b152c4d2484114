//! `TripWeaver` server entry point

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tripweaver::api::AppState;
use tripweaver::config::TripWeaverConfig;
use tripweaver::generator::GroqClient;
use tripweaver::web;

#[tokio::main]
async fn main() -> Result<()> {
    let config = TripWeaverConfig::load().context("Failed to load configuration")?;

    // RUST_LOG wins over the configured default level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting TripWeaver v{}", tripweaver::VERSION);
    tracing::info!(
        "Using model {} at {}",
        config.llm.model,
        config.llm.base_url
    );

    let generator =
        GroqClient::new(config.llm.clone()).context("Failed to create chat-completion client")?;
    let state = AppState {
        generator: Arc::new(generator),
    };

    web::run(config.server.port, state).await
}
