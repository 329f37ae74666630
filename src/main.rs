//! helios-predictor - HTTP Server Entry Point
//!
//! Loads the prediction table and starts the HTTP server that exposes the
//! prediction API.

use helios_predictor::{api, config::Config, predictions::PredictionTable};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "helios_predictor=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Load the prediction table; a malformed or missing file is fatal, the
    // server never comes up with a partial table
    let table = PredictionTable::load(&config.predictions_path)?;
    info!(
        "Loaded {} task type predictions from {}",
        table.len(),
        config.predictions_path.display()
    );

    // Start HTTP server
    info!("Starting server on {}:{}", config.host, config.port);
    api::serve(config, table).await?;

    Ok(())
}
