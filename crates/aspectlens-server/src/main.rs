//! AspectLens Server binary
//!
//! Serves three-way review sentiment with a per-aspect breakdown over HTTP.

use anyhow::Result;
use aspectlens_server::{AppState, Cli, ServerConfig};
use clap::Parser;
use std::net::SocketAddr;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    info!("Starting AspectLens server");

    let config = ServerConfig::load(&cli.config, &cli)?;
    info!("Configuration loaded successfully");
    info!("Model: {:?}", config.model);

    let state = AppState::new(&config)?;

    let addr: SocketAddr = format!("{}:{}", config.listen, config.port).parse()?;
    aspectlens_server::run_server(state, addr).await
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("aspectlens=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("aspectlens=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
