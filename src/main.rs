use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use co2_dashboard::{Config, Dashboard, DashboardServer};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    info!(data = %config.data.display(), addr = %config.socket_addr(), "starting CO₂ dashboard");

    // Step 1: load, clean, aggregate and render before any socket is opened
    let dashboard = Dashboard::load(&config.data, config.top)
        .with_context(|| format!("failed to build dashboard from {}", config.data.display()))?;

    // Step 2: serve the snapshot until shut down
    let server = DashboardServer::new(&dashboard, config.socket_addr());
    server.start().await?;

    Ok(())
}
