mod api;
mod config;
mod error;
mod models;
mod normalize;
mod server;

#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::OddsApiClient;
use crate::config::Config;
use crate::server::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "odds_proxy=info,tower_http=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting odds-proxy");

    // Load configuration
    let config = Config::from_env()?;
    if config.odds_api_key.is_empty() {
        warn!("ODDS_API_KEY is not set, upstream calls will be rejected");
    }
    info!(
        "Configuration loaded (upstream: {}, default sport: {})",
        config.odds_api_base_url, config.default_sport
    );

    let client = OddsApiClient::new(&config.odds_api_base_url, &config.odds_api_key);
    let app = server::router(AppState::new(client, &config.default_sport));

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind address {}", addr))?;

    info!("Odds proxy listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server exited with an error")?;

    info!("Shutting down odds-proxy");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
