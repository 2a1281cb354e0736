//! Link Relay Server - Main Entry Point
//!
//! Relays links from a Slack channel to a Discord webhook.

use anyhow::Result;
use tracing::{error, info, warn};

use relay_server::{api, config, relay::DiscordWebhook};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env first so it can also supply RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relay_server=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    // Load configuration; a missing webhook URL exits with status 1 before binding
    let config = config::Config::from_env()
        .inspect_err(|e| error!(error = %e, "Invalid configuration"))?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Link Relay Server"
    );

    if !config.has_channel() {
        warn!("SLACK_CHANNEL_ID is not set, no messages will be relayed");
    }

    let http_client = DiscordWebhook::build_client()?;
    let bind_address = config.bind_address();

    // Build application state and router
    let state = api::AppState::new(config, http_client);
    let app = api::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .inspect_err(|e| error!(address = %bind_address, error = %e, "Failed to bind listener"))?;
    info!(address = %bind_address, "Server listening");

    // Graceful shutdown handler
    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install CTRL+C signal handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received shutdown signal, shutting down...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .inspect_err(|e| error!(error = %e, "Server error"))?;

    info!("Server shutdown complete");

    Ok(())
}
