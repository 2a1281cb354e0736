//! API Router and Application State
//!
//! Central routing configuration and shared state.

use std::sync::Arc;

use axum::{routing::post, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{config::Config, relay, relay::DiscordWebhook};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration, read once at startup
    pub config: Arc<Config>,
    /// Destination webhook
    pub webhook: DiscordWebhook,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(config: Config, http_client: reqwest::Client) -> Self {
        let webhook = DiscordWebhook::from_config(http_client, &config);
        Self {
            config: Arc::new(config),
            webhook,
        }
    }
}

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/event", post(relay::handlers::handle_event))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
