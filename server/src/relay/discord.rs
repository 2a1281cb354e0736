//! Discord Webhook Client
//!
//! Builds the outbound message for a link and POSTs it to the configured
//! webhook. No retries; each call is a single attempt.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;

/// Display name used for every relayed message.
pub const RELAY_USERNAME: &str = "Music Commander";

/// Body of a Discord "execute webhook" request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordMessage {
    pub username: String,
    pub content: String,
}

impl DiscordMessage {
    /// Build the message for one link.
    pub fn for_link(prefix: &str, link: &str) -> Self {
        Self {
            username: RELAY_USERNAME.to_string(),
            content: format!("{prefix}{link}"),
        }
    }
}

/// Result of a single delivery that reached the webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub status: StatusCode,
    pub body: String,
}

impl Delivery {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Outbound relay errors.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Connection, DNS or TLS failure before a response arrived.
    #[error("Webhook transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// The configured destination webhook.
#[derive(Debug, Clone)]
pub struct DiscordWebhook {
    client: reqwest::Client,
    url: String,
    prefix: String,
}

impl DiscordWebhook {
    pub fn new(client: reqwest::Client, url: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            prefix: prefix.into(),
        }
    }

    /// Create from server configuration.
    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        Self::new(
            client,
            config.discord_webhook_url.clone(),
            config.message_prefix.clone(),
        )
    }

    /// Shared HTTP client for outbound calls. No timeout is applied.
    pub fn build_client() -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
    }

    /// POST one link and log the response status and body.
    ///
    /// A non-success status is returned as `Ok`; only transport failures are errors.
    pub async fn send_link(&self, link: &str) -> Result<Delivery, RelayError> {
        let message = DiscordMessage::for_link(&self.prefix, link);

        let resp = self.client.post(&self.url).json(&message).send().await?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_else(|e| {
            warn!(status = %status, error = %e, "Failed to read webhook response body");
            String::new()
        });
        let delivery = Delivery { status, body };

        if delivery.is_success() {
            info!(
                status = %delivery.status,
                response = %delivery.body,
                content = %message.content,
                "Link relayed"
            );
        } else {
            warn!(
                status = %delivery.status,
                response = %delivery.body,
                content = %message.content,
                "Webhook rejected relayed link"
            );
        }

        Ok(delivery)
    }
}
