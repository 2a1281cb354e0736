//! Server Configuration
//!
//! Loads configuration from environment variables once at startup. The
//! resulting [`Config`] is immutable and shared with handlers through
//! [`crate::api::AppState`].

use anyhow::{Context, Result};
use std::env;

/// Default listen port when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port (all interfaces)
    pub port: u16,

    /// Discord webhook that receives relayed links
    pub discord_webhook_url: String,

    /// Prepended to every relayed link (may be empty)
    pub message_prefix: String,

    /// The only Slack channel whose messages are relayed.
    ///
    /// Empty means no channel ever matches.
    pub slack_channel_id: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let discord_webhook_url = env::var("DISCORD_WEBHOOK_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .context("DISCORD_WEBHOOK_URL must be set")?;

        let port = match env::var("PORT") {
            Ok(v) if !v.is_empty() => v
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {v:?}"))?,
            _ => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            discord_webhook_url,
            message_prefix: env::var("MESSAGE_PREFIX").unwrap_or_default(),
            slack_channel_id: env::var("SLACK_CHANNEL_ID").unwrap_or_default(),
        })
    }

    /// Socket address to bind the listener to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Check if a channel filter is configured.
    #[must_use]
    pub fn has_channel(&self) -> bool {
        !self.slack_channel_id.is_empty()
    }

    /// Create a default configuration for testing.
    ///
    /// The webhook URL points at a closed local port; integration tests
    /// replace it with a `wiremock` server URI.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            port: 0,
            discord_webhook_url: "http://127.0.0.1:9/webhook".into(),
            message_prefix: String::new(),
            slack_channel_id: "C0TEST".into(),
        }
    }
}
