//! Link Relay
//!
//! Extracts links from Slack message text and forwards each one to the
//! configured Discord webhook, in order, one POST per link.

pub mod discord;
pub mod dispatch;
pub mod handlers;
pub mod links;

pub use discord::{DiscordMessage, DiscordWebhook, RelayError};
pub use dispatch::{relay_message, RelaySummary};
