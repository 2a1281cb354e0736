//! Relay Dispatch
//!
//! Sequential per-message relay loop. Links are sent in the order they appear
//! in the text; a transport failure stops the remaining sends for that message.

use tracing::{debug, error};

use super::discord::{DiscordWebhook, RelayError};
use super::links::extract_links;

/// What happened to the links found in one message.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RelaySummary {
    /// Links matched in the message text.
    pub matched: usize,
    /// Links the webhook accepted (2xx).
    pub delivered: usize,
    /// Links the webhook answered with a non-success status.
    pub rejected: usize,
    /// Whether a transport failure cut the loop short.
    pub aborted: bool,
}

impl RelaySummary {
    /// Links never sent because an earlier send failed in transport.
    pub const fn skipped(&self) -> usize {
        self.matched
            .saturating_sub(self.delivered + self.rejected)
            .saturating_sub(self.aborted as usize)
    }
}

/// Extract links from `text` and relay each one to `webhook`.
pub async fn relay_message(webhook: &DiscordWebhook, text: &str) -> RelaySummary {
    let links = extract_links(text);
    let mut summary = RelaySummary {
        matched: links.len(),
        ..RelaySummary::default()
    };

    if links.is_empty() {
        debug!("No links in message");
        return summary;
    }

    for link in links {
        match webhook.send_link(link).await {
            Ok(delivery) if delivery.is_success() => summary.delivered += 1,
            Ok(_) => summary.rejected += 1,
            Err(RelayError::Transport(e)) => {
                summary.aborted = true;
                error!(
                    link = %link,
                    error = %e,
                    "Failed to reach webhook, dropping remaining links"
                );
                break;
            }
        }
    }

    summary
}
