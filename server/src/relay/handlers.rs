//! Event Handler
//!
//! `POST /event`: classifies a Slack payload, answers handshakes and relays
//! links from the configured channel.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use tracing::{debug, info, instrument, warn};

use super::dispatch::relay_message;
use crate::api::AppState;
use crate::slack::SlackEvent;

/// POST /event
///
/// Takes the raw body so no content type is enforced. Returns 400 only for
/// bodies that fail to decode; every other outcome, relay failures included,
/// is an empty 200.
#[instrument(skip(state, body), fields(len = body.len()))]
pub async fn handle_event(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, (StatusCode, String)> {
    let raw = String::from_utf8_lossy(&body);
    info!(body = %raw, "Received event");

    let event = SlackEvent::from_slice(&body)
        .inspect_err(|e| warn!(error = %e, "Dropping malformed event"))?;

    match event {
        SlackEvent::UrlVerification(challenge) => {
            info!("Answering url_verification handshake");
            Ok(Json(challenge).into_response())
        }
        SlackEvent::Message(message) => {
            let config = &state.config;
            if !config.has_channel() || message.channel != config.slack_channel_id {
                debug!(channel = %message.channel, "Message from unrelayed channel");
                return Ok(StatusCode::OK.into_response());
            }

            let summary = relay_message(&state.webhook, &message.text).await;
            debug!(
                channel = %message.channel,
                matched = summary.matched,
                delivered = summary.delivered,
                rejected = summary.rejected,
                skipped = summary.skipped(),
                "Message processed"
            );
            Ok(StatusCode::OK.into_response())
        }
        SlackEvent::Ignored { kind } => {
            info!(kind = %kind, body = %raw, "Ignored");
            Ok(StatusCode::OK.into_response())
        }
    }
}
