//! Slack Payload Types
//!
//! Wire shapes for the subset of the Events API the relay understands.
//! Missing or `null` string fields decode as empty strings; unknown fields
//! are ignored.

use axum::http::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Decode `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level discriminator present on every Events API payload.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Envelope {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
}

/// `url_verification` handshake. Echoed back verbatim as the response body.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlVerification {
    #[serde(default, deserialize_with = "null_as_default")]
    pub challenge: String,
}

/// `event_callback` wrapper, decoded only far enough to read `event.type`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CallbackEnvelope {
    #[serde(default)]
    pub event: Option<EventHeader>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct EventHeader {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
}

/// `event_callback` wrapper around a `message` event.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct MessageEnvelope {
    #[serde(default)]
    pub event: Option<MessageEvent>,
}

/// A message posted to a channel.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub channel: String,
}

/// Inbound event errors.
#[derive(Error, Debug)]
pub enum EventError {
    #[error("Malformed event payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<EventError> for (StatusCode, String) {
    fn from(err: EventError) -> Self {
        match err {
            EventError::Malformed(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        }
    }
}
