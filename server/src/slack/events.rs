//! Slack Event Classification
//!
//! Decodes the discriminator first, then decodes the same body into the
//! variant that discriminator selects.

use super::types::{
    CallbackEnvelope, Envelope, EventError, MessageEnvelope, MessageEvent, UrlVerification,
};

/// Top-level payload types handled by the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvelopeType {
    /// Endpoint ownership handshake.
    UrlVerification,
    /// Wrapper around a workspace event.
    EventCallback,
}

impl EnvelopeType {
    /// Parse from the wire form (e.g., `"url_verification"`).
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "url_verification" => Some(Self::UrlVerification),
            "event_callback" => Some(Self::EventCallback),
            _ => None,
        }
    }
}

/// Nested `event.type` that carries message text.
const MESSAGE_EVENT_TYPE: &str = "message";

/// A classified inbound payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlackEvent {
    /// Handshake whose challenge must be echoed back.
    UrlVerification(UrlVerification),
    /// A channel message wrapped in an `event_callback`.
    Message(MessageEvent),
    /// Any other top-level or nested type. Carries the type that was skipped.
    Ignored { kind: String },
}

impl SlackEvent {
    /// Classify a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, EventError> {
        let envelope: Envelope = serde_json::from_slice(body)?;

        match EnvelopeType::parse_str(&envelope.kind) {
            Some(EnvelopeType::UrlVerification) => {
                let challenge: UrlVerification = serde_json::from_slice(body)?;
                Ok(Self::UrlVerification(challenge))
            }
            Some(EnvelopeType::EventCallback) => {
                let callback: CallbackEnvelope = serde_json::from_slice(body)?;
                let kind = callback.event.unwrap_or_default().kind;
                if kind != MESSAGE_EVENT_TYPE {
                    return Ok(Self::Ignored { kind });
                }

                let message: MessageEnvelope = serde_json::from_slice(body)?;
                Ok(Self::Message(message.event.unwrap_or_default()))
            }
            None => Ok(Self::Ignored {
                kind: envelope.kind,
            }),
        }
    }
}
