//! Slack Events API
//!
//! Inbound payload shapes and the tagged decode used by the `/event` handler.

pub mod events;
pub mod types;

pub use events::SlackEvent;
pub use types::EventError;
