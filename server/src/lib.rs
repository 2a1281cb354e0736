//! Link Relay Server
//!
//! Receives Slack Events API callbacks, picks links out of messages posted to
//! one channel and forwards each link to a Discord webhook.

pub mod api;
pub mod config;
pub mod relay;
pub mod slack;
