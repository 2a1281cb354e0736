//! Reusable test helpers for HTTP integration tests.
//!
//! Provides `TestApp` for sending requests through the full axum router with a
//! `wiremock` server standing in for the Discord webhook.
//!
//! ## Test Servers
//!
//! Use [`spawn_test_server()`] when a request has to travel over a real socket
//! instead of `tower::ServiceExt::oneshot`.
#![allow(dead_code)]

use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{self, header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use relay_server::api::{create_router, AppState};
use relay_server::config::Config;
use relay_server::relay::DiscordMessage;
use tokio::task::JoinHandle;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mock Discord webhook listens on.
pub const WEBHOOK_PATH: &str = "/api/webhooks/123/token";

/// Channel the test config relays from.
pub const TEST_CHANNEL: &str = "C0TEST";

// ============================================================================
// Test App
// ============================================================================

/// A test application wrapping the full axum router.
pub struct TestApp {
    pub router: Router,
    pub config: Config,
    /// Mock Discord webhook. Mount expectations before sending requests.
    pub discord: MockServer,
}

impl TestApp {
    /// Create a test app relaying `TEST_CHANNEL` with no prefix.
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Create a test app, letting the caller adjust the config.
    ///
    /// The webhook URL is always pointed at the mock server.
    pub async fn with_config(adjust: impl FnOnce(&mut Config)) -> Self {
        let discord = MockServer::start().await;

        let mut config = Config::default_for_test();
        config.slack_channel_id = TEST_CHANNEL.into();
        adjust(&mut config);
        config.discord_webhook_url = format!("{}{WEBHOOK_PATH}", discord.uri());

        let state = AppState::new(config.clone(), reqwest::Client::new());
        let router = create_router(state);

        Self {
            router,
            config,
            discord,
        }
    }

    /// Expect exactly `times` webhook calls, each answered with `status`.
    ///
    /// Verified when the app (and its mock server) is dropped.
    pub async fn expect_webhook_calls(&self, times: u64, status: u16) {
        Mock::given(method("POST"))
            .and(path(WEBHOOK_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string("ok"))
            .expect(times)
            .mount(&self.discord)
            .await;
    }

    /// Build an HTTP request with the given method and URI.
    pub fn request(method: Method, uri: &str) -> http::request::Builder {
        Request::builder().method(method).uri(uri)
    }

    /// Send a request through the router via `tower::ServiceExt::oneshot`.
    pub async fn oneshot(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("oneshot request failed")
    }

    /// POST a raw body to `/event`.
    pub async fn post_event(&self, body: impl Into<Body>) -> Response<Body> {
        let req = Self::request(Method::POST, "/event")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .expect("valid request");
        self.oneshot(req).await
    }

    /// POST a JSON value to `/event`.
    pub async fn post_json(&self, value: &serde_json::Value) -> Response<Body> {
        self.post_event(value.to_string()).await
    }

    /// Messages the mock webhook received, in arrival order.
    pub async fn relayed(&self) -> Vec<DiscordMessage> {
        self.discord
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| r.body_json::<DiscordMessage>().expect("webhook body is a DiscordMessage"))
            .collect()
    }
}

// ============================================================================
// Payload builders
// ============================================================================

/// An `event_callback` wrapping a `message` event.
pub fn message_event(channel: &str, text: &str) -> serde_json::Value {
    serde_json::json!({
        "token": "verification-token",
        "team_id": "T0001",
        "api_app_id": "A0001",
        "type": "event_callback",
        "event_id": "Ev0001",
        "event_time": 1_700_000_000,
        "event": {
            "type": "message",
            "channel": channel,
            "user": "U0001",
            "text": text,
            "ts": "1700000000.000100",
        },
    })
}

/// A `url_verification` handshake.
pub fn challenge_event(challenge: &str) -> serde_json::Value {
    serde_json::json!({
        "token": "verification-token",
        "challenge": challenge,
        "type": "url_verification",
    })
}

// ============================================================================
// Test Server
// ============================================================================

/// A running test server bound to a random port.
pub struct TestServer {
    /// Server address (127.0.0.1:PORT).
    pub addr: SocketAddr,
    /// Base URL for HTTP requests (e.g., `http://127.0.0.1:12345`).
    pub url: String,
    /// Handle to the server task for cleanup.
    _handle: JoinHandle<()>,
}

/// Spawn a real HTTP server on a random port.
pub async fn spawn_test_server(router: Router) -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to get local addr");
    let url = format!("http://{addr}");

    let handle = tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server failed");
    });

    TestServer {
        addr,
        url,
        _handle: handle,
    }
}

/// An address nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to get local addr");
    drop(listener);
    format!("http://{addr}{WEBHOOK_PATH}")
}

// ============================================================================
// Response helpers
// ============================================================================

/// Collect a response body into bytes.
pub async fn body_to_bytes(response: Response<Body>) -> bytes::Bytes {
    response
        .into_body()
        .collect()
        .await
        .expect("Failed to collect response body")
        .to_bytes()
}

/// Collect a response body and parse it as JSON.
pub async fn body_to_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_to_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        let preview = String::from_utf8_lossy(&bytes);
        panic!("Failed to parse response as JSON: {e}\nBody: {preview}")
    })
}
