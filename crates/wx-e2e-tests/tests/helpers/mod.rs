//! Shared test harness for E2E integration tests.
//!
//! Runs a wiremock server standing in for the chat backend and a real
//! `Console` wired to it over HTTP.

#![allow(dead_code)]

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wx_console::{Console, ConsoleConfig, HttpReplySource};

/// End-to-end harness: mock backend + console talking to it.
pub struct TestHarness {
    /// Mock chat backend.
    pub server: MockServer,
    /// Console pointed at `server`.
    pub console: Console,
}

impl TestHarness {
    /// Start a mock backend with no routes and a console aimed at it.
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let config = ConsoleConfig {
            backend_url: server.uri(),
            timeout_secs: 2,
            log_json: false,
        };
        let source = HttpReplySource::new(&config).unwrap();
        Self {
            server,
            console: Console::new(Box::new(source)),
        }
    }

    /// Answer `question` with `reply`, as the real backend's `/chat` would.
    pub async fn mount_reply(&self, question: &str, reply: &str) {
        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(body_json(json!({ "message": question })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": reply })))
            .mount(&self.server)
            .await;
    }

    /// Fail every `/chat` request with `status`.
    pub async fn mount_status(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Number of requests the backend has seen.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0)
    }
}
