//! Reply sources: where the console gets the backend's answer text.
//!
//! The backend runs the tool-calling language model; from here it is just
//! `POST /chat {"message": ...}` → `{"reply": ...}`.

use async_trait::async_trait;
use std::time::Duration;

use wx_protocol::{ChatReply, ChatRequest};

use crate::config::ConsoleConfig;
use crate::error::{ConsoleError, ConsoleResult};

/// Abstraction over the chat backend.
///
/// Enables mocking in tests and swapping the transport.
#[async_trait]
pub trait ReplySource: Send + Sync {
    /// Ask `question` and return the full reply text.
    async fn ask(&self, question: &str) -> ConsoleResult<String>;

    /// Name of this source (for logging).
    fn name(&self) -> &str;
}

/// Client for the HTTP chat backend.
pub struct HttpReplySource {
    client: reqwest::Client,
    url: String,
}

impl HttpReplySource {
    pub fn new(config: &ConsoleConfig) -> ConsoleResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConsoleError::Client(e.to_string()))?;
        Ok(Self {
            client,
            url: config.chat_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ReplySource for HttpReplySource {
    async fn ask(&self, question: &str) -> ConsoleResult<String> {
        let body = ChatRequest::new(question);

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, url = %self.url, "chat request failed");
                ConsoleError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "chat backend returned non-200");
            return Err(ConsoleError::Status(status.as_u16()));
        }

        let chat: ChatReply = response.json().await.map_err(|e| {
            tracing::warn!(error = %e, "failed to parse chat response body");
            ConsoleError::Decode(e.to_string())
        })?;

        tracing::debug!(reply_len = chat.reply.len(), "chat reply received");
        Ok(chat.reply)
    }

    fn name(&self) -> &str {
        "http"
    }
}
