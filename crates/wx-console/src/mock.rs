//! Mock reply source for testing: serves canned replies by question.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{ConsoleError, ConsoleResult};
use crate::source::ReplySource;

/// A mock backend that answers from a lookup table.
///
/// Unknown questions get the default reply. Every question asked is
/// recorded for assertions. Thread-safe via `Mutex` (fine for test contexts).
pub struct MockReplySource {
    replies: HashMap<String, String>,
    default_reply: String,
    fail_with_status: Option<u16>,
    asked: Mutex<Vec<String>>,
}

impl MockReplySource {
    pub fn new(default_reply: impl Into<String>) -> Self {
        Self {
            replies: HashMap::new(),
            default_reply: default_reply.into(),
            fail_with_status: None,
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Add a canned reply for an exact question.
    pub fn add_reply(&mut self, question: impl Into<String>, reply: impl Into<String>) {
        self.replies.insert(question.into(), reply.into());
    }

    /// A mock that fails every request with the given HTTP status.
    pub fn failing(status: u16) -> Self {
        Self {
            fail_with_status: Some(status),
            ..Self::new("")
        }
    }

    /// Create a mock with replies shaped like the real backend's.
    pub fn with_weather_sample() -> Self {
        let mut m = Self::new("Please mention a city name in your question.");
        m.add_reply("weather in Pune today?", "It is 30°C in Pune today.");
        m.add_reply(
            "How is New York?",
            "The weather in New York is sunny with a light breeze.",
        );
        m.add_reply(
            "temperature in Tokyo",
            "It is 25°C in Tokyo currently, with clear skies.",
        );
        m
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplySource for MockReplySource {
    async fn ask(&self, question: &str) -> ConsoleResult<String> {
        self.asked.lock().unwrap().push(question.to_string());
        if let Some(status) = self.fail_with_status {
            return Err(ConsoleError::Status(status));
        }
        Ok(self
            .replies
            .get(question)
            .cloned()
            .unwrap_or_else(|| self.default_reply.clone()))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
