//! Confidence heuristics over reply text.
//!
//! Ordered, first match wins:
//! 1. a Celsius reading (`°C`, case-sensitive) → high
//! 2. the word "weather" in any casing → medium
//! 3. anything else → low

use wx_protocol::ConfidenceLevel;

const CELSIUS_MARKER: &str = "°C";
const TOPIC_KEYWORD: &str = "weather";

/// Stateless classifier mapping a reply to a `ConfidenceLevel`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfidenceClassifier;

impl ConfidenceClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, reply: &str) -> ConfidenceLevel {
        classify(reply)
    }
}

/// Classify a reply. Total over all strings, including the empty one.
pub fn classify(reply: &str) -> ConfidenceLevel {
    if reply.contains(CELSIUS_MARKER) {
        return ConfidenceLevel::High;
    }
    if reply.to_lowercase().contains(TOPIC_KEYWORD) {
        return ConfidenceLevel::Medium;
    }
    ConfidenceLevel::Low
}
