use serde::{Deserialize, Serialize};

/// Reply text the backend sends when its own handler fails.
/// It is still an ordinary reply and is interpreted like any other.
pub const SERVER_ERROR_REPLY: &str = "Server error occurred.";

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}
