//! Console error types.

use thiserror::Error;

/// Errors from talking to the chat backend.
///
/// Interpretation itself cannot fail; only the exchange that produces the
/// reply can.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("HTTP client setup failed: {0}")]
    Client(String),

    #[error("backend request failed: {0}")]
    Transport(String),

    #[error("backend returned HTTP {0}")]
    Status(u16),

    #[error("invalid backend response: {0}")]
    Decode(String),
}

/// Convenience alias for console results.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
