//! Reply interpretation for the weather console.
//!
//! Takes the free-text reply produced by the chat backend and derives a
//! coarse confidence level and the city the answer talks about, then
//! records the exchange in a newest-first query history.
//!
//! Everything here is synchronous and total: unmatched text degrades to
//! `ConfidenceLevel::Low` / `City::Unknown`, never to an error.

pub mod city;
pub mod confidence;
pub mod history;
pub mod interpreter;
pub mod session;

// Re-export key types for convenience
pub use city::{CityExtractor, extract};
pub use confidence::{ConfidenceClassifier, classify};
pub use history::QueryHistory;
pub use interpreter::{Interpretation, PatternInterpreter, ReplyInterpreter};
pub use session::Session;
