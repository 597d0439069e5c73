//! Composition of the two reply classifiers.

use serde::Serialize;
use wx_protocol::{City, ConfidenceLevel};

use crate::city::CityExtractor;
use crate::confidence::ConfidenceClassifier;

/// What the console shows about one reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub confidence: ConfidenceLevel,
    pub city: City,
}

/// Trait for engines that read a reply and produce an `Interpretation`.
pub trait ReplyInterpreter: Send + Sync {
    fn interpret(&self, reply: &str) -> Interpretation;

    /// Name of this interpreter (for logging).
    fn name(&self) -> &str;
}

/// Pattern-matching interpreter: confidence heuristics plus city extraction.
///
/// The two passes share no state and see the same input.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternInterpreter {
    confidence: ConfidenceClassifier,
    city: CityExtractor,
}

impl PatternInterpreter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReplyInterpreter for PatternInterpreter {
    fn interpret(&self, reply: &str) -> Interpretation {
        Interpretation {
            confidence: self.confidence.classify(reply),
            city: self.city.extract(reply),
        }
    }

    fn name(&self) -> &str {
        "pattern"
    }
}
