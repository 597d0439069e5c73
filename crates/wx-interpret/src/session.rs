//! Per-session orchestration context.
//!
//! Owns the query history and the last interpretation. The caller hands in
//! a question and the reply already received for it; the session classifies
//! the reply, extracts the city and records the exchange.

use chrono::{DateTime, Utc};

use crate::history::QueryHistory;
use crate::interpreter::{Interpretation, PatternInterpreter, ReplyInterpreter};

pub struct Session {
    interpreter: Box<dyn ReplyInterpreter>,
    history: QueryHistory,
    last: Option<Interpretation>,
}

impl Session {
    /// Empty session using the pattern interpreter.
    pub fn new() -> Self {
        Self::with_interpreter(Box::new(PatternInterpreter::new()))
    }

    pub fn with_interpreter(interpreter: Box<dyn ReplyInterpreter>) -> Self {
        Self {
            interpreter,
            history: QueryHistory::new(),
            last: None,
        }
    }

    /// Interpret `reply` and record it against `question`.
    ///
    /// Returns `None` and records nothing when the question is blank.
    /// The question is stored as submitted, untrimmed.
    pub fn record(
        &mut self,
        question: &str,
        reply: &str,
        captured_at: DateTime<Utc>,
    ) -> Option<Interpretation> {
        if question.trim().is_empty() {
            tracing::debug!("ignoring blank question");
            return None;
        }

        let interpretation = self.interpreter.interpret(reply);
        tracing::debug!(
            interpreter = self.interpreter.name(),
            confidence = %interpretation.confidence,
            city = %interpretation.city,
            "reply interpreted"
        );

        self.history.append(question, interpretation.city.clone(), captured_at);
        self.last = Some(interpretation.clone());
        Some(interpretation)
    }

    /// Same as [`Session::record`], stamped with the current time.
    pub fn record_now(&mut self, question: &str, reply: &str) -> Option<Interpretation> {
        self.record(question, reply, Utc::now())
    }

    pub fn history(&self) -> &QueryHistory {
        &self.history
    }

    /// Interpretation of the most recently recorded reply.
    pub fn last(&self) -> Option<&Interpretation> {
        self.last.as_ref()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
