//! Console driver: one question at a time, end to end.
//!
//! Fetches the reply from the backend, then hands question and reply to the
//! interpretation session. A question is fully processed before the next is
//! accepted, so history appends are serialized by construction.

use chrono::Utc;
use serde::Serialize;

use wx_interpret::{Interpretation, QueryHistory, Session};

use crate::error::ConsoleResult;
use crate::source::ReplySource;

/// Result of one submitted question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    /// Reply text exactly as the backend returned it.
    pub reply: String,
    pub interpretation: Interpretation,
}

pub struct Console {
    source: Box<dyn ReplySource>,
    session: Session,
}

impl Console {
    pub fn new(source: Box<dyn ReplySource>) -> Self {
        Self::with_session(source, Session::new())
    }

    pub fn with_session(source: Box<dyn ReplySource>, session: Session) -> Self {
        Self { source, session }
    }

    /// Ask the backend and record the interpreted answer.
    ///
    /// Blank questions are ignored without contacting the backend.
    /// Backend failures are returned and leave the history untouched.
    pub async fn submit(&mut self, question: &str) -> ConsoleResult<Option<Answer>> {
        if question.trim().is_empty() {
            return Ok(None);
        }

        tracing::info!(source = self.source.name(), "submitting question");
        let reply = self.source.ask(question).await?;

        let Some(interpretation) = self.session.record(question, &reply, Utc::now()) else {
            return Ok(None);
        };
        tracing::info!(
            confidence = %interpretation.confidence,
            city = %interpretation.city,
            history_len = self.session.history().len(),
            "answer recorded"
        );

        Ok(Some(Answer {
            reply,
            interpretation,
        }))
    }

    /// Newest-first history of this session.
    pub fn history(&self) -> &QueryHistory {
        self.session.history()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
