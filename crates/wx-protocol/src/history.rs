use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::city::City;

/// One past query: what was asked, which city the answer was about, and when.
///
/// Fields are private; a record cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    question: String,
    city: City,
    captured_at: DateTime<Utc>,
}

impl HistoryRecord {
    pub fn new(question: impl Into<String>, city: City, captured_at: DateTime<Utc>) -> Self {
        Self {
            question: question.into(),
            city,
            captured_at,
        }
    }

    /// The question exactly as submitted.
    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn city(&self) -> &City {
        &self.city
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Local time of day for display, e.g. "14:05:09".
    pub fn local_time_label(&self) -> String {
        self.captured_at
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string()
    }
}
