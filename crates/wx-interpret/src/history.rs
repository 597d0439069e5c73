//! Newest-first ledger of past queries.

use chrono::{DateTime, Utc};

use wx_protocol::{City, HistoryRecord};

/// Append-only, newest-first sequence of `HistoryRecord`s.
///
/// Records are stored oldest-first and read back in reverse, so appending
/// is O(1). Nothing is ever removed, replaced or reordered, and there is no
/// capacity bound: the ledger lives exactly as long as the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryHistory {
    records: Vec<HistoryRecord>,
}

impl QueryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a query at the front of the history.
    pub fn append(&mut self, question: impl Into<String>, city: City, captured_at: DateTime<Utc>) {
        self.records.push(HistoryRecord::new(question, city, captured_at));
    }

    /// Snapshot of every record, newest first.
    pub fn all(&self) -> Vec<HistoryRecord> {
        self.iter().cloned().collect()
    }

    /// Borrowing iterator, newest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryRecord> + ExactSizeIterator {
        self.records.iter().rev()
    }

    /// The most recently appended record.
    pub fn latest(&self) -> Option<&HistoryRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t(offset_secs: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap() + Duration::seconds(offset_secs)
    }

    #[test]
    fn starts_empty() {
        let history = QueryHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.all().is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn all_is_newest_first() {
        let mut history = QueryHistory::new();
        history.append("first", City::named("Pune"), t(0));
        history.append("second", City::Unknown, t(1));
        history.append("third", City::named("Tokyo"), t(2));

        let questions: Vec<_> = history.all().iter().map(|r| r.question().to_string()).collect();
        assert_eq!(questions, ["third", "second", "first"]);
        assert_eq!(history.latest().unwrap().question(), "third");
    }

    #[test]
    fn n_appends_give_n_records() {
        let mut history = QueryHistory::new();
        for i in 0..25 {
            history.append(format!("q{i}"), City::Unknown, t(i));
            assert_eq!(history.len(), (i + 1) as usize);
        }
        assert_eq!(history.all().len(), 25);
        assert_eq!(history.iter().len(), 25);
    }

    #[test]
    fn earlier_records_unchanged_by_later_appends() {
        let mut history = QueryHistory::new();
        history.append("weather in Pune today?", City::named("Pune"), t(0));
        let before = history.all();

        history.append("and Tokyo?", City::named("Tokyo"), t(5));
        let after = history.all();

        assert_eq!(after.len(), 2);
        assert_eq!(after[1], before[0]);
    }

    #[test]
    fn repeated_questions_are_not_deduplicated() {
        let mut history = QueryHistory::new();
        history.append("weather in Pune today?", City::named("Pune"), t(0));
        history.append("weather in Pune today?", City::named("Pune"), t(0));
        assert_eq!(history.len(), 2);
        let all = history.all();
        assert_eq!(all[0], all[1]);
    }

    #[test]
    fn all_is_idempotent() {
        let mut history = QueryHistory::new();
        history.append("a", City::Unknown, t(0));
        history.append("b", City::named("Lima"), t(1));
        assert_eq!(history.all(), history.all());
    }

    #[test]
    fn iter_reversed_is_insertion_order() {
        let mut history = QueryHistory::new();
        history.append("a", City::Unknown, t(0));
        history.append("b", City::Unknown, t(1));
        let oldest_first: Vec<_> = history.iter().rev().map(|r| r.question()).collect();
        assert_eq!(oldest_first, ["a", "b"]);
    }
}
