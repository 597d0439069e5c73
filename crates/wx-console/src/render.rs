//! Plain-text rendering of answers and the recent-queries list.

use wx_protocol::HistoryRecord;

use crate::console::Answer;

/// Static card shown under every answer.
pub const RELIABILITY_NOTE: &str = "\
Why this answer is reliable?
• The city was clearly identified from your question
• AI invoked a live weather tool
• Response is generated using real-time data
";

/// Insight card for one answer (city, reply text, confidence badge),
/// followed by the reliability card.
pub fn render_answer(answer: &Answer) -> String {
    format!(
        "Weather Insight\nCity: {}\n{}\nConfidence: {}\n\n{}",
        answer.interpretation.city,
        answer.reply,
        answer.interpretation.confidence.badge_label(),
        RELIABILITY_NOTE,
    )
}

/// One recent-queries line: `• <question> → <city> (<HH:MM:SS>)`.
pub fn render_history_line(record: &HistoryRecord) -> String {
    format!(
        "• {} → {} ({})",
        record.question(),
        record.city(),
        record.local_time_label()
    )
}

/// Recent-queries list in the order given (newest first from `QueryHistory`).
/// Empty input renders nothing.
pub fn render_history<'a>(records: impl IntoIterator<Item = &'a HistoryRecord>) -> String {
    let lines: Vec<String> = records.into_iter().map(render_history_line).collect();
    if lines.is_empty() {
        return String::new();
    }
    format!("Your Recent Queries\n{}\n", lines.join("\n"))
}
