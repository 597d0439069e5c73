//! City extraction from reply text.
//!
//! Finds the first "in" followed by whitespace, then captures the shortest
//! run of ASCII letters and spaces that is directly followed by one of a
//! closed set of boundary markers: " is", " with", " today", " currently",
//! "." or ",". The "in" may close a longer word ("rain in", "Within").
//! Keyword and boundary words fold ASCII case only; the capture class is
//! plain ASCII and the captured text keeps its casing.
//!
//! A city named without one of those boundaries after it is reported as
//! `City::Unknown`. That is the intended reach of this matcher.

use regex::Regex;
use std::sync::LazyLock;

use wx_protocol::City;

static RE_CITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u:in)\s+([A-Za-z ]+?)(?:\s+(?i-u:is|with|today|currently)|\.|,)").unwrap()
});

/// Stateless extractor mapping a reply to a `City`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CityExtractor;

impl CityExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, reply: &str) -> City {
        extract(reply)
    }
}

/// Extract the city from a reply. Only the first match is considered.
pub fn extract(reply: &str) -> City {
    match RE_CITY.captures(reply) {
        Some(caps) => City::named(&caps[1]),
        None => City::Unknown,
    }
}
