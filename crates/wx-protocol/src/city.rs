use serde::{Deserialize, Serialize};

/// Sentinel shown when no city could be extracted from a reply.
pub const UNKNOWN_CITY: &str = "Unknown";

/// City named in a reply, or the unknown sentinel.
///
/// Purely syntactic: nothing here checks that the name is a real place.
/// A `Named` value is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum City {
    Named(String),
    Unknown,
}

impl City {
    /// Build a city from raw captured text, trimming surrounding whitespace.
    /// Blank input collapses to `Unknown`.
    pub fn named(name: impl AsRef<str>) -> Self {
        let name = name.as_ref().trim();
        if name.is_empty() {
            Self::Unknown
        } else {
            Self::Named(name.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Unknown => UNKNOWN_CITY,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Named(_))
    }
}

impl From<String> for City {
    fn from(value: String) -> Self {
        if value == UNKNOWN_CITY {
            Self::Unknown
        } else {
            Self::named(value)
        }
    }
}

impl From<City> for String {
    fn from(value: City) -> Self {
        match value {
            City::Named(name) => name,
            City::Unknown => UNKNOWN_CITY.to_string(),
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_trims_whitespace() {
        assert_eq!(City::named("  New York "), City::Named("New York".into()));
    }

    #[test]
    fn blank_name_is_unknown() {
        assert_eq!(City::named(""), City::Unknown);
        assert_eq!(City::named("   "), City::Unknown);
    }

    #[test]
    fn unknown_displays_sentinel() {
        assert_eq!(City::Unknown.to_string(), "Unknown");
        assert!(!City::Unknown.is_known());
        assert!(City::named("Pune").is_known());
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&City::named("Pune")).unwrap();
        assert_eq!(json, r#""Pune""#);
        let json = serde_json::to_string(&City::Unknown).unwrap();
        assert_eq!(json, r#""Unknown""#);
    }

    #[test]
    fn deserializes_sentinel_to_unknown() {
        let city: City = serde_json::from_str(r#""Unknown""#).unwrap();
        assert_eq!(city, City::Unknown);
        let city: City = serde_json::from_str(r#""Tokyo""#).unwrap();
        assert_eq!(city, City::Named("Tokyo".into()));
    }
}
