// User-selected lookback window. Drives both the upstream query and bucket granularity.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum TimeRange {
    #[default]
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "14d")]
    TwoWeeks,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "lifetime")]
    Lifetime,
}

impl TimeRange {
    pub const ALL: [TimeRange; 5] = [
        TimeRange::Day,
        TimeRange::Week,
        TimeRange::TwoWeeks,
        TimeRange::Month,
        TimeRange::Lifetime,
    ];

    /// Lookback window in hours; `None` for lifetime (unbounded).
    pub fn lookback_hours(self) -> Option<u32> {
        match self {
            TimeRange::Day => Some(24),
            TimeRange::Week => Some(168),
            TimeRange::TwoWeeks => Some(336),
            TimeRange::Month => Some(720),
            TimeRange::Lifetime => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::Day => "24h",
            TimeRange::Week => "7d",
            TimeRange::TwoWeeks => "14d",
            TimeRange::Month => "30d",
            TimeRange::Lifetime => "lifetime",
        }
    }

    /// Parse a wire name. Unrecognized names fall back to 7d.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "24h" => TimeRange::Day,
            "7d" => TimeRange::Week,
            "14d" => TimeRange::TwoWeeks,
            "30d" => TimeRange::Month,
            "lifetime" => TimeRange::Lifetime,
            _ => TimeRange::Week,
        }
    }
}

impl From<String> for TimeRange {
    fn from(s: String) -> Self {
        Self::parse_lenient(&s)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
