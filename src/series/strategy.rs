// Granularity and label format per time range.

use crate::models::TimeRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Hour,
    Day,
}

pub const MS_PER_HOUR: i64 = 3_600_000;

/// Bucket label shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFormat {
    /// `14:00`
    HourMinute,
    /// `10/14 14:00`
    MonthDayHourMinute,
    /// `10/14`
    MonthDay,
}

impl LabelFormat {
    /// chrono strftime pattern.
    pub fn pattern(self) -> &'static str {
        match self {
            LabelFormat::HourMinute => "%H:%M",
            LabelFormat::MonthDayHourMinute => "%m/%d %H:%M",
            LabelFormat::MonthDay => "%m/%d",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategy {
    pub granularity: Granularity,
    pub label_format: LabelFormat,
}

pub fn select_strategy(range: TimeRange) -> Strategy {
    match range {
        TimeRange::Day => Strategy {
            granularity: Granularity::Hour,
            label_format: LabelFormat::HourMinute,
        },
        TimeRange::Week => Strategy {
            granularity: Granularity::Hour,
            label_format: LabelFormat::MonthDayHourMinute,
        },
        TimeRange::TwoWeeks | TimeRange::Month | TimeRange::Lifetime => Strategy {
            granularity: Granularity::Day,
            label_format: LabelFormat::MonthDay,
        },
    }
}
