// Label and date-range rendering in the viewer's zone.

use chrono::{DateTime, NaiveDateTime, TimeZone};

use super::strategy::LabelFormat;

pub fn format_label(local: &NaiveDateTime, format: LabelFormat) -> String {
    local.format(format.pattern()).to_string()
}

/// Local wall-clock time for an epoch-ms timestamp. `None` when out of chrono's range.
pub fn to_local<Tz: TimeZone>(millis: i64, tz: &Tz) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis).map(|utc| utc.with_timezone(tz).naive_local())
}

/// e.g. `Oct 14`
pub fn short_month_day<Tz: TimeZone>(millis: i64, tz: &Tz) -> Option<String> {
    to_local(millis, tz).map(|local| local.format("%b %-d").to_string())
}

/// `"{first} - {last}"` using short month/day for both ends.
pub fn range_label<Tz: TimeZone>(first_ms: i64, last_ms: i64, tz: &Tz) -> Option<String> {
    let first = short_month_day(first_ms, tz)?;
    let last = short_month_day(last_ms, tz)?;
    Some(format!("{} - {}", first, last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    // 2026-10-01T00:00:00Z
    const OCT_1: i64 = 1_790_812_800_000;

    #[test]
    fn range_label_spans_first_and_last_day() {
        let last = OCT_1 + 13 * 24 * 3_600_000 + 5 * 3_600_000;
        assert_eq!(
            range_label(OCT_1, last, &Utc).as_deref(),
            Some("Oct 1 - Oct 14")
        );
    }

    #[test]
    fn short_month_day_uses_viewer_offset() {
        let west = FixedOffset::west_opt(3600).unwrap();
        assert_eq!(short_month_day(OCT_1, &west).as_deref(), Some("Sep 30"));
    }
}
