// Derived stats: min/max/average over the finished series, current from raw samples.

use chrono::TimeZone;

use super::format::range_label;
use crate::models::{ChartPoint, Sample, SeriesSummary};

/// min/max/average over the finished series; the average truncates toward zero.
pub fn summarize<Tz: TimeZone>(
    points: &[ChartPoint],
    samples: &[Sample],
    server_id: &str,
    span: Option<(i64, i64)>,
    tz: &Tz,
) -> SeriesSummary {
    let values: Vec<u32> = points.iter().map(|p| p.value).collect();
    let average = if values.is_empty() {
        None
    } else {
        let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
        Some((sum / values.len() as u64) as u32)
    };

    SeriesSummary {
        current: current_position(samples, server_id),
        min: values.iter().copied().min(),
        max: values.iter().copied().max(),
        average,
        range_label: span.and_then(|(first, last)| range_label(first, last, tz)),
    }
}

/// Position from the latest raw sample carrying `server_id`. On equal timestamps
/// the later sample in input order wins.
pub fn current_position(samples: &[Sample], server_id: &str) -> Option<u32> {
    samples
        .iter()
        .filter_map(|s| s.reading(server_id).map(|r| (s.timestamp, r.position)))
        .fold(None, |best: Option<(i64, u32)>, (ts, pos)| match best {
            Some((best_ts, _)) if best_ts > ts => best,
            _ => Some((ts, pos)),
        })
        .map(|(_, pos)| pos)
}
