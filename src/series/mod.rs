// Aggregation engine: raw samples for one server → bucketed chart series + stats.
// Pure and re-entrant; every intermediate map lives for one call.

pub mod bucket;
pub mod densify;
pub mod format;
pub mod reducer;
pub mod strategy;
pub mod summary;

use chrono::{FixedOffset, TimeZone};
use tracing::debug;

use crate::models::{ChartPoint, ChartSeries, Sample, TimeRange};
use format::format_label;
use strategy::{MS_PER_HOUR, select_strategy};

/// Runs one aggregation pass: bucket by the range's granularity, reduce each bucket,
/// densify (24h only), then summarize.
pub fn aggregate<Tz: TimeZone>(
    samples: &[Sample],
    server_id: &str,
    range: TimeRange,
    tz: &Tz,
) -> ChartSeries {
    let strategy = select_strategy(range);
    let buckets = bucket::assign(samples, server_id, strategy.granularity, tz);

    let mut points: Vec<ChartPoint> = buckets
        .buckets
        .iter()
        .filter_map(|(key, bucket)| {
            let value = reducer::reduce(&bucket.values)?;
            Some(ChartPoint {
                label: format_label(&key.local_start(), strategy.label_format),
                value,
                bucket_start: bucket.start_ms(key, tz),
            })
        })
        .collect();
    points.sort_by_key(|p| p.bucket_start);
    let bucket_count = points.len();

    if range == TimeRange::Day
        && let (Some(first), Some(last)) = (points.first(), points.last())
    {
        let boundary = first
            .bucket_start
            .max(last.bucket_start - (densify::DENSE_HOURS as i64 - 1) * MS_PER_HOUR);
        points = densify::densify(&points, boundary, strategy.label_format, tz);
    }

    let summary = summary::summarize(&points, samples, server_id, buckets.span(), tz);
    debug!(
        server_id,
        range = %range,
        samples = samples.len(),
        buckets = bucket_count,
        points = points.len(),
        "series aggregated"
    );

    ChartSeries {
        server_id: server_id.to_string(),
        range,
        points,
        summary,
    }
}

/// Zone the viewer reads labels in: the host's local zone or a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerZone {
    Local,
    Fixed(FixedOffset),
}

impl ViewerZone {
    /// `None` (or an offset chrono rejects) means the host's local zone.
    pub fn from_offset_minutes(minutes: Option<i32>) -> Self {
        minutes
            .and_then(|m| m.checked_mul(60))
            .and_then(FixedOffset::east_opt)
            .map_or(ViewerZone::Local, ViewerZone::Fixed)
    }

    pub fn aggregate(&self, samples: &[Sample], server_id: &str, range: TimeRange) -> ChartSeries {
        match self {
            ViewerZone::Local => aggregate(samples, server_id, range, &chrono::Local),
            ViewerZone::Fixed(offset) => aggregate(samples, server_id, range, offset),
        }
    }
}
