// Engine output: ordered chart points plus summary stats.

use serde::{Deserialize, Serialize};

use super::TimeRange;

/// One bucket on the chart. `bucket_start` (epoch ms) and the index in the series
/// identify a point; labels may repeat across years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub label: String,
    pub value: u32,
    pub bucket_start: i64,
}

/// All fields are `None` when no sample carried the viewed server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    pub current: Option<u32>,
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub average: Option<u32>,
    pub range_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub server_id: String,
    pub range: TimeRange,
    pub points: Vec<ChartPoint>,
    pub summary: SeriesSummary,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the point whose bucket time is closest to `bucket_ms`.
    /// Ties go to the earlier point.
    pub fn nearest_point(&self, bucket_ms: i64) -> Option<usize> {
        if self.points.is_empty() {
            return None;
        }
        let idx = self.points.partition_point(|p| p.bucket_start < bucket_ms);
        if idx == 0 {
            return Some(0);
        }
        if idx == self.points.len() {
            return Some(idx - 1);
        }
        let before = bucket_ms - self.points[idx - 1].bucket_start;
        let after = self.points[idx].bucket_start - bucket_ms;
        if after < before { Some(idx) } else { Some(idx - 1) }
    }

    /// Maps a pointer position along the x axis (0.0 left edge, 1.0 right edge) to a
    /// point index. Points are evenly spaced on the chart, so this is by index.
    pub fn point_at_fraction(&self, fraction: f64) -> Option<usize> {
        if self.points.is_empty() {
            return None;
        }
        let f = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let last = (self.points.len() - 1) as f64;
        Some((f * last).round() as usize)
    }
}
