// Shared test helpers
#![allow(dead_code)]

use queuewatch::models::{QueueReading, Sample};
use std::collections::BTreeMap;

/// 2026-10-01T00:00:00Z
pub const T0: i64 = 1_790_812_800_000;
pub const HOUR: i64 = 3_600_000;
pub const MINUTE: i64 = 60_000;

pub fn reading(position: u32) -> QueueReading {
    QueueReading {
        position,
        last_updated: 0,
        region: "eu-west".into(),
    }
}

pub fn sample(timestamp: i64, readings: &[(&str, u32)]) -> Sample {
    let data: BTreeMap<String, QueueReading> = readings
        .iter()
        .map(|(id, pos)| (id.to_string(), reading(*pos)))
        .collect();
    Sample { timestamp, data }
}

/// One sample per (offset, position) for server "A".
pub fn series_a(points: &[(i64, u32)]) -> Vec<Sample> {
    points
        .iter()
        .map(|&(ts, pos)| sample(ts, &[("A", pos)]))
        .collect()
}
