// 24h range only: fill missing hours by linear interpolation between known neighbours.

use chrono::TimeZone;

use super::format::{format_label, to_local};
use super::strategy::{LabelFormat, MS_PER_HOUR};
use crate::models::ChartPoint;

pub const DENSE_HOURS: usize = 24;

/// Lays `points` onto 24 hourly slots starting at `first_hour_ms`. Existing points are
/// kept as-is; a missing slot gets the value interpolated by slot distance between the
/// nearest known slots on either side (truncating toward zero). Slots without a known
/// neighbour on both sides are left out, as are points outside the 24 slots.
pub fn densify<Tz: TimeZone>(
    points: &[ChartPoint],
    first_hour_ms: i64,
    format: LabelFormat,
    tz: &Tz,
) -> Vec<ChartPoint> {
    let mut slots: Vec<Option<&ChartPoint>> = vec![None; DENSE_HOURS];
    for p in points {
        let offset = p.bucket_start - first_hour_ms;
        if offset < 0 {
            continue;
        }
        let slot = (offset / MS_PER_HOUR) as usize;
        if slot < DENSE_HOURS && slots[slot].is_none() {
            slots[slot] = Some(p);
        }
    }

    let mut out = Vec::with_capacity(DENSE_HOURS);
    for i in 0..DENSE_HOURS {
        if let Some(p) = slots[i] {
            out.push(p.clone());
            continue;
        }
        let before = slots[..i]
            .iter()
            .rposition(Option::is_some)
            .and_then(|b| slots[b].map(|p| (b, p.value)));
        let after = slots[i + 1..]
            .iter()
            .position(Option::is_some)
            .and_then(|j| slots[i + 1 + j].map(|p| (i + 1 + j, p.value)));
        let (Some((b, bv)), Some((a, av))) = (before, after) else {
            continue;
        };

        let bucket_start = first_hour_ms + i as i64 * MS_PER_HOUR;
        let Some(local) = to_local(bucket_start, tz) else {
            continue;
        };
        out.push(ChartPoint {
            label: format_label(&local, format),
            value: interpolate(bv, av, i - b, a - b),
            bucket_start,
        });
    }
    out
}

/// `before + (after - before) * step / span`, truncating toward zero.
fn interpolate(before: u32, after: u32, step: usize, span: usize) -> u32 {
    let (b, a) = (i64::from(before), i64::from(after));
    let v = b + (a - b) * step as i64 / span as i64;
    v as u32
}
