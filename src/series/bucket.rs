// Group raw positions for one server into hour or day buckets (viewer-local time).

use std::collections::BTreeMap;

use chrono::{NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike};
use tracing::debug;

use super::format::to_local;
use super::strategy::Granularity;
use crate::models::Sample;

/// Local wall-clock start of a bucket. One pass only ever produces one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BucketKey {
    Hour(NaiveDateTime),
    Day(NaiveDateTime),
}

impl BucketKey {
    pub fn truncate(local: NaiveDateTime, granularity: Granularity) -> Self {
        let midnight = local.date().and_time(NaiveTime::MIN);
        match granularity {
            Granularity::Hour => {
                BucketKey::Hour(midnight + TimeDelta::hours(i64::from(local.hour())))
            }
            Granularity::Day => BucketKey::Day(midnight),
        }
    }

    pub fn local_start(&self) -> NaiveDateTime {
        match self {
            BucketKey::Hour(t) | BucketKey::Day(t) => *t,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    /// Raw positions in input order.
    pub values: Vec<u32>,
    /// Earliest raw timestamp that landed here.
    pub first_raw_ms: i64,
}

impl Bucket {
    /// Epoch ms of the bucket's local start. Uses the earliest raw timestamp when the
    /// local start does not exist in `tz` (DST gap).
    pub fn start_ms<Tz: TimeZone>(&self, key: &BucketKey, tz: &Tz) -> i64 {
        tz.from_local_datetime(&key.local_start())
            .earliest()
            .map(|dt| dt.timestamp_millis())
            .unwrap_or(self.first_raw_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    pub buckets: BTreeMap<BucketKey, Bucket>,
    /// Min raw timestamp among samples carrying the server.
    pub first_ms: Option<i64>,
    /// Max raw timestamp among samples carrying the server.
    pub last_ms: Option<i64>,
}

impl Buckets {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn span(&self) -> Option<(i64, i64)> {
        Some((self.first_ms?, self.last_ms?))
    }
}

/// Samples without a reading for `server_id` are skipped.
pub fn assign<Tz: TimeZone>(
    samples: &[Sample],
    server_id: &str,
    granularity: Granularity,
    tz: &Tz,
) -> Buckets {
    let mut out = Buckets::default();
    for sample in samples {
        let Some(reading) = sample.reading(server_id) else {
            continue;
        };
        let ts = sample.timestamp;
        let Some(local) = to_local(ts, tz) else {
            debug!(timestamp = ts, "sample timestamp out of range, skipped");
            continue;
        };
        let key = BucketKey::truncate(local, granularity);
        let bucket = out.buckets.entry(key).or_insert_with(|| Bucket {
            values: Vec::new(),
            first_raw_ms: ts,
        });
        bucket.values.push(reading.position);
        bucket.first_raw_ms = bucket.first_raw_ms.min(ts);

        out.first_ms = Some(out.first_ms.map_or(ts, |m| m.min(ts)));
        out.last_ms = Some(out.last_ms.map_or(ts, |m| m.max(ts)));
    }
    out
}
