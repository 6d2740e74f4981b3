// Bucket assignment: server filtering, hour/day truncation, span tracking

mod common;

use chrono::{FixedOffset, NaiveDate, Utc};
use common::*;
use queuewatch::series::bucket::{BucketKey, assign};
use queuewatch::series::strategy::Granularity;

fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn sample_without_server_contributes_nothing() {
    let samples = vec![sample(T0, &[("B", 5)]), sample(T0 + HOUR, &[("C", 7)])];
    let buckets = assign(&samples, "A", Granularity::Hour, &Utc);
    assert!(buckets.is_empty());
    assert_eq!(buckets.span(), None);
}

#[test]
fn hour_buckets_zero_out_minutes() {
    let samples = series_a(&[
        (T0 + 10 * MINUTE, 4),
        (T0 + 50 * MINUTE, 6),
        (T0 + 61 * MINUTE, 9),
    ]);
    let buckets = assign(&samples, "A", Granularity::Hour, &Utc);
    let keys: Vec<_> = buckets.buckets.keys().copied().collect();
    assert_eq!(
        keys,
        vec![
            BucketKey::Hour(local(2026, 10, 1, 0, 0)),
            BucketKey::Hour(local(2026, 10, 1, 1, 0)),
        ]
    );
    let first = &buckets.buckets[&keys[0]];
    assert_eq!(first.values, vec![4, 6]);
    assert_eq!(first.first_raw_ms, T0 + 10 * MINUTE);
    assert_eq!(first.start_ms(&keys[0], &Utc), T0);
}

#[test]
fn day_buckets_follow_viewer_zone() {
    let samples = series_a(&[(T0 - 30 * MINUTE, 1)]);

    let utc = assign(&samples, "A", Granularity::Day, &Utc);
    assert_eq!(
        utc.buckets.keys().next(),
        Some(&BucketKey::Day(local(2026, 9, 30, 0, 0)))
    );

    let plus_one = FixedOffset::east_opt(3600).unwrap();
    let shifted = assign(&samples, "A", Granularity::Day, &plus_one);
    let key = *shifted.buckets.keys().next().unwrap();
    assert_eq!(key, BucketKey::Day(local(2026, 10, 1, 0, 0)));
    assert_eq!(shifted.buckets[&key].start_ms(&key, &plus_one), T0 - HOUR);
}

#[test]
fn span_covers_only_samples_with_the_server() {
    let samples = vec![
        sample(T0 - HOUR, &[("B", 1)]),
        sample(T0 + 5 * HOUR, &[("A", 3)]),
        sample(T0, &[("A", 2), ("B", 1)]),
        sample(T0 + 9 * HOUR, &[("B", 1)]),
    ];
    let buckets = assign(&samples, "A", Granularity::Hour, &Utc);
    assert_eq!(buckets.span(), Some((T0, T0 + 5 * HOUR)));
    assert_eq!(buckets.buckets.len(), 2);
}

#[test]
fn bucket_values_keep_input_order() {
    let samples = series_a(&[(T0 + 30 * MINUTE, 8), (T0 + 5 * MINUTE, 3), (T0 + 45 * MINUTE, 5)]);
    let buckets = assign(&samples, "A", Granularity::Hour, &Utc);
    let bucket = buckets.buckets.values().next().unwrap();
    assert_eq!(bucket.values, vec![8, 3, 5]);
    assert_eq!(bucket.first_raw_ms, T0 + 5 * MINUTE);
}
