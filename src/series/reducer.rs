// Collapse one bucket's raw positions into a single value, ignoring outliers.

/// Values further than this many standard deviations from the mean are discarded.
pub const OUTLIER_SIGMAS: i128 = 2;

/// Truncating mean of the values within 2σ (population) of the bucket mean.
/// Falls back to the truncating mean of all values when every value is an outlier.
/// Returns `None` only for an empty bucket.
pub fn reduce(values: &[u32]) -> Option<u32> {
    if values.is_empty() {
        return None;
    }
    // Exact integer form of |v - mean| <= k·σ with S = Σv, Q = Σv²:
    // (n·v - S)² <= k²·(n·Q - S²)
    let n = values.len() as i128;
    let sum: i128 = values.iter().map(|&v| i128::from(v)).sum();
    let sum_sq: i128 = values.iter().map(|&v| i128::from(v) * i128::from(v)).sum();
    let bound = OUTLIER_SIGMAS * OUTLIER_SIGMAS * (n * sum_sq - sum * sum);

    let kept: Vec<u32> = values
        .iter()
        .copied()
        .filter(|&v| {
            let d = n * i128::from(v) - sum;
            d * d <= bound
        })
        .collect();

    if kept.is_empty() {
        Some(truncating_mean(values))
    } else {
        Some(truncating_mean(&kept))
    }
}

fn truncating_mean(v: &[u32]) -> u32 {
    let sum: u64 = v.iter().map(|&x| x as u64).sum();
    (sum / v.len() as u64) as u32
}
