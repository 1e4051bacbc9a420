use crate::Sample;

/// Sort samples in place by timestamp, oldest first.
///
/// The sort is stable: samples sharing a timestamp keep their relative order,
/// so duplicates pass through unchanged.
pub fn sort_by_time(samples: &mut [Sample]) {
    samples.sort_by_key(|s| s.ts);
}

/// Owned variant of [`sort_by_time`].
///
/// ```
/// use ark_core::{sorted_by_time, Sample};
/// use chrono::NaiveDate;
/// let t = |m| NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(10, m, 0).unwrap();
/// let out = sorted_by_time(vec![Sample::new(t(5), 1.0), Sample::new(t(1), 2.0)]);
/// assert_eq!(out[0].ts, t(1));
/// ```
#[must_use]
pub fn sorted_by_time(mut samples: Vec<Sample>) -> Vec<Sample> {
    sort_by_time(&mut samples);
    samples
}

/// True if timestamps are non-decreasing.
#[must_use]
pub fn is_sorted_by_time(samples: &[Sample]) -> bool {
    samples.windows(2).all(|w| w[0].ts <= w[1].ts)
}
