use std::collections::BTreeMap;

use chrono::{NaiveDateTime, Timelike};

use crate::{ArkError, Sample};

/// Start of the `interval_minutes` bucket containing `ts`.
///
/// The minute is truncated to `minute - (minute % interval_minutes)` and the
/// seconds dropped; year, month, day and hour are kept. Intervals that divide
/// 60 align across hours; longer intervals collapse to the top of the hour.
/// Returns `None` for non-positive intervals.
#[must_use]
pub fn bucket_start(ts: NaiveDateTime, interval_minutes: i64) -> Option<NaiveDateTime> {
    if interval_minutes <= 0 {
        return None;
    }
    let minute = i64::from(ts.minute());
    let start = u32::try_from(minute - minute % interval_minutes).ok()?;
    ts.date().and_hms_opt(ts.hour(), start, 0)
}

#[derive(Default)]
struct BucketAgg {
    sum: f64,
    count: u32,
}

impl BucketAgg {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        self.sum / f64::from(self.count)
    }
}

/// Average samples into fixed minute buckets.
///
/// - One output sample per non-empty bucket, stamped with the bucket start
///   (see [`bucket_start`]) and holding the arithmetic mean of its members.
/// - Empty input yields empty output.
/// - Output order is not part of the contract; sort it before display.
///
/// # Errors
/// Returns `ArkError::InvalidInterval` if `interval_minutes <= 0`, checked
/// before looking at the input.
///
/// ```
/// use ark_core::{aggregate, sorted_by_time, Sample};
/// use chrono::NaiveDate;
/// let t = |m| NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(10, m, 0).unwrap();
/// let series = [Sample::new(t(7), 2.0), Sample::new(t(12), 4.0), Sample::new(t(20), 10.0)];
/// let out = sorted_by_time(aggregate(&series, 15).unwrap());
/// assert_eq!(out, vec![Sample::new(t(0), 3.0), Sample::new(t(15), 10.0)]);
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "ark_core::aggregate", skip(samples), fields(len = samples.len()))
)]
pub fn aggregate(samples: &[Sample], interval_minutes: i64) -> Result<Vec<Sample>, ArkError> {
    if interval_minutes <= 0 {
        return Err(ArkError::invalid_interval(interval_minutes));
    }

    let mut buckets: BTreeMap<NaiveDateTime, BucketAgg> = BTreeMap::new();
    for s in samples {
        let bucket = bucket_start(s.ts, interval_minutes).ok_or_else(|| {
            ArkError::Data(format!(
                "cannot bucket {} into {interval_minutes}-minute intervals",
                s.ts
            ))
        })?;
        buckets.entry(bucket).or_default().push(s.value);
    }

    Ok(buckets
        .into_iter()
        .map(|(ts, agg)| Sample::new(ts, agg.mean()))
        .collect())
}
