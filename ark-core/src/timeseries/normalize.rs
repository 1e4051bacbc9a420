use crate::{ArkError, Sample};

/// Minimum and maximum value across `samples`, or `None` if empty.
///
/// Non-finite values take part in the comparison as-is; use [`normalize`]
/// when they must be rejected.
#[must_use]
pub fn value_range(samples: &[Sample]) -> Option<(f64, f64)> {
    let (first, rest) = samples.split_first()?;
    Some(rest.iter().fold((first.value, first.value), |(lo, hi), s| {
        (lo.min(s.value), hi.max(s.value))
    }))
}

/// Scale every value into `[0, 1]` using the series' own minimum and maximum.
///
/// Each value `v` becomes `(v - min) / (max - min)`. Timestamps are carried
/// over and the output keeps the input order; callers sort afterwards.
///
/// # Errors
/// - `ArkError::EmptySeries` when `samples` is empty.
/// - `ArkError::Data` when any value is NaN or infinite, or `max - min` overflows.
/// - `ArkError::DegenerateRange` when every value is equal (including a
///   single-sample series), since the scale would divide by zero.
///
/// ```
/// use ark_core::{normalize, ArkError, Sample};
/// use chrono::NaiveDate;
/// let t = |m| NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(10, m, 0).unwrap();
/// let out = normalize(&[Sample::new(t(0), 2.0), Sample::new(t(1), 4.0), Sample::new(t(2), 10.0)]).unwrap();
/// assert_eq!(out.iter().map(|s| s.value).collect::<Vec<_>>(), vec![0.0, 0.25, 1.0]);
///
/// let flat = normalize(&[Sample::new(t(0), 5.0), Sample::new(t(1), 5.0)]);
/// assert_eq!(flat, Err(ArkError::DegenerateRange { value: 5.0 }));
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "ark_core::normalize", skip(samples), fields(len = samples.len()))
)]
pub fn normalize(samples: &[Sample]) -> Result<Vec<Sample>, ArkError> {
    if let Some(bad) = samples.iter().find(|s| !s.value.is_finite()) {
        return Err(ArkError::Data(format!(
            "non-finite value {} at {}",
            bad.value, bad.ts
        )));
    }
    let (min, max) = value_range(samples).ok_or(ArkError::EmptySeries)?;
    let span = max - min;
    if span == 0.0 {
        return Err(ArkError::DegenerateRange { value: min });
    }
    if !span.is_finite() {
        return Err(ArkError::Data(format!(
            "value range [{min}, {max}] overflows f64"
        )));
    }
    Ok(samples
        .iter()
        .map(|s| Sample::new(s.ts, (s.value - min) / span))
        .collect())
}
