use crate::timeseries::aggregate::aggregate;
use crate::timeseries::normalize::normalize;
use crate::timeseries::order::{sort_by_time, sorted_by_time};
use crate::{ArkError, Sample, SeriesViews};

/// Build every view of one series: raw, normalized, and one bucketed view per interval.
///
/// Steps, in order: sort the raw samples; normalize and sort; for each entry
/// of `intervals` aggregate the sorted raw samples and sort. Each view is an
/// independently owned copy. Repeated intervals are computed once.
///
/// # Errors
/// - Normalization errors (`EmptySeries`, `DegenerateRange`, `Data`) are
///   returned as-is and no views are produced.
/// - `InvalidInterval` if any interval is non-positive.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "ark_core::build_views", skip(raw), fields(len = raw.len()))
)]
pub fn build_views(raw: Vec<Sample>, intervals: &[i64]) -> Result<SeriesViews, ArkError> {
    let raw = sorted_by_time(raw);

    let mut normalized = normalize(&raw)?;
    sort_by_time(&mut normalized);

    let mut views = SeriesViews {
        raw,
        normalized,
        ..SeriesViews::default()
    };
    for &minutes in intervals {
        if views.buckets.contains_key(&minutes) {
            continue;
        }
        let mut bucketed = aggregate(&views.raw, minutes)?;
        sort_by_time(&mut bucketed);
        views.buckets.insert(minutes, bucketed);
    }
    Ok(views)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeseries::order::is_sorted_by_time;
    use chrono::{NaiveDate, NaiveDateTime};

    fn t(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn unsorted() -> Vec<Sample> {
        vec![
            Sample::new(t(11, 20), 10.0),
            Sample::new(t(10, 7), 2.0),
            Sample::new(t(10, 40), 6.0),
            Sample::new(t(10, 12), 4.0),
        ]
    }

    #[test]
    fn every_view_is_sorted() {
        let views = build_views(unsorted(), &[15, 30]).unwrap();
        assert!(is_sorted_by_time(&views.raw));
        assert!(is_sorted_by_time(&views.normalized));
        assert!(is_sorted_by_time(views.bucketed(15).unwrap()));
        assert!(is_sorted_by_time(views.bucketed(30).unwrap()));
        assert_eq!(views.intervals().collect::<Vec<_>>(), vec![15, 30]);
    }

    #[test]
    fn bucketed_views_hold_interval_means() {
        let views = build_views(unsorted(), &[15, 30]).unwrap();
        assert_eq!(
            views.bucketed(15).unwrap(),
            &[
                Sample::new(t(10, 0), 3.0),
                Sample::new(t(10, 30), 6.0),
                Sample::new(t(11, 15), 10.0)
            ]
        );
        assert_eq!(
            views.bucketed(30).unwrap(),
            &[
                Sample::new(t(10, 0), 3.0),
                Sample::new(t(10, 30), 6.0),
                Sample::new(t(11, 0), 10.0)
            ]
        );
    }

    #[test]
    fn normalization_failure_produces_no_views() {
        let flat = vec![Sample::new(t(10, 0), 5.0), Sample::new(t(10, 1), 5.0)];
        assert_eq!(
            build_views(flat, &[15]),
            Err(ArkError::DegenerateRange { value: 5.0 })
        );
        assert_eq!(build_views(vec![], &[15]), Err(ArkError::EmptySeries));
    }

    #[test]
    fn invalid_interval_propagates() {
        assert_eq!(
            build_views(unsorted(), &[15, -1]),
            Err(ArkError::InvalidInterval { minutes: -1 })
        );
    }

    #[test]
    fn views_are_independent_copies() {
        let mut views = build_views(unsorted(), &[15]).unwrap();
        views.raw[0].value = 999.0;
        views.raw.clear();
        assert_eq!(views.normalized.len(), 4);
        assert_eq!(views.normalized[0], Sample::new(t(10, 7), 0.0));
        assert_eq!(views.bucketed(15).unwrap()[0], Sample::new(t(10, 0), 3.0));
    }
}
