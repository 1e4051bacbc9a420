//! Time-series value types shared by sources, the pipeline, and the presentation layer.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single reading: naive (zone-less) timestamp and numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Reading time, second resolution, no timezone.
    pub ts: NaiveDateTime,
    /// Measured value.
    pub value: f64,
}

impl Sample {
    /// Construct a sample from a timestamp and value.
    #[must_use]
    pub const fn new(ts: NaiveDateTime, value: f64) -> Self {
        Self { ts, value }
    }
}

impl From<(NaiveDateTime, f64)> for Sample {
    fn from((ts, value): (NaiveDateTime, f64)) -> Self {
        Self { ts, value }
    }
}

/// Derived views of a single series, each an independently owned copy sorted by time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesViews {
    /// Raw samples as fetched, sorted by timestamp.
    pub raw: Vec<Sample>,
    /// Min-max normalized samples in `[0, 1]`, sorted by timestamp.
    pub normalized: Vec<Sample>,
    /// Bucketed means keyed by interval length in minutes.
    pub buckets: BTreeMap<i64, Vec<Sample>>,
}

impl SeriesViews {
    /// Bucketed view for `interval_minutes`, if it was computed.
    #[must_use]
    pub fn bucketed(&self, interval_minutes: i64) -> Option<&[Sample]> {
        self.buckets.get(&interval_minutes).map(Vec::as_slice)
    }

    /// Interval lengths (minutes) with a computed bucketed view, ascending.
    pub fn intervals(&self) -> impl Iterator<Item = i64> + '_ {
        self.buckets.keys().copied()
    }
}
