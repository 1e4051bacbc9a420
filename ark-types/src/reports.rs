//! Report envelopes produced by the dashboard orchestrator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ArkError;
use crate::sample::{Sample, SeriesViews};
use crate::view::ViewKind;

/// A non-fatal, per-sensor failure recorded while building a dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorWarning {
    /// Logical sensor name.
    pub sensor: String,
    /// Source-side key that was queried.
    pub source_key: String,
    /// Why the sensor was dropped.
    pub error: ArkError,
}

/// Presentation mapping from template variable names to sample sequences.
///
/// Only successfully processed sensors contribute keys; a render layer must
/// tolerate absent keys.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DashboardContext(BTreeMap<String, Vec<Sample>>);

impl DashboardContext {
    /// Empty context.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add every view of `sensor` under its presentation keys.
    pub fn insert_views(&mut self, sensor: &str, views: &SeriesViews) {
        self.0
            .insert(ViewKind::Raw.context_key(sensor), views.raw.clone());
        self.0.insert(
            ViewKind::Normalized.context_key(sensor),
            views.normalized.clone(),
        );
        for (&minutes, samples) in &views.buckets {
            self.0
                .insert(ViewKind::Bucketed(minutes).context_key(sensor), samples.clone());
        }
    }

    /// Look up a presentation variable by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[Sample]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Look up one view of one sensor.
    #[must_use]
    pub fn view(&self, sensor: &str, kind: ViewKind) -> Option<&[Sample]> {
        self.get(&kind.context_key(sensor))
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Presentation variable names, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of presentation variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no sensor contributed any view.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the context and return the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, Vec<Sample>> {
        self.0
    }
}

/// Summary of one dashboard request.
///
/// Carries the per-sensor views in configuration order, the flattened
/// presentation context, and warnings for sensors that were dropped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Successfully processed sensors and their views, in configuration order.
    pub views: Vec<(String, SeriesViews)>,
    /// Presentation mapping built from `views`.
    pub context: DashboardContext,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<SensorWarning>,
}

impl DashboardReport {
    /// Views for `sensor`, if it was processed successfully.
    #[must_use]
    pub fn views_for(&self, sensor: &str) -> Option<&SeriesViews> {
        self.views
            .iter()
            .find(|(name, _)| name == sensor)
            .map(|(_, v)| v)
    }

    /// Names of sensors that made it into the report.
    pub fn sensors(&self) -> impl Iterator<Item = &str> {
        self.views.iter().map(|(name, _)| name.as_str())
    }
}
