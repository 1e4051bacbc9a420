//! Configuration types shared by the dashboard orchestrator and its sources.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::ArkError;
use crate::view::ViewKind;

/// Bucket intervals (minutes) computed when none are configured.
pub const DEFAULT_INTERVALS: [i64; 2] = [15, 30];

/// How a dashboard batch reacts when one sensor's pipeline fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum FailurePolicy {
    /// Drop the failed sensor, record a warning, and continue with the rest.
    #[default]
    Partial,
    /// Abort the whole request on the first sensor failure.
    Strict,
}

/// A logical sensor name and the source-side key its readings are stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorSpec {
    /// Display name, used to build presentation keys (e.g. "temperature").
    pub name: String,
    /// Source-side identifier, e.g. a table name (e.g. "`CM_HAM_DO_AI1/Temp_value`").
    pub source_key: String,
}

impl SensorSpec {
    /// Create a sensor mapping.
    pub fn new(name: impl Into<String>, source_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_key: source_key.into(),
        }
    }
}

/// Global configuration for the `Dashboard` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Sensors to fetch, in processing order.
    pub sensors: Vec<SensorSpec>,
    /// Bucket intervals in minutes; one bucketed view per entry.
    pub intervals: Vec<i64>,
    /// Batch reaction to per-sensor failures.
    pub failure_policy: FailurePolicy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            sensors: Vec::new(),
            intervals: DEFAULT_INTERVALS.to_vec(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl DashboardConfig {
    /// The reference plant mapping: temperature, pH, dissolved oxygen, pressure.
    #[must_use]
    pub fn reference_sensors() -> Vec<SensorSpec> {
        vec![
            SensorSpec::new("temperature", "CM_HAM_DO_AI1/Temp_value"),
            SensorSpec::new("ph", "CM_HAM_PH_AI1/pH_value"),
            SensorSpec::new("oxygen", "CM_PID_DO/Process_DO"),
            SensorSpec::new("pressure", "CM_PRESSURE/Output"),
        ]
    }

    /// Parse a configuration from JSON; missing fields take their defaults.
    ///
    /// # Errors
    /// Returns `ArkError::InvalidArg` if the document is not valid configuration JSON.
    pub fn from_json(json: &str) -> Result<Self, ArkError> {
        serde_json::from_str(json).map_err(|e| ArkError::InvalidArg(format!("config: {e}")))
    }

    /// Check invariants the pipeline relies on.
    ///
    /// # Errors
    /// - `ArkError::InvalidInterval` for the first non-positive interval.
    /// - `ArkError::InvalidArg` for duplicate or empty sensor names, or when two
    ///   sensors would write the same presentation key (e.g. `pressure_15` and
    ///   the 15-minute view of `pressure`).
    pub fn validate(&self) -> Result<(), ArkError> {
        if let Some(&bad) = self.intervals.iter().find(|&&m| m <= 0) {
            return Err(ArkError::invalid_interval(bad));
        }
        let mut seen = HashSet::new();
        for s in &self.sensors {
            if s.name.trim().is_empty() {
                return Err(ArkError::InvalidArg("sensor name must not be empty".into()));
            }
            if !seen.insert(s.name.as_str()) {
                return Err(ArkError::InvalidArg(format!(
                    "duplicate sensor '{}' in configuration",
                    s.name
                )));
            }
        }

        let kinds = ViewKind::all_for(&self.intervals);
        let mut owners: HashMap<String, &str> = HashMap::new();
        for s in &self.sensors {
            // A sensor repeating an interval maps to the same key twice; that is not a clash.
            let mut own = HashSet::new();
            for kind in &kinds {
                let key = kind.context_key(&s.name);
                if !own.insert(key.clone()) {
                    continue;
                }
                if let Some(other) = owners.insert(key.clone(), s.name.as_str()) {
                    return Err(ArkError::InvalidArg(format!(
                        "sensors '{other}' and '{}' both map to presentation key '{key}'",
                        s.name
                    )));
                }
            }
        }
        Ok(())
    }
}
