use std::sync::Arc;

use ark_core::{ArkError, DashboardConfig, FailurePolicy, SensorSpec, SeriesSource};

/// Orchestrator that turns configured sensors into dashboard views.
pub struct Dashboard {
    pub(crate) source: Arc<dyn SeriesSource>,
    pub(crate) cfg: DashboardConfig,
}

/// Builder for constructing a `Dashboard` with custom configuration.
pub struct DashboardBuilder {
    source: Option<Arc<dyn SeriesSource>>,
    cfg: DashboardConfig,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no source and no sensors; register a source via
    ///   [`with_source`](Self::with_source) and at least one sensor.
    /// - Intervals default to 15 and 30 minutes and the failure policy to
    ///   `FailurePolicy::Partial`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: DashboardConfig::default(),
        }
    }

    /// Register the series source every sensor is fetched from.
    ///
    /// Registering a second source replaces the first.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn SeriesSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Append a sensor: its display `name` and the `source_key` it is stored under.
    ///
    /// Sensors are processed in the order they are added.
    #[must_use]
    pub fn sensor(mut self, name: impl Into<String>, source_key: impl Into<String>) -> Self {
        self.cfg.sensors.push(SensorSpec::new(name, source_key));
        self
    }

    /// Replace the sensor list.
    #[must_use]
    pub fn sensors(mut self, sensors: impl IntoIterator<Item = SensorSpec>) -> Self {
        self.cfg.sensors = sensors.into_iter().collect();
        self
    }

    /// Replace the bucket intervals, in minutes.
    ///
    /// Validation is deferred to [`build`](Self::build).
    #[must_use]
    pub fn intervals(mut self, minutes: &[i64]) -> Self {
        self.cfg.intervals = minutes.to_vec();
        self
    }

    /// Select how a batch reacts to a failing sensor.
    #[must_use]
    pub const fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.cfg.failure_policy = policy;
        self
    }

    /// Replace the whole configuration, e.g. one loaded with
    /// `DashboardConfig::from_json`.
    #[must_use]
    pub fn config(mut self, cfg: DashboardConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Dashboard` orchestrator.
    ///
    /// # Errors
    /// - `InvalidInterval` if any configured interval is non-positive.
    /// - `InvalidArg` if no source was registered, no sensors are configured,
    ///   or a sensor name is empty or duplicated.
    pub fn build(self) -> Result<Dashboard, ArkError> {
        self.cfg.validate()?;

        let Some(source) = self.source else {
            return Err(ArkError::InvalidArg(
                "no source registered; add one via with_source(...)".to_string(),
            ));
        };
        if self.cfg.sensors.is_empty() {
            return Err(ArkError::InvalidArg(
                "no sensors configured; add at least one via sensor(...)".to_string(),
            ));
        }

        Ok(Dashboard {
            source,
            cfg: self.cfg,
        })
    }
}

/// Normalize an error returned by a source so it always names that source.
///
/// Query and data errors pass through unchanged; anything else a source
/// reports is a query failure from the dashboard's point of view.
pub fn tag_err(source: &str, e: ArkError) -> ArkError {
    match e {
        e @ (ArkError::Query { .. } | ArkError::Data(_)) => e,
        other => ArkError::query(source, other.to_string()),
    }
}

impl Dashboard {
    /// Start building a new `Dashboard`.
    ///
    /// ```rust,ignore
    /// let dashboard = ark::Dashboard::builder()
    ///     .with_source(source)
    ///     .sensors(ark::DashboardConfig::reference_sensors())
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::new()
    }

    /// The validated configuration this dashboard runs with.
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.cfg
    }

    /// Name of the registered source.
    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }
}
