use ark_core::{ArkError, DashboardContext, DashboardReport, FailurePolicy, SensorWarning};

use crate::Dashboard;

impl Dashboard {
    /// Build every configured sensor's views and the presentation mapping.
    ///
    /// Behavior and trade-offs:
    /// - Sensors are fetched and processed sequentially, in configuration order.
    /// - Under `FailurePolicy::Partial` a recoverable failure (query error, empty
    ///   or flat series, undecodable data) drops that sensor: none of its keys
    ///   appear in the context and a `SensorWarning` is recorded instead.
    /// - Under `FailurePolicy::Strict` the first failure aborts the request.
    /// - A report where every sensor failed is still `Ok`, with an empty context.
    ///
    /// # Errors
    /// - `SeriesFailed` wrapping the cause, under `FailurePolicy::Strict`.
    /// - Non-recoverable errors (`InvalidInterval`, `InvalidArg`) are returned
    ///   as-is under either policy.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "ark::report",
            skip(self),
            fields(
                source = self.source.name(),
                sensors = self.cfg.sensors.len(),
                policy = ?self.cfg.failure_policy,
            ),
        )
    )]
    pub async fn report(&self) -> Result<DashboardReport, ArkError> {
        let mut report = DashboardReport::default();

        for sensor in &self.cfg.sensors {
            match self.series_views(sensor).await {
                Ok(views) => {
                    report.context.insert_views(&sensor.name, &views);
                    report.views.push((sensor.name.clone(), views));
                }
                Err(e) if !e.is_recoverable() => return Err(e),
                Err(e) if self.cfg.failure_policy == FailurePolicy::Strict => {
                    return Err(ArkError::series_failed(&sensor.name, e));
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        sensor = %sensor.name,
                        source_key = %sensor.source_key,
                        error = %e,
                        "dropping sensor from dashboard"
                    );
                    report.warnings.push(SensorWarning {
                        sensor: sensor.name.clone(),
                        source_key: sensor.source_key.clone(),
                        error: e,
                    });
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            rendered = report.views.len(),
            dropped = report.warnings.len(),
            keys = report.context.len(),
            "dashboard report built"
        );
        Ok(report)
    }

    /// Build only the presentation mapping.
    ///
    /// Equivalent to [`report`](Self::report) with the views and warnings discarded.
    ///
    /// # Errors
    /// Same as [`report`](Self::report).
    pub async fn context(&self) -> Result<DashboardContext, ArkError> {
        Ok(self.report().await?.context)
    }
}
