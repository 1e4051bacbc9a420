use ark_core::{ArkError, SensorSpec, SeriesViews, build_views};

use crate::Dashboard;
use crate::core::tag_err;

impl Dashboard {
    /// Fetch one sensor and build all of its views.
    ///
    /// Behavior:
    /// - Queries the registered source for `sensor.source_key`.
    /// - Source errors are tagged with the source name (see [`tag_err`]).
    /// - Views are built for every configured interval.
    ///
    /// # Errors
    /// Returns the query error or the first pipeline error (`EmptySeries`,
    /// `DegenerateRange`, `Data`, `InvalidInterval`) unchanged. The failure
    /// policy is not applied here.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "ark::series_views",
            skip(self, sensor),
            fields(sensor = %sensor.name, source_key = %sensor.source_key),
        )
    )]
    pub async fn series_views(&self, sensor: &SensorSpec) -> Result<SeriesViews, ArkError> {
        let raw = self
            .source
            .fetch(&sensor.source_key)
            .await
            .map_err(|e| tag_err(self.source.name(), e))?;
        build_views(raw, &self.cfg.intervals)
    }
}
