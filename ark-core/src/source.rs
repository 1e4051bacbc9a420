use async_trait::async_trait;

use crate::{ArkError, Sample};
pub use ark_types::SourceKey;

/// Query client that returns every reading stored under a source-side key.
///
/// Implementations open whatever connection they need per call; the
/// orchestrator calls `fetch` sequentially, one sensor at a time.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    /// A stable identifier used in logs and error tagging (e.g., "ark-postgres").
    fn name(&self) -> &'static str;

    /// Canonical source key constructed from the static name.
    fn key(&self) -> SourceKey {
        SourceKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Fetch all `(timestamp, value)` readings for `source_key`, in storage order.
    ///
    /// # Errors
    /// Connectivity or query failures should be reported as `ArkError::Query`;
    /// rows that cannot be decoded as `ArkError::Data`.
    async fn fetch(&self, source_key: &str) -> Result<Vec<Sample>, ArkError>;
}
