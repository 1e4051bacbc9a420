//! ark-mock
//!
//! Series sources for tests and demos that never touch a database.
//!
//! - [`MockSource`]: deterministic readings for the four reference plant tables
//!   (2023-04-19, 05:05 to 05:59) plus keys that force each failure mode.
//! - [`DynamicMockSource`]: per-key behavior scripted at runtime through a
//!   [`DynamicMockController`], which also records every requested key.
//!
//! ```
//! use ark_core::{ArkError, SeriesSource};
//! use ark_mock::MockSource;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let src = MockSource::new();
//! let temps = src.fetch("CM_HAM_DO_AI1/Temp_value").await.unwrap();
//! assert_eq!(temps.len(), 8);
//! assert_eq!(src.fetch("EMPTY").await, Ok(vec![]));
//! assert!(matches!(src.fetch("FAIL").await, Err(ArkError::Query { .. })));
//! # });
//! ```
#![warn(missing_docs)]

use async_trait::async_trait;
use ark_core::{ArkError, Sample, SeriesSource};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};

/// Mock source for CI-safe demos. Provides deterministic data from static fixtures.
///
/// Known keys are the four reference plant tables plus a few special ones:
/// - `"FAIL"`: forced query failure
/// - `"EMPTY"`: returns no readings
/// - `"FLAT"`: returns readings with a single repeated value
///
/// Unknown keys fail like a missing table would.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Create the mock source. It holds no state; every fetch reads the fixtures.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn maybe_fail(source_key: &str) -> Result<(), ArkError> {
        match source_key {
            "FAIL" => Err(ArkError::query("ark-mock", "forced failure: fetch")),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl SeriesSource for MockSource {
    fn name(&self) -> &'static str {
        "ark-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn fetch(&self, source_key: &str) -> Result<Vec<Sample>, ArkError> {
        Self::maybe_fail(source_key)?;
        fixtures::readings::by_key(source_key).ok_or_else(|| {
            ArkError::query(
                "ark-mock",
                format!("relation \"{source_key}\" does not exist"),
            )
        })
    }
}
