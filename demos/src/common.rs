use std::sync::Arc;

use ark_core::{ArkError, SeriesSource};
use ark_postgres::{PgConfig, PgSource};

/// Environment variable that switches the demos to fixture data.
pub const USE_MOCK_ENV: &str = "ARK_DEMOS_USE_MOCK";

/// Return a series source for demos.
///
/// Uses the mock source when `ARK_DEMOS_USE_MOCK` is set, otherwise a
/// PostgreSQL source configured from the `POSTGRES_*` variables.
///
/// # Errors
/// Returns an error if `POSTGRES_PORT` is set to something that is not a port.
pub fn get_source() -> Result<Arc<dyn SeriesSource>, ArkError> {
    if std::env::var(USE_MOCK_ENV).is_ok() {
        println!("--- (Using Mock Source for CI) ---");
        Ok(Arc::new(ark_mock::MockSource::new()))
    } else {
        Ok(Arc::new(PgSource::new(PgConfig::from_env()?)))
    }
}

/// A sensor key that no deployment has, used to show partial rendering.
#[must_use]
pub fn missing_sensor_key() -> &'static str {
    if std::env::var(USE_MOCK_ENV).is_ok() {
        "FAIL"
    } else {
        "CM_MISSING/Output"
    }
}
