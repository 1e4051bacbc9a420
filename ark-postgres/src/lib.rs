//! ark-postgres
//!
//! Public source that implements `SeriesSource` on top of `tokio-postgres`.
//!
//! Each sensor lives in its own table with a `time` column (`timestamp` or
//! `timestamptz`) and a numeric `value` column. A fetch opens one connection,
//! runs `SELECT time, value FROM "<table>"`, and closes the connection again.
#![warn(missing_docs)]

/// Table reader abstraction and the production adapter.
pub mod adapter;
mod config;

use std::sync::Arc;

use async_trait::async_trait;

use ark_core::{ArkError, Sample, SeriesSource, SourceKey};

pub use adapter::{RealAdapter, ScopedConnection, quote_ident};
pub use config::{DEFAULT_PORT, PgConfig};

/// PostgreSQL-backed series source. Production users construct it with
/// `PgSource::new(PgConfig::from_env()?)`.
pub struct PgSource {
    rows: Arc<dyn adapter::PgTimeValues>,
}

impl PgSource {
    /// Static source key.
    pub const KEY: SourceKey = SourceKey::new("ark-postgres");

    fn looks_like_missing_table(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("does not exist") || m.contains("undefined table")
    }

    fn normalize_error(e: ArkError, table: &str) -> ArkError {
        match e {
            ArkError::Query { msg, .. } if Self::looks_like_missing_table(&msg) => {
                ArkError::query(Self::KEY.as_str(), format!("no table for sensor key '{table}'"))
            }
            ArkError::Query { msg, .. } => ArkError::query(Self::KEY.as_str(), msg),
            other => other,
        }
    }

    /// Build a source that connects with `config` on every fetch.
    #[must_use]
    pub fn new(config: PgConfig) -> Self {
        Self {
            rows: Arc::new(RealAdapter::new(config)),
        }
    }

    /// For tests/injection (requires the `test-adapters` feature).
    #[cfg(feature = "test-adapters")]
    pub fn from_adapter(rows: Arc<dyn adapter::PgTimeValues>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl SeriesSource for PgSource {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "PostgreSQL"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "ark_postgres::fetch", skip(self))
    )]
    async fn fetch(&self, source_key: &str) -> Result<Vec<Sample>, ArkError> {
        self.rows
            .time_values(source_key)
            .await
            .map_err(|e| Self::normalize_error(e, source_key))
    }
}
