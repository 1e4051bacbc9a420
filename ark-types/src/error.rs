use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the ark workspace.
///
/// This covers source (query) failures, normalization preconditions, bucket
/// interval validation, malformed data, and the strict-policy wrapper that
/// names the sensor whose pipeline failed.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
#[non_exhaustive]
pub enum ArkError {
    /// The data source was unreachable or the query failed.
    #[error("query via {provider} failed: {msg}")]
    Query {
        /// Name of the source that failed (e.g. "ark-postgres").
        provider: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Normalization was attempted on a series with zero samples.
    #[error("cannot normalize an empty series")]
    EmptySeries,

    /// Normalization was attempted on a series whose values are all equal.
    #[error("cannot normalize a series with zero value range (all values = {value})")]
    DegenerateRange {
        /// The single value shared by every sample.
        value: f64,
    },

    /// A bucket interval was zero or negative.
    #[error("invalid bucket interval: {minutes} minutes (must be > 0)")]
    InvalidInterval {
        /// The rejected interval in minutes.
        minutes: i64,
    },

    /// Issues with the returned data (non-finite values, undecodable rows).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument or configuration.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A sensor's pipeline failed under the strict failure policy.
    #[error("sensor '{sensor}' failed: {error}")]
    SeriesFailed {
        /// Logical sensor name from the dashboard configuration.
        sensor: String,
        /// The underlying failure.
        error: Box<ArkError>,
    },
}

impl ArkError {
    /// Helper: build a `Query` error with the source name and message.
    pub fn query(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Query {
            provider: provider.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `InvalidInterval` error.
    #[must_use]
    pub const fn invalid_interval(minutes: i64) -> Self {
        Self::InvalidInterval { minutes }
    }

    /// Helper: wrap a failure with the sensor it belongs to.
    pub fn series_failed(sensor: impl Into<String>, error: Self) -> Self {
        Self::SeriesFailed {
            sensor: sensor.into(),
            error: Box::new(error),
        }
    }

    /// Returns true if this error may be isolated to a single series.
    ///
    /// Recoverable errors drop the affected series from a dashboard batch while
    /// the remaining series continue. Interval and argument errors are
    /// precondition violations and must abort the request instead.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Query { .. } | Self::EmptySeries | Self::DegenerateRange { .. } | Self::Data(_) => {
                true
            }
            Self::SeriesFailed { error, .. } => error.is_recoverable(),
            Self::InvalidInterval { .. } | Self::InvalidArg(_) => false,
        }
    }

    /// Strip any `SeriesFailed` wrappers and return the root cause.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::SeriesFailed { error, .. } => error.root_cause(),
            other => other,
        }
    }
}
