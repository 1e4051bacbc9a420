//! Re-export of foundational types from `ark-types`.
// Consolidated re-exports so downstream crates can depend on `ark-core` only

pub use ark_types::{ArkError, SourceKey};
pub use ark_types::{DEFAULT_INTERVALS, DashboardConfig, FailurePolicy, SensorSpec};
pub use ark_types::{DashboardContext, DashboardReport, SensorWarning};
pub use ark_types::{Sample, SeriesViews, ViewKind};

pub use chrono::NaiveDateTime;
