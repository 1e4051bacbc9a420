//! Ark turns raw sensor readings into dashboard-ready series.
//!
//! Overview
//! - Fetches one series per configured sensor from a [`SeriesSource`].
//! - Builds the raw, normalized, and bucketed views of each series with
//!   `ark_core::build_views`.
//! - Flattens the views into a presentation mapping keyed `{name}_data`,
//!   `normalized_{name}_data`, and `{name}_{k}_data`.
//!
//! Key behaviors and trade-offs
//! - Sensors are processed one after another against a single source. This keeps
//!   request order deterministic and load on the source predictable.
//! - Failure policy:
//!   - `Partial` (default): a sensor whose query fails, or whose series is empty
//!     or flat, is dropped with a warning and the rest continue. The dashboard
//!     renders with whatever succeeded.
//!   - `Strict`: the first failing sensor aborts the request with
//!     `ArkError::SeriesFailed`.
//! - Non-positive bucket intervals are rejected by the builder before any query
//!   is made, regardless of policy.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use ark::Dashboard;
//! use ark_postgres::{PgConfig, PgSource};
//!
//! let pg = Arc::new(PgSource::new(PgConfig::from_env()?));
//! let dashboard = Dashboard::builder()
//!     .with_source(pg)
//!     .sensor("temperature", "CM_HAM_DO_AI1/Temp_value")
//!     .sensor("ph", "CM_HAM_PH_AI1/pH_value")
//!     .intervals(&[15, 30])
//!     .build()?;
//!
//! let report = dashboard.report().await?;
//! for w in &report.warnings {
//!     eprintln!("{} dropped: {}", w.sensor, w.error);
//! }
//! let temps = report.context.get("temperature_15_data");
//! ```
#![warn(missing_docs)]

mod core;
mod router;

pub use crate::core::{Dashboard, DashboardBuilder, tag_err};

pub use ark_core::{
    ArkError, DashboardConfig, DashboardContext, DashboardReport, FailurePolicy, Sample,
    SensorSpec, SensorWarning, SeriesSource, SeriesViews, ViewKind,
};
