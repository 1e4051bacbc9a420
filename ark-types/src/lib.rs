//! Ark-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod reports;
mod sample;
mod source;
mod view;

pub use config::{DEFAULT_INTERVALS, DashboardConfig, FailurePolicy, SensorSpec};
pub use error::ArkError;
pub use reports::{DashboardContext, DashboardReport, SensorWarning};
pub use sample::{Sample, SeriesViews};
pub use source::SourceKey;
pub use view::ViewKind;
