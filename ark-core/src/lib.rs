//! ark-core
//!
//! Core types, traits, and utilities shared across the ark workspace.
//!
//! - `types`: re-exported data structures (samples, views, config, reports, errors).
//! - `source`: the `SeriesSource` trait implemented by query clients.
//! - `timeseries`: ordering, normalization, interval bucketing, and the
//!   per-series view pipeline.
//!
//! Every function in `timeseries` is synchronous and operates on fully
//! materialized series. Only `SeriesSource::fetch` is async, so sources can
//! sit on top of async database drivers.
#![warn(missing_docs)]

/// The `SeriesSource` trait implemented by query clients.
pub mod source;
/// Time-series utilities for ordering, normalizing, and bucketing samples.
pub mod timeseries;
pub mod types;

pub use source::SeriesSource;
pub use timeseries::aggregate::{aggregate, bucket_start};
pub use timeseries::normalize::{normalize, value_range};
pub use timeseries::order::{is_sorted_by_time, sort_by_time, sorted_by_time};
pub use timeseries::views::build_views;
pub use types::*;
