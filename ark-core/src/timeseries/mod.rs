//! Time-series utilities applied to every fetched series.
//!
//! Modules include:
//! - `order`: stable sort by timestamp
//! - `normalize`: min-max scaling into `[0, 1]`
//! - `aggregate`: mean per fixed-length minute bucket
//! - `views`: the per-series pipeline producing every view
/// Mean-per-bucket aggregation over minute intervals.
pub mod aggregate;
/// Min-max normalization.
pub mod normalize;
/// Timestamp ordering helpers.
pub mod order;
/// Per-series pipeline: sort, normalize, bucket.
pub mod views;
