//! Shared helpers for the runnable ark demos.

pub mod common;
