//! Data module - Embedded benchmark results

pub mod datasets;
