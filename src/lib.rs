//! BenchPlot
//!
//! Renders the four comparison figures of a copy-strategy messaging study
//! (throughput, latency, L1 cache misses, CPU cycles per byte) from the
//! embedded benchmark results and shows them in a native window.

pub mod charts;
pub mod data;
pub mod gui;

pub use charts::{Chart, ChartError, ChartRenderer};
