//! GUI module - User interface components

mod app;
mod viewer;

pub use app::BenchPlotApp;
pub use viewer::ChartViewer;
