//! Charts module - Figure model and rendering

mod chart;
mod renderer;

pub use chart::{Anchor, Annotation, Chart, ChartError, Marker, Series, ValueBounds};
pub use renderer::{ChartRenderer, PALETTE};
