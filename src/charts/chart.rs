//! Chart Data Model
//! Figure description shared by the renderer and the embedded datasets

use std::str::FromStr;

use thiserror::Error;

/// Relative padding applied around the data extent on both axes.
const AXIS_MARGIN: f64 = 0.05;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("series '{label}' has {points} points but the x-axis has {expected} values")]
    ShapeMismatch {
        label: String,
        points: usize,
        expected: usize,
    },

    #[error("unknown annotation anchor '{0}' (supported: bottom-right, center, top-center)")]
    UnknownAnchor(String),
}

/// Marker drawn at each data point of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    Triangle,
}

/// One plotted line: legend label, point marker, and the y-values
/// paired index-wise with the owning chart's x-axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub marker: Marker,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>, marker: Marker, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            marker,
            values,
        }
    }
}

/// Named placement inside the plot frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    BottomRight,
    Center,
    TopCenter,
}

impl Anchor {
    /// Position in normalized plot coordinates, x rightward and y upward.
    /// Edge anchors carry a 2-3% inset from the frame border.
    pub fn position(self) -> (f32, f32) {
        match self {
            Anchor::BottomRight => (0.98, 0.02),
            Anchor::Center => (0.5, 0.5),
            Anchor::TopCenter => (0.5, 0.97),
        }
    }
}

impl FromStr for Anchor {
    type Err = ChartError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "bottom-right" => Ok(Anchor::BottomRight),
            "center" => Ok(Anchor::Center),
            "top-center" => Ok(Anchor::TopCenter),
            other => Err(ChartError::UnknownAnchor(other.to_string())),
        }
    }
}

/// Free-standing text block pinned at a named anchor of the plot frame.
/// The anchor is kept as the requested name and resolved during validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub anchor: String,
}

impl Annotation {
    pub fn new(text: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            anchor: anchor.into(),
        }
    }

    /// Resolve the anchor name against the supported placements.
    pub fn resolve_anchor(&self) -> Result<Anchor, ChartError> {
        self.anchor.parse()
    }
}

/// Axis extents a figure is drawn with, derived from its data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// One complete figure: shared x-axis, the series drawn over it,
/// axis titles, and an optional annotation block.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_values: Vec<f64>,
    pub series: Vec<Series>,
    pub annotation: Option<Annotation>,
}

impl Chart {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        x_values: Vec<f64>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            x_values,
            series: Vec::new(),
            annotation: None,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn set_annotation(&mut self, annotation: Annotation) {
        self.annotation = Some(annotation);
    }

    /// Pre-draw checks: every series must match the x-axis length and the
    /// annotation anchor must resolve. Nothing is drawn when this fails.
    pub fn validate(&self) -> Result<(), ChartError> {
        for series in &self.series {
            if series.values.len() != self.x_values.len() {
                return Err(ChartError::ShapeMismatch {
                    label: series.label.clone(),
                    points: series.values.len(),
                    expected: self.x_values.len(),
                });
            }
        }
        if let Some(annotation) = &self.annotation {
            annotation.resolve_anchor()?;
        }
        Ok(())
    }

    /// Axis ranges from the data min/max plus a fixed relative margin.
    /// Depends only on the chart data, so repeated renders of the same
    /// figure always use identical bounds.
    pub fn value_bounds(&self) -> ValueBounds {
        let (x_min, x_max) = extent(self.x_values.iter().copied());
        let (y_min, y_max) = extent(self.series.iter().flat_map(|s| s.values.iter().copied()));

        let x_pad = padding(x_min, x_max);
        let y_pad = padding(y_min, y_max);
        ValueBounds {
            x_min: x_min - x_pad,
            x_max: x_max + x_pad,
            y_min: y_min - y_pad,
            y_max: y_max + y_pad,
        }
    }
}

/// Min/max over the finite values, falling back to the unit range when
/// there is nothing to measure (empty axis or all-NaN series).
fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        (0.0, 1.0)
    } else {
        (min, max)
    }
}

/// Margin for one axis. A collapsed range (single x value, flat series)
/// still gets a non-zero pad so the plot bounds stay well-formed.
fn padding(min: f64, max: f64) -> f64 {
    let span = max - min;
    if span > 0.0 {
        span * AXIS_MARGIN
    } else {
        max.abs().max(1.0) * AXIS_MARGIN
    }
}
