//! Renderer-neutral description of a chart.
//!
//! Drivers describe what to draw with a [`Figure`]; a
//! [`Renderer`](crate::render::Renderer) decides how it reaches the screen.

use ratatui::style::Color;

/// Fraction of the data range added above and below auto-scaled y bounds.
const Y_PADDING: f64 = 0.05;

/// A continuous line through ordered points.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    /// Legend entry, if any.
    pub label: Option<String>,
    /// Line colour.
    pub color: Color,
    /// Nominal stroke width; widths of 2 and above are drawn emphasized.
    pub width: u8,
    /// Points ordered by x.
    pub points: Vec<(f64, f64)>,
}

/// A single highlighted point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMarker {
    /// Legend entry, if any.
    pub label: Option<String>,
    /// Marker colour.
    pub color: Color,
    /// Nominal marker size; sizes of 8 and above use a solid block.
    pub size: u8,
    /// Position.
    pub point: (f64, f64),
}

/// Everything a renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Chart title.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// Visible x range.
    pub x_range: (f64, f64),
    /// Fixed y range; auto-scaled from the data when `None`.
    pub y_range: Option<(f64, f64)>,
    /// Lines, drawn in order.
    pub series: Vec<LineSeries>,
    /// Markers, drawn above all lines.
    pub markers: Vec<PointMarker>,
    /// Draw grid lines at the tick positions.
    pub grid: bool,
    /// Show the legend.
    pub legend: bool,
    /// Draw the `x = 0` and `y = 0` lines.
    pub zero_axes: bool,
}

impl Figure {
    /// Create an empty figure with grid, legend and zero axes enabled.
    pub fn new(title: impl Into<String>, x_range: (f64, f64)) -> Self {
        Self {
            title: title.into(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            x_range,
            y_range: None,
            series: Vec::new(),
            markers: Vec::new(),
            grid: true,
            legend: true,
            zero_axes: true,
        }
    }

    /// Clamp the y axis to `range`.
    pub fn with_y_range(mut self, range: (f64, f64)) -> Self {
        self.y_range = Some(range);
        self
    }

    /// Add a line series.
    pub fn push_series(&mut self, series: LineSeries) {
        self.series.push(series);
    }

    /// Add a point marker.
    pub fn push_marker(&mut self, marker: PointMarker) {
        self.markers.push(marker);
    }

    /// The y bounds to draw: the fixed range, or the padded extent of all
    /// finite y values in series and markers.
    pub fn y_bounds(&self) -> (f64, f64) {
        if let Some(range) = self.y_range {
            return range;
        }

        let ys = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.1))
            .chain(self.markers.iter().map(|m| m.point.1))
            .filter(|y| y.is_finite());

        let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for y in ys {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        // Fallback for empty/constant data
        if !y_min.is_finite() || !y_max.is_finite() {
            return (-1.0, 1.0);
        }
        if (y_max - y_min).abs() < 1e-10 {
            return (y_min - 1.0, y_max + 1.0);
        }

        let pad = (y_max - y_min) * Y_PADDING;
        (y_min - pad, y_max + pad)
    }
}
