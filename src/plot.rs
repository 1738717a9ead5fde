//! Curve drivers: turn curves into figures.
//!
//! Both builders sample every curve up front, so an invalid domain or sample
//! count is reported before anything is drawn.

use ratatui::style::Color;

use crate::error::Result;
use crate::figure::{Figure, LineSeries, PointMarker};
use crate::presets::{Preset, MULTI_Y_RANGE};
use crate::quadratic::{describe, sample, vertex, CurveSpec, Vertex, DEFAULT_DOMAIN};

/// Line colour of a single plotted curve.
pub const CURVE_COLOR: Color = Color::Rgb(31, 119, 180);

/// Marker colour of a single curve's vertex.
pub const VERTEX_COLOR: Color = Color::Rgb(214, 39, 40);

/// Title of the multi-curve demo.
pub const MULTI_TITLE: &str = "Farklı Parabol Örnekleri";

/// Legend label of a vertex marker.
pub fn vertex_label(v: &Vertex) -> String {
    format!("Tepe Noktası ({:.2}, {:.2})", v.x, v.y)
}

/// One curve with its labelled vertex, auto-scaled.
pub fn single_curve_figure(spec: &CurveSpec, samples: usize) -> Result<Figure> {
    let curve = sample(spec, samples)?;
    let label = describe(spec);

    let mut figure = Figure::new(
        format!("Parabol: {}", label),
        (spec.domain.x_min, spec.domain.x_max),
    );
    figure.push_series(LineSeries {
        label: Some(label),
        color: CURVE_COLOR,
        width: 2,
        points: curve.into_points(),
    });

    if let Some(v) = vertex(spec) {
        figure.push_marker(PointMarker {
            label: Some(vertex_label(&v)),
            color: VERTEX_COLOR,
            size: 8,
            point: v.point(),
        });
    }

    Ok(figure)
}

/// Every preset over `[-10, 10]`, each with an unlabelled vertex marker in
/// its own colour, y clamped to `[-20, 20]`.
pub fn multi_curve_figure(presets: &[Preset], samples: usize) -> Result<Figure> {
    let mut figure = Figure::new(MULTI_TITLE, (DEFAULT_DOMAIN.x_min, DEFAULT_DOMAIN.x_max))
        .with_y_range(MULTI_Y_RANGE);

    for preset in presets {
        let spec = preset.curve.with_domain(DEFAULT_DOMAIN);
        let curve = sample(&spec, samples)?;
        figure.push_series(LineSeries {
            label: Some(preset.label.to_string()),
            color: preset.color,
            width: 2,
            points: curve.into_points(),
        });

        if let Some(v) = vertex(&spec) {
            figure.push_marker(PointMarker {
                label: None,
                color: preset.color,
                size: 6,
                point: v.point(),
            });
        }
    }

    tracing::debug!(curves = presets.len(), "built multi-curve figure");
    Ok(figure)
}
