//! Chart rendering.
//!
//! [`FigureView`] turns a [`Figure`] into a ratatui `Chart`; the
//! [`Renderer`] implementations decide where that chart is drawn.

mod headless;
mod terminal;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Widget},
};

use crate::error::Result;
use crate::figure::Figure;
use crate::quadratic::linspace;
use crate::theme::ThemeColors;

pub use headless::{render_to_text, TextRenderer, HEADLESS_HEIGHT, HEADLESS_WIDTH};
pub use terminal::TerminalRenderer;

/// Number of labelled ticks per axis.
const TICKS: usize = 5;

/// Something that can put a [`Figure`] in front of the user.
pub trait Renderer {
    /// Display `figure`. May block until the user dismisses it.
    fn show(&mut self, figure: &Figure) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        (**self).show(figure)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        (**self).show(figure)
    }
}

/// Widget drawing a figure as a bordered chart.
#[derive(Debug, Clone, Copy)]
pub struct FigureView<'a> {
    figure: &'a Figure,
    colors: &'a ThemeColors,
}

impl<'a> FigureView<'a> {
    /// Create a view of `figure` using the given palette.
    pub fn new(figure: &'a Figure, colors: &'a ThemeColors) -> Self {
        Self { figure, colors }
    }
}

impl Widget for FigureView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let figure = self.figure;
        let colors = self.colors;
        let (x_min, x_max) = figure.x_range;
        let (y_min, y_max) = figure.y_bounds();
        let x_ticks = ticks(x_min, x_max);
        let y_ticks = ticks(y_min, y_max);

        // Guide lines: grid first, then zero axes on top of it
        let mut guides: Vec<(Vec<(f64, f64)>, Style)> = Vec::new();
        if figure.grid {
            let style = Style::default().fg(colors.grid);
            for &x in &x_ticks {
                guides.push((vec![(x, y_min), (x, y_max)], style));
            }
            for &y in &y_ticks {
                guides.push((vec![(x_min, y), (x_max, y)], style));
            }
        }
        if figure.zero_axes {
            let style = Style::default().fg(colors.axis);
            if x_min <= 0.0 && 0.0 <= x_max {
                guides.push((vec![(0.0, y_min), (0.0, y_max)], style));
            }
            if y_min <= 0.0 && 0.0 <= y_max {
                guides.push((vec![(x_min, 0.0), (x_max, 0.0)], style));
            }
        }
        let marker_points: Vec<[(f64, f64); 1]> =
            figure.markers.iter().map(|m| [m.point]).collect();

        let mut datasets: Vec<Dataset<'_>> = guides
            .iter()
            .map(|(points, style)| {
                Dataset::default()
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(*style)
                    .data(points)
            })
            .collect();

        for series in &figure.series {
            let mut style = Style::default().fg(series.color);
            if series.width >= 2 {
                style = style.add_modifier(Modifier::BOLD);
            }
            let mut dataset = Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(style)
                .data(&series.points);
            if let Some(label) = &series.label {
                dataset = dataset.name(label.as_str());
            }
            datasets.push(dataset);
        }

        for (marker, point) in figure.markers.iter().zip(&marker_points) {
            let symbol = if marker.size >= 8 {
                symbols::Marker::Block
            } else {
                symbols::Marker::Dot
            };
            let mut dataset = Dataset::default()
                .marker(symbol)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(marker.color))
                .data(point);
            if let Some(label) = &marker.label {
                dataset = dataset.name(label.as_str());
            }
            datasets.push(dataset);
        }

        let text = Style::default().fg(colors.text);
        let x_axis = Axis::default()
            .title(figure.x_label.as_str())
            .style(text)
            .bounds([x_min, x_max])
            .labels(x_ticks.iter().map(|&v| format_axis_label(v)));
        let y_axis = Axis::default()
            .title(figure.y_label.as_str())
            .style(text)
            .bounds([y_min, y_max])
            .labels(y_ticks.iter().map(|&v| format_axis_label(v)));

        let legend_position = figure.legend.then_some(LegendPosition::TopRight);

        Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors.border))
                    .title(format!(" {} ", figure.title))
                    .title_style(Style::default().fg(colors.heading)),
            )
            .style(Style::default().bg(colors.bg))
            .x_axis(x_axis)
            .y_axis(y_axis)
            .legend_position(legend_position)
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
            .render(area, buf);
    }
}

/// Evenly spaced tick positions from `min` to `max` inclusive.
fn ticks(min: f64, max: f64) -> Vec<f64> {
    linspace(min, max, TICKS).collect()
}

/// Format axis label with smart precision.
fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val < 1e-9 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{LineSeries, PointMarker};
    use ratatui::style::Color;

    fn parabola_figure() -> Figure {
        let points = (0..=40)
            .map(|i| {
                let x = -10.0 + i as f64 * 0.5;
                (x, x * x)
            })
            .collect();
        let mut fig = Figure::new("Parabol: y = 1x² + 0x + 0", (-10.0, 10.0));
        fig.push_series(LineSeries {
            label: Some("y = 1x² + 0x + 0".to_string()),
            color: Color::Blue,
            width: 2,
            points,
        });
        fig.push_marker(PointMarker {
            label: Some("Tepe Noktası (0.00, 0.00)".to_string()),
            color: Color::Red,
            size: 8,
            point: (0.0, 0.0),
        });
        fig
    }

    #[test]
    fn test_ticks_span_range() {
        assert_eq!(ticks(-10.0, 10.0), vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
        assert!(ticks(-1e308, 1e308).iter().all(|t| t.is_finite()));
    }

    #[test]
    fn test_format_axis_label() {
        assert_eq!(format_axis_label(0.0), "0");
        assert_eq!(format_axis_label(-5.0), "-5.0");
        assert_eq!(format_axis_label(105.0), "105");
        assert_eq!(format_axis_label(0.25), "0.25");
        assert_eq!(format_axis_label(2.5e6), "2.5e6");
        assert_eq!(format_axis_label(f64::NAN), "?");
    }

    #[test]
    fn test_render_draws_title_and_legend() {
        let text = render_to_text(&parabola_figure(), &ThemeColors::default(), 100, 32);
        assert!(text.contains("Parabol: y = 1x² + 0x + 0"));
        assert!(text.contains("Tepe Noktası (0.00, 0.00)"));
        assert_eq!(text.lines().count(), 32);
    }

    #[test]
    fn test_render_without_legend_hides_labels() {
        let mut fig = parabola_figure();
        fig.legend = false;
        let text = render_to_text(&fig, &ThemeColors::default(), 100, 32);
        assert!(!text.contains("Tepe Noktası"));
    }
}
