//! Built-in curves.

use ratatui::style::Color;

use crate::quadratic::CurveSpec;

/// A curve with the label and colour it is drawn with in the multi-curve demo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    /// Coefficients and domain.
    pub curve: CurveSpec,
    /// Legend label.
    pub label: &'static str,
    /// Line and vertex colour.
    pub color: Color,
}

impl Preset {
    const fn new(a: f64, b: f64, c: f64, label: &'static str, color: Color) -> Self {
        Self {
            curve: CurveSpec::new(a, b, c),
            label,
            color,
        }
    }
}

/// Curves overlaid by the multi-curve demo, in drawing order.
pub const PRESETS: [Preset; 5] = [
    Preset::new(1.0, 0.0, 0.0, "y = x²", Color::Rgb(31, 119, 180)),
    Preset::new(0.5, 0.0, 0.0, "y = 0.5x²", Color::Rgb(214, 39, 40)),
    Preset::new(-1.0, 0.0, 0.0, "y = -x²", Color::Rgb(44, 160, 44)),
    Preset::new(1.0, 2.0, 1.0, "y = x² + 2x + 1", Color::Rgb(255, 165, 0)),
    Preset::new(2.0, -4.0, 2.0, "y = 2x² - 4x + 2", Color::Rgb(148, 103, 189)),
];

/// Curve plotted by menu choice 2: `y = 2x² - 4x + 1`.
pub const DEMO_CURVE: CurveSpec = CurveSpec::new(2.0, -4.0, 1.0);

/// y range the multi-curve demo is clamped to.
pub const MULTI_Y_RANGE: (f64, f64) = (-20.0, 20.0);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quadratic::{vertex, DEFAULT_DOMAIN};

    #[test]
    fn test_presets_share_default_domain() {
        assert_eq!(PRESETS.len(), 5);
        assert!(PRESETS.iter().all(|p| p.curve.domain == DEFAULT_DOMAIN));
    }

    #[test]
    fn test_preset_colors_are_distinct() {
        for (i, p) in PRESETS.iter().enumerate() {
            for q in &PRESETS[i + 1..] {
                assert_ne!(p.color, q.color, "{} and {}", p.label, q.label);
            }
        }
    }

    #[test]
    fn test_preset_vertices() {
        let v = vertex(&PRESETS[3].curve).unwrap();
        assert_eq!(v.point(), (-1.0, 0.0));
        let v = vertex(&PRESETS[4].curve).unwrap();
        assert_eq!(v.point(), (1.0, 0.0));
    }
}
