//! Color themes for the chart viewer.

use clap::ValueEnum;
use ratatui::style::Color;

/// Chart theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    Dark,
    /// Gruvbox light theme.
    Light,
}

impl Theme {
    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "Gruvbox Dark",
            Theme::Light => "Gruvbox Light",
        }
    }
}

/// Theme color palette for the chart chrome. Curve colours come from the
/// figure itself.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Axis label and tick text color.
    pub text: Color,
    /// Title color.
    pub heading: Color,
    /// Border color.
    pub border: Color,
    /// Grid line color.
    pub grid: Color,
    /// Zero axis line color.
    pub axis: Color,
    /// Footer foreground color.
    pub status_fg: Color,
    /// Footer background color.
    pub status_bg: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                border: Color::Rgb(102, 92, 84),
                grid: Color::Rgb(80, 73, 69),
                axis: Color::Rgb(213, 196, 161),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
            },
            Theme::Light => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                border: Color::Rgb(213, 196, 161),
                grid: Color::Rgb(235, 219, 178),
                axis: Color::Rgb(40, 40, 40),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
            },
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::from_theme(Theme::default())
    }
}
