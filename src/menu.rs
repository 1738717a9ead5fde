//! Main menu.

use std::io::{self, Write};

/// Program banner printed above the menu.
pub const BANNER: &str = "Parabol Çizici Programı";

/// Selection prompt.
pub const PROMPT: &str = "\nSeçiminizi yapın (1-4): ";

/// Warning printed before falling back to the default curve.
pub const INVALID_CHOICE: &str = "Geçersiz seçim! Basit parabol çiziliyor...";

/// What the user can pick from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `y = x²` over `[-10, 10]`.
    DefaultCurve,
    /// `y = 2x² - 4x + 1` over `[-10, 10]`.
    DemoCurve,
    /// All presets overlaid.
    MultiCurve,
    /// Coefficients entered at the prompt.
    Interactive,
}

impl MenuChoice {
    /// All choices in menu order.
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::DefaultCurve,
        MenuChoice::DemoCurve,
        MenuChoice::MultiCurve,
        MenuChoice::Interactive,
    ];

    /// Match a selection exactly; no trimming, no case folding.
    pub fn parse(selection: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.key() == selection)
    }

    /// The token that selects this choice.
    pub fn key(self) -> &'static str {
        match self {
            MenuChoice::DefaultCurve => "1",
            MenuChoice::DemoCurve => "2",
            MenuChoice::MultiCurve => "3",
            MenuChoice::Interactive => "4",
        }
    }

    /// Menu entry text.
    pub fn description(self) -> &'static str {
        match self {
            MenuChoice::DefaultCurve => "Basit parabol (y = x²)",
            MenuChoice::DemoCurve => "Özel parabol (kendi parametrelerinizle)",
            MenuChoice::MultiCurve => "Çoklu parabol örnekleri",
            MenuChoice::Interactive => "İnteraktif mod",
        }
    }
}

/// Print the banner and the numbered entries.
pub fn write_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", BANNER)?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.key(), choice.description())?;
    }
    Ok(())
}
