//! Full-screen chart viewer.

use std::io::{self, Stdout};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::Style,
    widgets::Paragraph,
    Frame, Terminal,
};

use super::{FigureView, Renderer};
use crate::error::{PlotError, Result};
use crate::figure::Figure;
use crate::theme::ThemeColors;

const KEYMAP: &str = "Kapatmak için bir tuşa basın | Ctrl+C: çıkış";

/// Renderer that shows the chart on the alternate screen and blocks until a
/// key is pressed.
#[derive(Debug)]
pub struct TerminalRenderer {
    colors: ThemeColors,
}

impl TerminalRenderer {
    /// Create a viewer using the given palette.
    pub fn new(colors: ThemeColors) -> Self {
        Self { colors }
    }
}

impl Renderer for TerminalRenderer {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        tracing::debug!(title = %figure.title, "opening chart viewer");
        let mut screen = Screen::enter()?;

        loop {
            screen
                .terminal
                .draw(|f| draw(f, figure, &self.colors))?;

            // Anything other than a key press (resize, focus) just redraws
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                return match (key.modifiers, key.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Err(PlotError::Interrupted),
                    _ => {
                        tracing::debug!("chart viewer dismissed");
                        Ok(())
                    }
                };
            }
        }
    }
}

fn draw(f: &mut Frame<'_>, figure: &Figure, colors: &ThemeColors) {
    let [chart_area, keymap_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(f.area());

    f.render_widget(FigureView::new(figure, colors), chart_area);

    let keymap =
        Paragraph::new(KEYMAP).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));
    f.render_widget(keymap, keymap_area);
}

/// Raw mode plus alternate screen, restored on drop.
struct Screen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Screen {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(err.into())
            }
        }
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
