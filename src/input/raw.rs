//! Minimal line editor on top of crossterm raw mode.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveLeft,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};
use unicode_width::UnicodeWidthChar;

use super::LineSource;
use crate::error::{PlotError, Result};

/// Reads lines from the terminal key by key, echoing input itself.
///
/// Supports typing, Backspace and Enter. Ctrl+C, and Ctrl+D on an empty
/// line, fail with `Interrupted`.
#[derive(Debug, Default)]
pub struct RawTerminalLines;

impl RawTerminalLines {
    /// Create a terminal line reader.
    pub fn new() -> Self {
        Self
    }
}

impl LineSource for RawTerminalLines {
    fn read_line(&mut self) -> Result<String> {
        let _raw = RawMode::enable()?;
        let mut stdout = io::stdout();
        let mut buffer = String::new();

        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                    return Err(PlotError::Interrupted);
                }
                (KeyModifiers::CONTROL, KeyCode::Char('d')) if buffer.is_empty() => {
                    return Err(PlotError::Interrupted);
                }
                (_, KeyCode::Enter) => {
                    write!(stdout, "\r\n")?;
                    stdout.flush()?;
                    return Ok(buffer);
                }
                (_, KeyCode::Backspace) => {
                    if let Some(c) = buffer.pop() {
                        let cols = c.width().unwrap_or(0) as u16;
                        if cols > 0 {
                            execute!(stdout, MoveLeft(cols), Clear(ClearType::UntilNewLine))?;
                        }
                    }
                }
                (modifiers, KeyCode::Char(c)) if !modifiers.contains(KeyModifiers::CONTROL) => {
                    buffer.push(c);
                    write!(stdout, "{}", c)?;
                    stdout.flush()?;
                }
                _ => {}
            }
        }
    }
}

/// Raw mode for the duration of one line.
struct RawMode;

impl RawMode {
    fn enable() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}
