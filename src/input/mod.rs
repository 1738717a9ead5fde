//! Line input and numeric field parsing.
//!
//! Prompts are answered one line at a time through a [`LineSource`]. When
//! stdin is a terminal, [`RawTerminalLines`] reads keys in raw mode so that
//! Ctrl+C surfaces as [`PlotError::Interrupted`] instead of killing the
//! process; otherwise [`ReaderLines`] reads from any `BufRead`.

mod raw;

use std::io::BufRead;

use crate::error::{PlotError, Result};

pub use raw::RawTerminalLines;

/// A source of answers to prompts.
pub trait LineSource {
    /// Read one line without its terminator.
    ///
    /// Fails with `Interrupted` on Ctrl+C or end of input.
    fn read_line(&mut self) -> Result<String>;
}

impl<L: LineSource + ?Sized> LineSource for &mut L {
    fn read_line(&mut self) -> Result<String> {
        (**self).read_line()
    }
}

impl<L: LineSource + ?Sized> LineSource for Box<L> {
    fn read_line(&mut self) -> Result<String> {
        (**self).read_line()
    }
}

/// Lines from a buffered reader, such as a locked stdin or a byte slice.
#[derive(Debug)]
pub struct ReaderLines<R> {
    reader: R,
}

impl<R: BufRead> ReaderLines<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn read_line(&mut self) -> Result<String> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            tracing::debug!("end of input");
            return Err(PlotError::Interrupted);
        }
        // Undecodable bytes become U+FFFD and fail parsing like any other text
        let line = String::from_utf8_lossy(&bytes);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

/// Parse a required numeric field. Surrounding whitespace is ignored; blank,
/// non-numeric and non-finite input is rejected.
pub fn parse_required(field: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| PlotError::invalid_input(field, raw))
}

/// Parse an optional numeric field, using `default` only when the entry is
/// empty. Whitespace alone is invalid.
pub fn parse_optional(field: &str, raw: &str, default: f64) -> Result<f64> {
    if raw.is_empty() {
        Ok(default)
    } else {
        parse_required(field, raw)
    }
}
