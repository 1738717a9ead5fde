//! Plain-text rendering for pipes, logs and tests.

use std::io::Write;

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::{FigureView, Renderer};
use crate::error::Result;
use crate::figure::Figure;
use crate::theme::ThemeColors;

/// Default headless canvas width in cells.
pub const HEADLESS_WIDTH: u16 = 100;
/// Default headless canvas height in cells.
pub const HEADLESS_HEIGHT: u16 = 32;

/// Renderer that draws off-screen and writes the cells as text. Returns
/// immediately.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
    colors: ThemeColors,
    width: u16,
    height: u16,
}

impl<W: Write> TextRenderer<W> {
    /// Create a renderer writing to `out` at the default size.
    pub fn new(out: W, colors: ThemeColors) -> Self {
        Self {
            out,
            colors,
            width: HEADLESS_WIDTH,
            height: HEADLESS_HEIGHT,
        }
    }

    /// Override the canvas size.
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Consume the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        tracing::debug!(title = %figure.title, "rendering figure as text");
        let text = render_to_text(figure, &self.colors, self.width, self.height);
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Draw `figure` into a `width` x `height` buffer and return its rows, with
/// trailing blanks trimmed.
pub fn render_to_text(figure: &Figure, colors: &ThemeColors, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    FigureView::new(figure, colors).render(area, &mut buf);

    let mut text = String::with_capacity((usize::from(width) + 1) * usize::from(height));
    for y in area.top()..area.bottom() {
        let row: String = (area.left()..area.right())
            .map(|x| buf.cell((x, y)).map_or(" ", |cell| cell.symbol()))
            .collect();
        text.push_str(row.trim_end());
        text.push('\n');
    }
    text
}
