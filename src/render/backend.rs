//! Drawing surface used by the page-flow engine
//!
//! All coordinates are millimetres measured from the top-left corner of the
//! page, growing downward. Backends translate to their own coordinate space.

use crate::config::{defaults::CELL_PADDING, PageGeometry};
use crate::error::RenderError;

use super::helpers::{cell_baseline, wrap_styled, Rgb8, TextStyle};

/// Drawing position plus the page it belongs to (1-based)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
    pub page: usize,
}

/// Horizontal placement of text inside a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
}

/// Primitive operations a page-flow render needs from an output surface
pub trait RenderBackend {
    fn begin_document(&mut self, title: &str) -> Result<(), RenderError>;

    /// Append a page, make it current and move the cursor to the printable top
    fn begin_page(&mut self) -> Result<(), RenderError>;

    /// Make an existing page (1-based) the drawing target again
    fn select_page(&mut self, page: usize) -> Result<(), RenderError>;

    /// Finish the document and hand back its serialized bytes
    fn end_document(&mut self) -> Result<Vec<u8>, RenderError>;

    fn set_font(&mut self, style: &TextStyle);
    fn font(&self) -> TextStyle;
    fn set_text_color(&mut self, color: Rgb8);
    fn set_fill_color(&mut self, color: Rgb8);
    fn set_draw_color(&mut self, color: Rgb8);
    /// Stroke width in mm
    fn set_line_width(&mut self, width: f32);

    fn draw_filled_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<(), RenderError>;
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), RenderError>;

    /// Draw a single run of text with its baseline at `baseline`
    fn draw_text(&mut self, x: f32, baseline: f32, text: &str) -> Result<(), RenderError>;

    fn cursor(&self) -> Cursor;
    fn set_cursor(&mut self, x: f32, y: f32);
    fn page_count(&self) -> usize;
    fn geometry(&self) -> PageGeometry;

    fn cursor_position(&self) -> (f32, f32) {
        let cursor = self.cursor();
        (cursor.x, cursor.y)
    }

    fn page_number(&self) -> usize {
        self.cursor().page
    }

    /// Vertical space left above the auto-break margin
    fn remaining_height(&self) -> f32 {
        self.geometry().printable_bottom - self.cursor().y
    }

    /// Draw one line of text inside a cell, vertically centered
    fn draw_cell_text(
        &mut self,
        x: f32,
        top: f32,
        width: f32,
        height: f32,
        text: &str,
        align: Align,
    ) -> Result<(), RenderError> {
        let style = self.font();
        let text_x = match align {
            Align::Left => x + CELL_PADDING,
            Align::Center => x + (width - style.width_mm(text)) / 2.0,
        };
        self.draw_text(text_x, cell_baseline(top, height, style.size), text)
    }

    /// Wrap `text` to `width` with the current font and draw it line by line.
    /// With `filled`, the current fill color is painted behind the lines first.
    ///
    /// Returns the height consumed, `lines * line_height`.
    fn draw_wrapped_text(
        &mut self,
        x: f32,
        top: f32,
        width: f32,
        line_height: f32,
        text: &str,
        filled: bool,
    ) -> Result<f32, RenderError> {
        let style = self.font();
        let lines = wrap_styled(text, width - 2.0 * CELL_PADDING, &style);
        if filled {
            self.draw_filled_rect(x, top, width, lines.len() as f32 * line_height)?;
        }
        let mut y = top;
        for line in &lines {
            self.draw_cell_text(x, y, width, line_height, line, Align::Left)?;
            y += line_height;
        }
        Ok(lines.len() as f32 * line_height)
    }
}

/// Number of lines `text` occupies in a cell of `width` mm
pub fn wrapped_line_count(text: &str, width: f32, style: &TextStyle) -> usize {
    wrap_styled(text, width - 2.0 * CELL_PADDING, style).len()
}
