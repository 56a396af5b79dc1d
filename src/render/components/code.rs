//! Code block renderer
//!
//! Code is drawn in the mono font on a filled background. Each source line
//! starts a row and keeps its spacing; lines wider than the fill wrap onto
//! extra rows. The block is never split across pages.

use crate::config::defaults::*;
use crate::config::PageGeometry;
use crate::error::RenderError;
use crate::render::backend::{Align, RenderBackend};
use crate::render::helpers::{wrap_preformatted, Theme};

pub struct CodeBlockRenderer<'a> {
    theme: &'a Theme,
    geometry: PageGeometry,
}

impl<'a> CodeBlockRenderer<'a> {
    pub fn new(theme: &'a Theme, geometry: PageGeometry) -> Self {
        Self { theme, geometry }
    }

    fn fill_width(&self) -> f32 {
        self.geometry.printable_width() - 2.0 * CODE_INSET
    }

    /// Rows of `text` as drawn inside the fill; a trailing newline does not
    /// add a row
    pub fn rows(&self, text: &str) -> Vec<String> {
        let style = &self.theme.fonts.code;
        wrap_preformatted(
            text,
            self.fill_width() - 2.0 * CELL_PADDING,
            style.measurer(),
            style.size,
        )
    }

    pub fn height(&self, text: &str) -> f32 {
        self.rows(text).len() as f32 * CODE_LINE_HEIGHT + CODE_GAP_AFTER
    }

    pub fn render<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        text: &str,
        top: f32,
    ) -> Result<(), RenderError> {
        let x = self.geometry.left + CODE_INSET;
        let width = self.fill_width();
        let rows = self.rows(text);
        let fill_height = rows.len() as f32 * CODE_LINE_HEIGHT;

        backend.set_fill_color(self.theme.bg_code);
        backend.draw_filled_rect(x, top, width, fill_height)?;

        backend.set_font(&self.theme.fonts.code);
        backend.set_text_color(self.theme.code_text);
        let mut y = top;
        for row in &rows {
            backend.draw_cell_text(x, y, width, CODE_LINE_HEIGHT, row, Align::Left)?;
            y += CODE_LINE_HEIGHT;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::render::helpers::DARK_THEME;
    use crate::render::recording::{DrawCommand, RecordingBackend};

    #[test]
    fn test_height_counts_source_lines() {
        let renderer = CodeBlockRenderer::new(&DARK_THEME, Settings::default().geometry());
        let text = "fn main() {\n    println!(\"hi\");\n}\n";
        assert_eq!(renderer.rows(text).len(), 3);
        assert!((renderer.height(text) - (3.0 * 4.5 + 3.0)).abs() < 1e-4);
    }

    #[test]
    fn test_long_line_wraps_inside_fill() {
        let settings = Settings::default();
        let renderer = CodeBlockRenderer::new(&DARK_THEME, settings.geometry());
        let text = "x".repeat(300);

        let rows = renderer.rows(&text);
        assert!(rows.len() > 1);
        assert_eq!(rows.concat(), text);
        for row in &rows {
            assert!(DARK_THEME.fonts.code.width_mm(row) <= 180.0 - 2.0 * CELL_PADDING + 1e-3);
        }
        let expected = rows.len() as f32 * CODE_LINE_HEIGHT + CODE_GAP_AFTER;
        assert!((renderer.height(&text) - expected).abs() < 1e-4);

        let mut backend = RecordingBackend::new(&settings);
        backend.begin_document("Report").unwrap();
        backend.begin_page().unwrap();
        renderer.render(&mut backend, &text, 40.0).unwrap();

        let page = &backend.pages()[0];
        assert!(matches!(
            page.commands[0],
            DrawCommand::Rect { h, .. } if (h - rows.len() as f32 * CODE_LINE_HEIGHT).abs() < 1e-4
        ));
        assert_eq!(page.texts().count(), rows.len());
    }

    #[test]
    fn test_background_spans_block() {
        let settings = Settings::default();
        let mut backend = RecordingBackend::new(&settings);
        backend.begin_document("Report").unwrap();
        backend.begin_page().unwrap();

        let renderer = CodeBlockRenderer::new(&DARK_THEME, settings.geometry());
        renderer
            .render(&mut backend, "a\n  b\nc", 40.0)
            .unwrap();

        let page = &backend.pages()[0];
        assert!(matches!(
            page.commands[0],
            DrawCommand::Rect { x, y, w, h, color }
                if x == 15.0 && y == 40.0 && w == 180.0 && (h - 13.5).abs() < 1e-4
                    && color == DARK_THEME.bg_code
        ));
        let texts: Vec<_> = page.texts().collect();
        assert_eq!(texts, vec!["a", "  b", "c"]);
    }
}
