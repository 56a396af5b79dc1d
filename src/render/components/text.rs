//! Wrapped text blocks: body paragraphs, bullets and definitions
//!
//! Measurement and drawing share [`wrapped_line_count`] and
//! [`RenderBackend::draw_wrapped_text`], which wrap with the same routine and
//! cell padding, so the drawn line count never exceeds the measured one.

use crate::config::defaults::*;
use crate::config::PageGeometry;
use crate::error::RenderError;
use crate::render::backend::{wrapped_line_count, Align, RenderBackend};
use crate::render::helpers::Theme;

const BULLET_MARKER: &str = ">";

pub struct TextRenderer<'a> {
    theme: &'a Theme,
    geometry: PageGeometry,
}

impl<'a> TextRenderer<'a> {
    pub fn new(theme: &'a Theme, geometry: PageGeometry) -> Self {
        Self { theme, geometry }
    }

    pub fn body_height(&self, text: &str) -> f32 {
        let lines = wrapped_line_count(
            text,
            self.geometry.printable_width(),
            &self.theme.fonts.body,
        );
        lines as f32 * BODY_LINE_HEIGHT + BODY_GAP_AFTER
    }

    pub fn render_body<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        text: &str,
        top: f32,
    ) -> Result<(), RenderError> {
        backend.set_font(&self.theme.fonts.body);
        backend.set_text_color(self.theme.text_secondary);
        backend.draw_wrapped_text(
            self.geometry.left,
            top,
            self.geometry.printable_width(),
            BODY_LINE_HEIGHT,
            text,
            false,
        )?;
        Ok(())
    }

    /// Text cell position and width for a bullet with the given indent
    fn bullet_text_cell(&self, indent: Option<f32>) -> (f32, f32) {
        let indent = indent.unwrap_or(BULLET_INDENT);
        let x = self.geometry.left + indent + BULLET_MARKER_WIDTH;
        (x, self.geometry.right - x)
    }

    pub fn bullet_height(&self, text: &str, indent: Option<f32>) -> f32 {
        let (_, width) = self.bullet_text_cell(indent);
        let lines = wrapped_line_count(text, width, &self.theme.fonts.body);
        lines as f32 * BODY_LINE_HEIGHT + BULLET_GAP_AFTER
    }

    /// Accent marker followed by text wrapped under itself
    pub fn render_bullet<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        text: &str,
        indent: Option<f32>,
        top: f32,
    ) -> Result<(), RenderError> {
        let (text_x, width) = self.bullet_text_cell(indent);

        backend.set_font(&self.theme.fonts.bullet_marker);
        backend.set_text_color(self.theme.accent);
        backend.draw_cell_text(
            text_x - BULLET_MARKER_WIDTH,
            top,
            BULLET_MARKER_WIDTH,
            BODY_LINE_HEIGHT,
            BULLET_MARKER,
            Align::Left,
        )?;

        backend.set_font(&self.theme.fonts.body);
        backend.set_text_color(self.theme.text_secondary);
        backend.draw_wrapped_text(text_x, top, width, BODY_LINE_HEIGHT, text, false)?;
        Ok(())
    }

    fn description_width(&self) -> f32 {
        self.geometry.printable_width() - DEFINITION_INDENT
    }

    fn description_lines(&self, description: &str) -> usize {
        if description.trim().is_empty() {
            return 0;
        }
        wrapped_line_count(
            description,
            self.description_width(),
            &self.theme.fonts.definition_body,
        )
    }

    pub fn definition_height(&self, description: &str) -> f32 {
        DEFINITION_ROW_HEIGHT
            + self.description_lines(description) as f32 * DEFINITION_LINE_HEIGHT
            + DEFINITION_GAP_AFTER
    }

    /// Monospace term row with a muted, indented description underneath
    pub fn render_definition<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        term: &str,
        description: &str,
        top: f32,
    ) -> Result<(), RenderError> {
        backend.set_font(&self.theme.fonts.definition_term);
        backend.set_text_color(self.theme.code_text);
        backend.draw_cell_text(
            self.geometry.left,
            top,
            self.geometry.printable_width(),
            DEFINITION_ROW_HEIGHT,
            &format!("  {}", term),
            Align::Left,
        )?;

        if self.description_lines(description) == 0 {
            return Ok(());
        }

        backend.set_font(&self.theme.fonts.definition_body);
        backend.set_text_color(self.theme.text_muted);
        backend.draw_wrapped_text(
            self.geometry.left + DEFINITION_INDENT,
            top + DEFINITION_ROW_HEIGHT,
            self.description_width(),
            DEFINITION_LINE_HEIGHT,
            description,
            false,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::render::helpers::DARK_THEME;
    use crate::render::recording::{DrawCommand, RecordingBackend};

    fn renderer() -> TextRenderer<'static> {
        TextRenderer::new(&DARK_THEME, Settings::default().geometry())
    }

    fn open_backend() -> RecordingBackend {
        let mut backend = RecordingBackend::new(&Settings::default());
        backend.begin_document("Report").unwrap();
        backend.begin_page().unwrap();
        backend
    }

    #[test]
    fn test_short_body_is_one_line() {
        assert!((renderer().body_height("Short paragraph.") - 7.5).abs() < 1e-4);
    }

    #[test]
    fn test_hard_breaks_add_lines() {
        let height = renderer().body_height("one\ntwo\nthree");
        assert!((height - (3.0 * 5.5 + 2.0)).abs() < 1e-4);
    }

    #[test]
    fn test_bullet_wraps_narrower_than_body() {
        let text = "word ".repeat(60);
        let r = renderer();
        let body_lines = (r.body_height(&text) - BODY_GAP_AFTER) / BODY_LINE_HEIGHT;
        let bullet_lines = (r.bullet_height(&text, None) - BULLET_GAP_AFTER) / BODY_LINE_HEIGHT;
        assert!(bullet_lines >= body_lines);
    }

    #[test]
    fn test_drawn_lines_match_measured_lines() {
        let text = "The active mode is persisted to Firestore on the user document and cached \
                    in localStorage to prevent visual flash on page load. A red-accented pill \
                    toggle is dynamically injected into the sidebar on every dashboard page.";
        let r = renderer();
        let mut backend = open_backend();
        r.render_body(&mut backend, text, 17.0).unwrap();

        let drawn = backend.pages()[0].texts().count() as f32;
        let measured = (r.body_height(text) - BODY_GAP_AFTER) / BODY_LINE_HEIGHT;
        assert!((drawn - measured).abs() < 1e-4);
    }

    #[test]
    fn test_bullet_marker_sits_at_indent() {
        let r = renderer();
        let mut backend = open_backend();
        r.render_bullet(&mut backend, "Admin Mode", Some(20.0), 17.0)
            .unwrap();
        match &backend.pages()[0].commands[0] {
            DrawCommand::Text { x, text, color, .. } => {
                assert_eq!(text, ">");
                assert!((x - (10.0 + 20.0 + CELL_PADDING)).abs() < 1e-4);
                assert_eq!(*color, DARK_THEME.accent);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_definition_without_description() {
        let r = renderer();
        assert_eq!(r.definition_height(""), 6.0);
        let mut backend = open_backend();
        r.render_definition(&mut backend, "#feedFilter", "", 17.0)
            .unwrap();
        assert_eq!(backend.pages()[0].texts().count(), 1);
    }
}
