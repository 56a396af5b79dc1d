//! Section and sub-section headings

use crate::config::defaults::*;
use crate::config::PageGeometry;
use crate::error::RenderError;
use crate::render::backend::{Align, RenderBackend};
use crate::render::helpers::Theme;

/// Underline stroke under section titles
const SECTION_RULE_WIDTH: f32 = 0.4;

/// Renderer for section and sub-section headings
pub struct HeadingRenderer<'a> {
    theme: &'a Theme,
    geometry: PageGeometry,
}

impl<'a> HeadingRenderer<'a> {
    pub fn new(theme: &'a Theme, geometry: PageGeometry) -> Self {
        Self { theme, geometry }
    }

    pub fn section_height(&self) -> f32 {
        SECTION_GAP_BEFORE + SECTION_ROW_HEIGHT + SECTION_GAP_AFTER
    }

    pub fn sub_height(&self) -> f32 {
        SUB_GAP_BEFORE + SUB_ROW_HEIGHT + SUB_GAP_AFTER
    }

    /// Large primary title with a short accent underline
    pub fn render_section<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        title: &str,
        top: f32,
    ) -> Result<(), RenderError> {
        let row_top = top + SECTION_GAP_BEFORE;

        backend.set_font(&self.theme.fonts.section);
        backend.set_text_color(self.theme.text_primary);
        backend.draw_cell_text(
            self.geometry.left,
            row_top,
            self.geometry.printable_width(),
            SECTION_ROW_HEIGHT,
            title,
            Align::Left,
        )?;

        let rule_y = row_top + SECTION_ROW_HEIGHT;
        let rule_end = self.geometry.left + self.geometry.page_width * SECTION_RULE_RATIO;
        backend.set_draw_color(self.theme.accent);
        backend.set_line_width(SECTION_RULE_WIDTH);
        backend.draw_line(self.geometry.left, rule_y, rule_end, rule_y)
    }

    pub fn render_sub<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        title: &str,
        top: f32,
    ) -> Result<(), RenderError> {
        backend.set_font(&self.theme.fonts.sub);
        backend.set_text_color(self.theme.accent);
        backend.draw_cell_text(
            self.geometry.left,
            top + SUB_GAP_BEFORE,
            self.geometry.printable_width(),
            SUB_ROW_HEIGHT,
            title,
            Align::Left,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::render::helpers::DARK_THEME;
    use crate::render::recording::{DrawCommand, RecordingBackend};

    #[test]
    fn test_heading_heights() {
        let renderer = HeadingRenderer::new(&DARK_THEME, Settings::default().geometry());
        assert_eq!(renderer.section_height(), 18.0);
        assert_eq!(renderer.sub_height(), 11.0);
    }

    #[test]
    fn test_section_underline_spans_fixed_fraction() {
        let settings = Settings::default();
        let mut backend = RecordingBackend::new(&settings);
        backend.begin_document("Report").unwrap();
        backend.begin_page().unwrap();

        let renderer = HeadingRenderer::new(&DARK_THEME, settings.geometry());
        renderer
            .render_section(&mut backend, "1. Feature Overview", 17.0)
            .unwrap();

        match &backend.pages()[0].commands[1] {
            DrawCommand::Line { x1, y1, x2, .. } => {
                assert_eq!(*x1, 10.0);
                assert_eq!(*y1, 31.0);
                assert!((x2 - 84.97).abs() < 0.01);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
