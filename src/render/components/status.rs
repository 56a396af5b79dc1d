//! Single-row status blocks: badges, checklist rows and file headings

use crate::config::defaults::*;
use crate::config::PageGeometry;
use crate::error::RenderError;
use crate::model::Status;
use crate::render::backend::{Align, RenderBackend};
use crate::render::helpers::Theme;

pub struct StatusRenderer<'a> {
    theme: &'a Theme,
    geometry: PageGeometry,
}

impl<'a> StatusRenderer<'a> {
    pub fn new(theme: &'a Theme, geometry: PageGeometry) -> Self {
        Self { theme, geometry }
    }

    pub fn badge_height(&self) -> f32 {
        BADGE_ROW_HEIGHT + BADGE_GAP_AFTER
    }

    pub fn checklist_height(&self) -> f32 {
        CHECK_ROW_HEIGHT
    }

    pub fn file_height(&self) -> f32 {
        FILE_ROW_HEIGHT
    }

    pub fn badge_text(label: &str, status: Status) -> String {
        format!("  {}  {}", label, status.marker())
    }

    pub fn check_glyph(done: bool) -> &'static str {
        if done {
            "[x]"
        } else {
            "[ ]"
        }
    }

    pub fn file_text(path: &str, tag: Option<&str>) -> String {
        match tag {
            Some(tag) => format!("  {}  [{}]", path, tag),
            None => format!("  {}", path),
        }
    }

    pub fn render_badge<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        label: &str,
        status: Status,
        top: f32,
    ) -> Result<(), RenderError> {
        backend.set_font(&self.theme.fonts.badge);
        backend.set_text_color(self.theme.status_color(status));
        backend.draw_cell_text(
            self.geometry.left,
            top,
            self.geometry.printable_width(),
            BADGE_ROW_HEIGHT,
            &Self::badge_text(label, status),
            Align::Left,
        )
    }

    /// Colored check glyph in a fixed cell, then the label
    pub fn render_checklist<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        label: &str,
        done: bool,
        top: f32,
    ) -> Result<(), RenderError> {
        backend.set_font(&self.theme.fonts.check_glyph);
        backend.set_text_color(self.theme.check_color(done));
        backend.draw_cell_text(
            self.geometry.left,
            top,
            CHECK_GLYPH_WIDTH,
            CHECK_ROW_HEIGHT,
            Self::check_glyph(done),
            Align::Left,
        )?;

        backend.set_font(&self.theme.fonts.checklist_label);
        backend.set_text_color(self.theme.text_secondary);
        backend.draw_cell_text(
            self.geometry.left + CHECK_GLYPH_WIDTH,
            top,
            self.geometry.printable_width() - CHECK_GLYPH_WIDTH,
            CHECK_ROW_HEIGHT,
            label,
            Align::Left,
        )
    }

    pub fn render_file<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        path: &str,
        tag: Option<&str>,
        top: f32,
    ) -> Result<(), RenderError> {
        backend.set_font(&self.theme.fonts.file_heading);
        backend.set_text_color(self.theme.accent);
        backend.draw_cell_text(
            self.geometry.left,
            top,
            self.geometry.printable_width(),
            FILE_ROW_HEIGHT,
            &Self::file_text(path, tag),
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
    fn test_badge_text() {
        assert_eq!(
            StatusRenderer::badge_text("Service Layer", Status::InProgress),
            "  Service Layer  [IN PROGRESS]"
        );
    }

    #[test]
    fn test_file_text_with_and_without_tag() {
        assert_eq!(
            StatusRenderer::file_text("shared/js/active-mode.js", Some("NEW")),
            "  shared/js/active-mode.js  [NEW]"
        );
        assert_eq!(
            StatusRenderer::file_text("courses/dashboard/index.html", None),
            "  courses/dashboard/index.html"
        );
    }

    #[test]
    fn test_checklist_glyph_color_follows_flag() {
        let settings = Settings::default();
        let mut backend = RecordingBackend::new(&settings);
        backend.begin_document("Report").unwrap();
        backend.begin_page().unwrap();

        let renderer = StatusRenderer::new(&DARK_THEME, settings.geometry());
        renderer
            .render_checklist(&mut backend, "Toggle persists", true, 17.0)
            .unwrap();
        renderer
            .render_checklist(&mut backend, "Toggle hidden for users", false, 23.0)
            .unwrap();

        let glyphs: Vec<_> = backend.pages()[0]
            .commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, color, .. } if text.starts_with('[') => {
                    Some((text.clone(), *color))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            glyphs,
            vec![
                ("[x]".to_string(), DARK_THEME.success),
                ("[ ]".to_string(), DARK_THEME.danger),
            ]
        );
    }
}
