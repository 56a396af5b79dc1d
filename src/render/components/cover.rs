//! Cover page renderer
//!
//! The cover owns its whole page. Everything is laid out from the printable
//! top in a fixed vertical rhythm: accent bar, centered title lines, short
//! rule, subtitle, metadata lines and finally the purpose card.

use crate::config::PageGeometry;
use crate::error::RenderError;
use crate::model::CoverPage;
use crate::render::backend::{wrapped_line_count, Align, RenderBackend};
use crate::render::helpers::Theme;

/// Blank space above the accent bar
const TOP_SPACE: f32 = 35.0;
/// Accent bar above the title
const BAR_HALF_LENGTH: f32 = 65.0;
const BAR_WIDTH: f32 = 2.0;
const BAR_GAP: f32 = 8.0;

const TITLE_LINE_HEIGHT: f32 = 14.0;
const TITLE_GAP: f32 = 6.0;

/// Short rule between the title and subtitle
const RULE_HALF_LENGTH: f32 = 35.0;
const RULE_WIDTH: f32 = 0.5;
const RULE_GAP: f32 = 10.0;

const SUBTITLE_HEIGHT: f32 = 8.0;
const META_GAP: f32 = 2.0;
const META_HEIGHT: f32 = 8.0;

/// Space between the metadata and the purpose card
const CARD_SPACE: f32 = 30.0;
const CARD_INSET: f32 = 5.0;
const CARD_PADDING: f32 = 5.0;
const CARD_MIN_HEIGHT: f32 = 38.0;
const CARD_TITLE_OFFSET: f32 = 4.0;
const CARD_TITLE_HEIGHT: f32 = 6.0;
const CARD_LINE_HEIGHT: f32 = 5.0;
const CARD_BOTTOM_PADDING: f32 = 4.0;

pub struct CoverRenderer<'a> {
    theme: &'a Theme,
    geometry: PageGeometry,
}

impl<'a> CoverRenderer<'a> {
    pub fn new(theme: &'a Theme, geometry: PageGeometry) -> Self {
        Self { theme, geometry }
    }

    /// A cover claims the full printable height, or more when its content
    /// runs past the printable bottom
    pub fn height(&self, cover: &CoverPage) -> f32 {
        self.geometry.printable_height().max(self.extent(cover))
    }

    /// Distance from the block top to the bottom of the purpose card
    fn extent(&self, cover: &CoverPage) -> f32 {
        TOP_SPACE
            + BAR_GAP
            + cover.title_lines.len() as f32 * TITLE_LINE_HEIGHT
            + TITLE_GAP
            + RULE_GAP
            + SUBTITLE_HEIGHT
            + cover.metadata.len() as f32 * (META_GAP + META_HEIGHT)
            + CARD_SPACE
            + self.card_height(cover)
    }

    fn card_body_width(&self) -> f32 {
        self.geometry.printable_width() - 2.0 * (CARD_INSET + CARD_PADDING)
    }

    pub fn card_height(&self, cover: &CoverPage) -> f32 {
        let lines = wrapped_line_count(
            &cover.purpose.body,
            self.card_body_width(),
            &self.theme.fonts.card_body,
        );
        let content = CARD_TITLE_OFFSET
            + CARD_TITLE_HEIGHT
            + lines as f32 * CARD_LINE_HEIGHT
            + CARD_BOTTOM_PADDING;
        content.max(CARD_MIN_HEIGHT)
    }

    pub fn render<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        cover: &CoverPage,
        top: f32,
    ) -> Result<(), RenderError> {
        let left = self.geometry.left;
        let width = self.geometry.printable_width();
        let center = self.geometry.page_width / 2.0;
        let mut y = top + TOP_SPACE;

        backend.set_draw_color(self.theme.accent);
        backend.set_line_width(BAR_WIDTH);
        backend.draw_line(center - BAR_HALF_LENGTH, y, center + BAR_HALF_LENGTH, y)?;
        y += BAR_GAP;

        backend.set_font(&self.theme.fonts.cover_title);
        backend.set_text_color(self.theme.text_primary);
        for line in &cover.title_lines {
            backend.draw_cell_text(left, y, width, TITLE_LINE_HEIGHT, line, Align::Center)?;
            y += TITLE_LINE_HEIGHT;
        }
        y += TITLE_GAP;

        backend.set_line_width(RULE_WIDTH);
        backend.draw_line(center - RULE_HALF_LENGTH, y, center + RULE_HALF_LENGTH, y)?;
        y += RULE_GAP;

        backend.set_font(&self.theme.fonts.cover_subtitle);
        backend.set_text_color(self.theme.accent);
        backend.draw_cell_text(left, y, width, SUBTITLE_HEIGHT, &cover.subtitle, Align::Center)?;
        y += SUBTITLE_HEIGHT;

        for (i, line) in cover.metadata.iter().enumerate() {
            y += META_GAP;
            if i == 0 {
                backend.set_font(&self.theme.fonts.cover_meta);
                backend.set_text_color(self.theme.text_secondary);
            } else {
                backend.set_font(&self.theme.fonts.cover_note);
                backend.set_text_color(self.theme.text_muted);
            }
            backend.draw_cell_text(left, y, width, META_HEIGHT, line, Align::Center)?;
            y += META_HEIGHT;
        }
        y += CARD_SPACE;

        self.render_card(backend, cover, y)
    }

    fn render_card<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        cover: &CoverPage,
        top: f32,
    ) -> Result<(), RenderError> {
        let card_x = self.geometry.left + CARD_INSET;
        let card_width = self.geometry.printable_width() - 2.0 * CARD_INSET;

        backend.set_fill_color(self.theme.bg_card);
        backend.draw_filled_rect(card_x, top, card_width, self.card_height(cover))?;

        let content_x = card_x + CARD_PADDING;
        let title_top = top + CARD_TITLE_OFFSET;
        backend.set_font(&self.theme.fonts.card_title);
        backend.set_text_color(self.theme.accent);
        backend.draw_cell_text(
            content_x,
            title_top,
            self.card_body_width(),
            CARD_TITLE_HEIGHT,
            &cover.purpose.title,
            Align::Left,
        )?;

        backend.set_font(&self.theme.fonts.card_body);
        backend.set_text_color(self.theme.text_secondary);
        backend.draw_wrapped_text(
            content_x,
            title_top + CARD_TITLE_HEIGHT,
            self.card_body_width(),
            CARD_LINE_HEIGHT,
            &cover.purpose.body,
            false,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::model::PurposeCard;
    use crate::render::helpers::DARK_THEME;
    use crate::render::recording::{DrawCommand, RecordingBackend};

    fn cover(body: &str) -> CoverPage {
        CoverPage {
            title_lines: vec!["Admin / User Mode Switch".into(), "Build Breakdown".into()],
            subtitle: "Learning Hub".into(),
            metadata: vec![
                "Last Updated: February 14, 2025".into(),
                "Version 1.0  |  Status: Pushed to Main".into(),
            ],
            purpose: PurposeCard {
                title: "Document Purpose".into(),
                body: body.into(),
            },
        }
    }

    #[test]
    fn test_short_card_uses_minimum_height() {
        let renderer = CoverRenderer::new(&DARK_THEME, Settings::default().geometry());
        assert_eq!(renderer.card_height(&cover("Short.")), CARD_MIN_HEIGHT);
    }

    #[test]
    fn test_long_card_grows() {
        let renderer = CoverRenderer::new(&DARK_THEME, Settings::default().geometry());
        let body = "This document describes the feature in detail. ".repeat(30);
        assert!(renderer.card_height(&cover(&body)) > CARD_MIN_HEIGHT);
    }

    #[test]
    fn test_short_cover_claims_printable_height() {
        let geometry = Settings::default().geometry();
        let renderer = CoverRenderer::new(&DARK_THEME, geometry);
        assert_eq!(renderer.height(&cover("Short.")), geometry.printable_height());
    }

    #[test]
    fn test_oversized_cover_height_covers_its_content() {
        let settings = Settings::default();
        let geometry = settings.geometry();
        let body = "purpose words here ".repeat(120);
        let cover = cover(&body);
        let renderer = CoverRenderer::new(&DARK_THEME, geometry);

        let height = renderer.height(&cover);
        assert!(height > geometry.printable_height());

        let mut backend = RecordingBackend::new(&settings);
        backend.begin_document("Report").unwrap();
        backend.begin_page().unwrap();
        renderer.render(&mut backend, &cover, geometry.printable_top).unwrap();

        let page = &backend.pages()[0];
        assert!(page.max_extent() > geometry.printable_bottom);
        assert!(page.max_extent() <= geometry.printable_top + height + 1e-3);
    }

    #[test]
    fn test_cover_fits_inside_printable_area() {
        let settings = Settings::default();
        let geometry = settings.geometry();
        let mut backend = RecordingBackend::new(&settings);
        backend.begin_document("Report").unwrap();
        backend.begin_page().unwrap();

        let renderer = CoverRenderer::new(&DARK_THEME, geometry);
        renderer
            .render(&mut backend, &cover("This document provides a technical build breakdown."), 17.0)
            .unwrap();

        let page = &backend.pages()[0];
        assert!(page.max_extent() <= geometry.printable_bottom);
        let titles: Vec<_> = page.texts().take(2).collect();
        assert_eq!(titles, vec!["Admin / User Mode Switch", "Build Breakdown"]);
        assert!(matches!(
            page.commands[0],
            DrawCommand::Line { x1, x2, .. } if x1 == 40.0 && x2 == 170.0
        ));
    }
}
