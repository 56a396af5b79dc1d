//! Per-page decoration: background, running header and footer

use crate::error::RenderError;

use super::backend::{Align, RenderBackend};
use super::helpers::Theme;

/// Header title cell
const HEADER_TITLE_TOP: f32 = 5.0;
const HEADER_TITLE_HEIGHT: f32 = 8.0;
/// Accent rule under the header title
const HEADER_RULE_Y: f32 = 16.0;
const HEADER_RULE_WIDTH: f32 = 0.4;
const FOOTER_HEIGHT: f32 = 10.0;

/// Paints the parts of a page that do not belong to any content block
pub struct PageDecorator<'a> {
    theme: &'a Theme,
    header_title: String,
    footer_offset: f32,
    marker: String,
    timestamp: String,
}

impl<'a> PageDecorator<'a> {
    pub fn new(
        theme: &'a Theme,
        header_title: impl Into<String>,
        footer_offset: f32,
        marker: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            theme,
            header_title: header_title.into(),
            footer_offset,
            marker: marker.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Background and header for a freshly opened page
    pub fn decorate_page<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
    ) -> Result<(), RenderError> {
        let geometry = backend.geometry();

        backend.set_fill_color(self.theme.bg_primary);
        backend.draw_filled_rect(0.0, 0.0, geometry.page_width, geometry.page_height)?;

        backend.set_font(&self.theme.fonts.header);
        backend.set_text_color(self.theme.text_muted);
        backend.draw_cell_text(
            geometry.left,
            HEADER_TITLE_TOP,
            geometry.printable_width(),
            HEADER_TITLE_HEIGHT,
            &self.header_title,
            Align::Left,
        )?;

        backend.set_draw_color(self.theme.accent);
        backend.set_line_width(HEADER_RULE_WIDTH);
        backend.draw_line(geometry.left, HEADER_RULE_Y, geometry.right, HEADER_RULE_Y)
    }

    pub fn footer_text(&self, page: usize, total: usize) -> String {
        format!(
            "Page {}/{}  |  Generated {}  |  {}",
            page, total, self.timestamp, self.marker
        )
    }

    /// Footer for the currently selected page, once the page total is known
    pub fn draw_footer<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        page: usize,
        total: usize,
    ) -> Result<(), RenderError> {
        let geometry = backend.geometry();
        let top = geometry.page_height - self.footer_offset;

        backend.set_font(&self.theme.fonts.footer);
        backend.set_text_color(self.theme.text_muted);
        backend.draw_cell_text(
            geometry.left,
            top,
            geometry.printable_width(),
            FOOTER_HEIGHT,
            &self.footer_text(page, total),
            Align::Center,
        )
    }
}
