use crate::config::defaults::DIVIDER_GAP;
use crate::config::PageGeometry;
use crate::error::RenderError;
use crate::render::backend::RenderBackend;
use crate::render::helpers::Theme;

const DIVIDER_WIDTH: f32 = 0.2;

/// Thin horizontal rule across the printable width
pub struct DividerRenderer<'a> {
    theme: &'a Theme,
    geometry: PageGeometry,
}

impl<'a> DividerRenderer<'a> {
    pub fn new(theme: &'a Theme, geometry: PageGeometry) -> Self {
        Self { theme, geometry }
    }

    pub fn height(&self) -> f32 {
        2.0 * DIVIDER_GAP
    }

    pub fn render<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        top: f32,
    ) -> Result<(), RenderError> {
        let y = top + DIVIDER_GAP;
        backend.set_draw_color(self.theme.accent_dim);
        backend.set_line_width(DIVIDER_WIDTH);
        backend.draw_line(self.geometry.left, y, self.geometry.right, y)
    }
}
