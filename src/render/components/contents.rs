//! Table of contents: a section-style heading followed by ruled rows

use crate::config::defaults::TOC_ROW_HEIGHT;
use crate::config::PageGeometry;
use crate::error::RenderError;
use crate::model::TableOfContents;
use crate::render::backend::{Align, RenderBackend};
use crate::render::helpers::Theme;

use super::headings::HeadingRenderer;

/// Separator rule position inside each row
const ROW_RULE_OFFSET: f32 = 6.0;
const ROW_RULE_INSET: f32 = 5.0;
const ROW_RULE_WIDTH: f32 = 0.2;

pub struct ContentsRenderer<'a> {
    theme: &'a Theme,
    geometry: PageGeometry,
    headings: HeadingRenderer<'a>,
}

impl<'a> ContentsRenderer<'a> {
    pub fn new(theme: &'a Theme, geometry: PageGeometry) -> Self {
        Self {
            theme,
            geometry,
            headings: HeadingRenderer::new(theme, geometry),
        }
    }

    pub fn height(&self, toc: &TableOfContents) -> f32 {
        self.headings.section_height() + toc.entries.len() as f32 * TOC_ROW_HEIGHT
    }

    pub fn render<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        toc: &TableOfContents,
        top: f32,
    ) -> Result<(), RenderError> {
        self.headings.render_section(backend, &toc.title, top)?;

        let rule_start = self.geometry.left + ROW_RULE_INSET;
        let rule_end = self.geometry.right - ROW_RULE_INSET;
        let mut y = top + self.headings.section_height();

        for entry in &toc.entries {
            backend.set_draw_color(self.theme.rule);
            backend.set_line_width(ROW_RULE_WIDTH);
            backend.draw_line(rule_start, y + ROW_RULE_OFFSET, rule_end, y + ROW_RULE_OFFSET)?;

            backend.set_font(&self.theme.fonts.toc_entry);
            backend.set_text_color(self.theme.text_primary);
            backend.draw_cell_text(
                self.geometry.left,
                y,
                self.geometry.printable_width(),
                TOC_ROW_HEIGHT,
                &format!("  {}", entry),
                Align::Left,
            )?;

            y += TOC_ROW_HEIGHT;
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
    fn test_one_rule_and_row_per_entry() {
        let settings = Settings::default();
        let mut backend = RecordingBackend::new(&settings);
        backend.begin_document("Report").unwrap();
        backend.begin_page().unwrap();

        let toc = TableOfContents::new(["1.  Feature Overview", "2.  Problem Statement"]);
        let renderer = ContentsRenderer::new(&DARK_THEME, settings.geometry());
        assert_eq!(renderer.height(&toc), 36.0);
        renderer.render(&mut backend, &toc, 17.0).unwrap();

        let page = &backend.pages()[0];
        let rules = page
            .commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Line { color, .. } if *color == DARK_THEME.rule))
            .count();
        assert_eq!(rules, 2);
        let texts: Vec<_> = page.texts().collect();
        assert_eq!(
            texts,
            vec![
                "Table of Contents",
                "  1.  Feature Overview",
                "  2.  Problem Statement"
            ]
        );
    }
}
