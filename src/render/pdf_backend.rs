//! printpdf implementation of [`RenderBackend`](super::backend::RenderBackend)

use printpdf::{Mm, PdfDocument, PdfPage, PdfSaveOptions};

use crate::config::{PageGeometry, Settings};
use crate::error::RenderError;

use super::backend::{Cursor, RenderBackend};
use super::helpers::{finish_pdf, FontStyle, PageOps, Rgb8, TextStyle, PT_TO_MM};

/// printpdf-backed surface; pages are collected as op lists until the end
pub struct PdfBackend {
    geometry: PageGeometry,
    max_pages: usize,
    compress: bool,
    title: String,
    pages: Vec<PageOps>,
    current: Option<usize>,
    cursor: Cursor,
    font: TextStyle,
    text_color: Rgb8,
    fill_color: Rgb8,
    draw_color: Rgb8,
    line_width: f32,
}

impl PdfBackend {
    pub fn new(settings: &Settings) -> Self {
        let geometry = settings.geometry();
        Self {
            geometry,
            max_pages: settings.max_pages,
            compress: settings.compress,
            title: String::new(),
            pages: Vec::new(),
            current: None,
            cursor: Cursor {
                x: geometry.left,
                y: geometry.printable_top,
                page: 0,
            },
            font: TextStyle::sans(FontStyle::Regular, 10.0),
            text_color: Rgb8(0, 0, 0),
            fill_color: Rgb8(0, 0, 0),
            draw_color: Rgb8(0, 0, 0),
            line_width: 0.2,
        }
    }

    /// Convert a top-down y coordinate to PDF space
    fn pdf_y(&self, y: f32) -> Mm {
        Mm(self.geometry.page_height - y)
    }

    fn layer(&mut self) -> Result<&mut PageOps, RenderError> {
        let index = self
            .current
            .ok_or_else(|| RenderError::BackendFailure("no page is open".to_string()))?;
        self.pages
            .get_mut(index)
            .ok_or_else(|| RenderError::BackendFailure(format!("page {} is missing", index + 1)))
    }
}

impl RenderBackend for PdfBackend {
    fn begin_document(&mut self, title: &str) -> Result<(), RenderError> {
        self.title = title.to_string();
        self.pages.clear();
        self.current = None;
        self.cursor = Cursor {
            x: self.geometry.left,
            y: self.geometry.printable_top,
            page: 0,
        };
        Ok(())
    }

    fn begin_page(&mut self) -> Result<(), RenderError> {
        if self.pages.len() >= self.max_pages {
            return Err(RenderError::BackendFailure(format!(
                "unable to allocate a new page (limit {})",
                self.max_pages
            )));
        }
        self.pages.push(PageOps::new());
        self.current = Some(self.pages.len() - 1);
        self.cursor = Cursor {
            x: self.geometry.left,
            y: self.geometry.printable_top,
            page: self.pages.len(),
        };
        Ok(())
    }

    fn select_page(&mut self, page: usize) -> Result<(), RenderError> {
        if page == 0 || page > self.pages.len() {
            return Err(RenderError::BackendFailure(format!(
                "page {} does not exist ({} pages)",
                page,
                self.pages.len()
            )));
        }
        self.current = Some(page - 1);
        self.cursor.page = page;
        Ok(())
    }

    fn end_document(&mut self) -> Result<Vec<u8>, RenderError> {
        if self.pages.is_empty() {
            return Err(RenderError::BackendFailure(
                "document has no pages".to_string(),
            ));
        }

        let mut doc = PdfDocument::new(&self.title);
        let pages: Vec<PdfPage> = std::mem::take(&mut self.pages)
            .into_iter()
            .map(|layer| {
                PdfPage::new(
                    Mm(self.geometry.page_width),
                    Mm(self.geometry.page_height),
                    layer.into_ops(),
                )
            })
            .collect();
        self.current = None;

        doc.with_pages(pages);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            log::debug!("printpdf reported {} warnings", warnings.len());
        }

        match finish_pdf(&bytes, self.compress) {
            Ok(finished) => Ok(finished),
            Err(e) => {
                log::warn!("{}; writing printpdf output as is", e);
                Ok(bytes)
            }
        }
    }

    fn set_font(&mut self, style: &TextStyle) {
        self.font = *style;
    }

    fn font(&self) -> TextStyle {
        self.font
    }

    fn set_text_color(&mut self, color: Rgb8) {
        self.text_color = color;
    }

    fn set_fill_color(&mut self, color: Rgb8) {
        self.fill_color = color;
    }

    fn set_draw_color(&mut self, color: Rgb8) {
        self.draw_color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn draw_filled_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<(), RenderError> {
        let corners = ((Mm(x), self.pdf_y(y + h)), (Mm(x + w), self.pdf_y(y)));
        let color = self.fill_color.to_color();
        self.layer()?.fill_rect(corners.0, corners.1, color);
        Ok(())
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), RenderError> {
        let (from, to) = ((Mm(x1), self.pdf_y(y1)), (Mm(x2), self.pdf_y(y2)));
        let color = self.draw_color.to_color();
        let thickness = self.line_width / PT_TO_MM;
        self.layer()?.stroke_line(from, to, color, thickness);
        Ok(())
    }

    fn draw_text(&mut self, x: f32, baseline: f32, text: &str) -> Result<(), RenderError> {
        let origin = (Mm(x), self.pdf_y(baseline));
        let color = self.text_color.to_color();
        let style = self.font;
        self.layer()?
            .text(text, origin, style.builtin(), style.size, color);
        Ok(())
    }

    fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn set_cursor(&mut self, x: f32, y: f32) {
        self.cursor.x = x;
        self.cursor.y = y;
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn geometry(&self) -> PageGeometry {
        self.geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawing_without_page_fails() {
        let mut backend = PdfBackend::new(&Settings::default());
        backend.begin_document("Report").unwrap();
        let err = backend.draw_line(10.0, 16.0, 200.0, 16.0).unwrap_err();
        assert!(matches!(err, RenderError::BackendFailure(_)));
    }

    #[test]
    fn test_page_limit_is_enforced() {
        let settings = Settings {
            max_pages: 2,
            ..Settings::default()
        };
        let mut backend = PdfBackend::new(&settings);
        backend.begin_document("Report").unwrap();
        backend.begin_page().unwrap();
        backend.begin_page().unwrap();
        let err = backend.begin_page().unwrap_err();
        assert!(err.to_string().contains("unable to allocate a new page"));
    }

    #[test]
    fn test_begin_page_resets_cursor() {
        let mut backend = PdfBackend::new(&Settings::default());
        backend.begin_document("Report").unwrap();
        backend.begin_page().unwrap();
        backend.set_cursor(10.0, 200.0);
        backend.begin_page().unwrap();
        assert_eq!(
            backend.cursor(),
            Cursor {
                x: 10.0,
                y: 17.0,
                page: 2
            }
        );
        assert!((backend.remaining_height() - 260.0).abs() < 1e-4);
    }

    #[test]
    fn test_select_page_bounds() {
        let mut backend = PdfBackend::new(&Settings::default());
        backend.begin_document("Report").unwrap();
        backend.begin_page().unwrap();
        assert!(backend.select_page(1).is_ok());
        assert!(backend.select_page(0).is_err());
        assert!(backend.select_page(2).is_err());
    }

    #[test]
    fn test_empty_document_is_rejected() {
        let mut backend = PdfBackend::new(&Settings::default());
        backend.begin_document("Report").unwrap();
        assert!(backend.end_document().is_err());
    }

    #[test]
    fn test_end_document_produces_pdf() {
        let settings = Settings {
            compress: false,
            ..Settings::default()
        };
        let mut backend = PdfBackend::new(&settings);
        backend.begin_document("Report").unwrap();
        backend.begin_page().unwrap();
        backend.set_text_color(Rgb8(232, 232, 240));
        backend.draw_text(11.0, 30.0, "Hello").unwrap();
        let bytes = backend.end_document().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    fn render_hello(compress: bool) -> Vec<u8> {
        let settings = Settings {
            compress,
            ..Settings::default()
        };
        let mut backend = PdfBackend::new(&settings);
        backend.begin_document("Report").unwrap();
        backend.begin_page().unwrap();
        backend.draw_text(11.0, 30.0, "Hello").unwrap();
        backend.end_document().unwrap()
    }

    #[test]
    fn test_output_bytes_are_repeatable() {
        for compress in [false, true] {
            assert_eq!(render_hello(compress), render_hello(compress));
        }
    }

    #[test]
    fn test_trailer_id_is_pinned() {
        let doc = lopdf::Document::load_mem(&render_hello(false)).unwrap();
        let id = doc.trailer.get(b"ID").unwrap().as_array().unwrap();
        assert_eq!(id.len(), 2);
        let first = id[0].as_str().unwrap();
        assert_eq!(first.len(), 16);
        assert_eq!(first, id[1].as_str().unwrap());
    }
}
