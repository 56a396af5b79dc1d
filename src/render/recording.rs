//! In-memory backend that records primitives per page
//!
//! Used by tests and `--dry-run`. Its serialized form is a
//! plain-text listing, so two renders of the same document compare equal
//! byte for byte.

use std::fmt::Write as _;

use crate::config::{PageGeometry, Settings};
use crate::error::RenderError;

use super::backend::{Cursor, RenderBackend};
use super::helpers::{FontStyle, Rgb8, TextStyle};

/// One recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgb8,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Rgb8,
    },
    Text {
        x: f32,
        baseline: f32,
        text: String,
        style: TextStyle,
        color: Rgb8,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedPage {
    pub commands: Vec<DrawCommand>,
}

impl RecordedPage {
    /// Text runs on this page in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Lowest point reached by any text baseline or filled rect
    pub fn max_extent(&self) -> f32 {
        self.commands
            .iter()
            .map(|cmd| match cmd {
                DrawCommand::Rect { y, h, .. } => y + h,
                DrawCommand::Line { y1, y2, .. } => y1.max(*y2),
                DrawCommand::Text { baseline, .. } => *baseline,
            })
            .fold(0.0, f32::max)
    }
}

pub struct RecordingBackend {
    geometry: PageGeometry,
    max_pages: usize,
    title: String,
    pages: Vec<RecordedPage>,
    current: Option<usize>,
    cursor: Cursor,
    font: TextStyle,
    text_color: Rgb8,
    fill_color: Rgb8,
    draw_color: Rgb8,
    line_width: f32,
}

impl RecordingBackend {
    pub fn new(settings: &Settings) -> Self {
        let geometry = settings.geometry();
        Self {
            geometry,
            max_pages: settings.max_pages,
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

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pages(&self) -> &[RecordedPage] {
        &self.pages
    }

    /// Recorded page by 1-based number
    pub fn page(&self, number: usize) -> Option<&RecordedPage> {
        number.checked_sub(1).and_then(|i| self.pages.get(i))
    }

    fn record(&mut self, command: DrawCommand) -> Result<(), RenderError> {
        let page = self
            .current
            .and_then(|i| self.pages.get_mut(i))
            .ok_or_else(|| RenderError::BackendFailure("no page is open".to_string()))?;
        page.commands.push(command);
        Ok(())
    }

    fn serialize(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "document {:?}", self.title);
        for (i, page) in self.pages.iter().enumerate() {
            let _ = writeln!(out, "page {}", i + 1);
            for cmd in &page.commands {
                let _ = match cmd {
                    DrawCommand::Rect { x, y, w, h, color } => writeln!(
                        out,
                        "  rect {:.3} {:.3} {:.3} {:.3} {:?}",
                        x, y, w, h, color
                    ),
                    DrawCommand::Line {
                        x1,
                        y1,
                        x2,
                        y2,
                        width,
                        color,
                    } => writeln!(
                        out,
                        "  line {:.3} {:.3} {:.3} {:.3} w={:.3} {:?}",
                        x1, y1, x2, y2, width, color
                    ),
                    DrawCommand::Text {
                        x,
                        baseline,
                        text,
                        style,
                        color,
                    } => writeln!(
                        out,
                        "  text {:.3} {:.3} {:?} {:?}/{:?}/{:.1} {:?}",
                        x, baseline, text, style.family, style.style, style.size, color
                    ),
                };
            }
        }
        out
    }
}

impl RenderBackend for RecordingBackend {
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
        self.pages.push(RecordedPage::default());
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

    /// Serialize the recording; pages stay available for inspection
    fn end_document(&mut self) -> Result<Vec<u8>, RenderError> {
        if self.pages.is_empty() {
            return Err(RenderError::BackendFailure(
                "document has no pages".to_string(),
            ));
        }
        Ok(self.serialize().into_bytes())
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
        let color = self.fill_color;
        self.record(DrawCommand::Rect { x, y, w, h, color })
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), RenderError> {
        let (width, color) = (self.line_width, self.draw_color);
        self.record(DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            width,
            color,
        })
    }

    fn draw_text(&mut self, x: f32, baseline: f32, text: &str) -> Result<(), RenderError> {
        if text.is_empty() {
            return Ok(());
        }
        let (style, color) = (self.font, self.text_color);
        self.record(DrawCommand::Text {
            x,
            baseline,
            text: text.to_string(),
            style,
            color,
        })
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
    use crate::render::backend::Align;

    fn open_backend() -> RecordingBackend {
        let mut backend = RecordingBackend::new(&Settings::default());
        backend.begin_document("Report").unwrap();
        backend.begin_page().unwrap();
        backend
    }

    #[test]
    fn test_records_text_with_current_state() {
        let mut backend = open_backend();
        let style = TextStyle::sans(FontStyle::Bold, 14.0);
        backend.set_font(&style);
        backend.set_text_color(Rgb8(232, 232, 240));
        backend.draw_text(11.0, 30.0, "Overview").unwrap();

        match &backend.pages()[0].commands[0] {
            DrawCommand::Text {
                text,
                style: recorded,
                color,
                ..
            } => {
                assert_eq!(text, "Overview");
                assert_eq!(*recorded, style);
                assert_eq!(*color, Rgb8(232, 232, 240));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_select_page_redirects_drawing() {
        let mut backend = open_backend();
        backend.begin_page().unwrap();
        backend.select_page(1).unwrap();
        backend.draw_text(10.0, 290.0, "Page 1/2").unwrap();
        assert_eq!(backend.page(1).unwrap().texts().count(), 1);
        assert_eq!(backend.page(2).unwrap().texts().count(), 0);
    }

    #[test]
    fn test_wrapped_text_reports_consumed_height() {
        let mut backend = open_backend();
        backend.set_font(&TextStyle::sans(FontStyle::Regular, 10.0));
        let height = backend
            .draw_wrapped_text(10.0, 20.0, 190.0, 5.5, "first\nsecond\n\nfourth", false)
            .unwrap();
        assert!((height - 22.0).abs() < 1e-4);
        let texts: Vec<_> = backend.pages()[0].texts().collect();
        assert_eq!(texts, vec!["first", "second", "fourth"]);
        assert!(!backend.pages()[0]
            .commands
            .iter()
            .any(|cmd| matches!(cmd, DrawCommand::Rect { .. })));
    }

    #[test]
    fn test_filled_wrapped_text_paints_background_first() {
        let mut backend = open_backend();
        backend.set_font(&TextStyle::sans(FontStyle::Regular, 10.0));
        backend.set_fill_color(Rgb8(22, 22, 42));
        backend
            .draw_wrapped_text(15.0, 40.0, 180.0, 5.0, "one\ntwo", true)
            .unwrap();

        let page = &backend.pages()[0];
        assert!(matches!(
            page.commands[0],
            DrawCommand::Rect { x, y, w, h, color }
                if x == 15.0 && y == 40.0 && w == 180.0 && (h - 10.0).abs() < 1e-4
                    && color == Rgb8(22, 22, 42)
        ));
        assert_eq!(page.texts().collect::<Vec<_>>(), vec!["one", "two"]);
    }

    #[test]
    fn test_centered_cell_text() {
        let mut backend = open_backend();
        let style = TextStyle::sans(FontStyle::Regular, 10.0);
        backend.set_font(&style);
        backend
            .draw_cell_text(10.0, 20.0, 190.0, 8.0, "Centered", Align::Center)
            .unwrap();
        match &backend.pages()[0].commands[0] {
            DrawCommand::Text { x, .. } => {
                let expected = 10.0 + (190.0 - style.width_mm("Centered")) / 2.0;
                assert!((x - expected).abs() < 1e-4);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_serialization_is_stable() {
        let mut a = open_backend();
        let mut b = open_backend();
        for backend in [&mut a, &mut b] {
            backend.set_fill_color(Rgb8(10, 10, 15));
            backend.draw_filled_rect(0.0, 0.0, 210.0, 297.0).unwrap();
        }
        assert_eq!(a.end_document().unwrap(), b.end_document().unwrap());
    }
}
