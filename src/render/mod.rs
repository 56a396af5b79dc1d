//! PDF rendering modules

pub mod backend;
pub mod components;
pub mod decorator;
pub mod flow;
pub mod helpers;
pub mod pdf_backend;
pub mod recording;

pub use backend::{Align, Cursor, RenderBackend};
pub use decorator::PageDecorator;
pub use flow::{PageFlowEngine, Placement, RenderSummary};
pub use helpers::{Theme, DARK_THEME};
pub use pdf_backend::PdfBackend;
pub use recording::{DrawCommand, RecordedPage, RecordingBackend};

use crate::config::Settings;
use crate::error::RenderError;
use crate::model::ReportDocument;

/// Render a document to PDF bytes with the dark theme
pub fn render_document(doc: &ReportDocument, settings: &Settings) -> Result<Vec<u8>, RenderError> {
    settings.validate()?;

    let mut backend = PdfBackend::new(settings);
    let summary = PageFlowEngine::new(&DARK_THEME, settings).render(doc, &mut backend)?;
    let bytes = backend.end_document()?;

    log::info!(
        "Rendered \"{}\": {} pages, {} bytes",
        doc.header_title,
        summary.page_count,
        bytes.len()
    );
    Ok(bytes)
}

/// Lay out a document without producing a PDF
pub fn layout_document(
    doc: &ReportDocument,
    settings: &Settings,
) -> Result<RenderSummary, RenderError> {
    settings.validate()?;

    let mut backend = RecordingBackend::new(settings);
    PageFlowEngine::new(&DARK_THEME, settings).render(doc, &mut backend)
}
