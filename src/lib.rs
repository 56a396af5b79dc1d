pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod reports;

pub use cli::ReportKind;
pub use config::Settings;
pub use error::{ConfigError, RenderError};
pub use model::{ContentBlock, ReportDocument};
pub use render::{layout_document, render_document, RenderSummary};
pub use reports::build_report;

/// High-level API: build a built-in report and render it to PDF bytes.
///
/// # Example
///
/// ```no_run
/// use report_flow::{render_report, ReportKind, Settings};
///
/// let settings = Settings::default();
/// let pdf_bytes = render_report(ReportKind::FeedPosts, &settings).unwrap();
///
/// std::fs::write("feed.pdf", pdf_bytes).unwrap();
/// ```
pub fn render_report(kind: ReportKind, settings: &Settings) -> Result<Vec<u8>, RenderError> {
    let doc = build_report(kind, settings.generated_at.date());
    render_document(&doc, settings)
}
