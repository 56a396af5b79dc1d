pub mod block;
pub mod document;

pub use block::{BlockKind, ContentBlock, CoverPage, PurposeCard, Status, TableOfContents};
pub use document::ReportDocument;
