//! Content blocks: the closed set of units a report is made of.

use std::fmt;

use crate::error::RenderError;

/// Progress state shown by a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Complete,
    InProgress,
    Planned,
}

impl Status {
    /// Marker glyph printed after the badge label
    pub fn marker(&self) -> &'static str {
        match self {
            Status::Complete => "[COMPLETE]",
            Status::InProgress => "[IN PROGRESS]",
            Status::Planned => "[PLANNED]",
        }
    }
}

/// Highlighted card at the bottom of the cover page
#[derive(Debug, Clone, PartialEq)]
pub struct PurposeCard {
    pub title: String,
    pub body: String,
}

/// Title page; always alone on its page
#[derive(Debug, Clone, PartialEq)]
pub struct CoverPage {
    pub title_lines: Vec<String>,
    pub subtitle: String,
    /// First line is printed plainly, the rest as muted notes
    pub metadata: Vec<String>,
    pub purpose: PurposeCard,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableOfContents {
    pub title: String,
    pub entries: Vec<String>,
}

impl TableOfContents {
    pub fn new<S: Into<String>>(entries: impl IntoIterator<Item = S>) -> Self {
        Self {
            title: "Table of Contents".to_string(),
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }
}

/// One immutable unit of document content
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    CoverPage(CoverPage),
    TableOfContents(TableOfContents),
    SectionHeading(String),
    SubHeading(String),
    BodyParagraph(String),
    BulletItem { text: String, indent: Option<f32> },
    CodeBlock(String),
    StatusBadge { label: String, status: Status },
    ChecklistRow { label: String, done: bool },
    Divider,
    /// Monospace file path row, optionally tagged (`NEW`, `MODIFIED`)
    FileHeading { path: String, tag: Option<String> },
    /// Monospace term with an indented description underneath
    Definition { term: String, description: String },
    /// Blank vertical gap in mm
    Spacer(f32),
}

/// Variant tag of a [`ContentBlock`], used in placements and log output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    CoverPage,
    TableOfContents,
    SectionHeading,
    SubHeading,
    BodyParagraph,
    BulletItem,
    CodeBlock,
    StatusBadge,
    ChecklistRow,
    Divider,
    FileHeading,
    Definition,
    Spacer,
}

impl BlockKind {
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::CoverPage => "cover page",
            BlockKind::TableOfContents => "table of contents",
            BlockKind::SectionHeading => "section heading",
            BlockKind::SubHeading => "sub-heading",
            BlockKind::BodyParagraph => "body paragraph",
            BlockKind::BulletItem => "bullet item",
            BlockKind::CodeBlock => "code block",
            BlockKind::StatusBadge => "status badge",
            BlockKind::ChecklistRow => "checklist row",
            BlockKind::Divider => "divider",
            BlockKind::FileHeading => "file heading",
            BlockKind::Definition => "definition",
            BlockKind::Spacer => "spacer",
        }
    }

    /// Variants that always open a fresh page
    pub fn forces_break(&self) -> bool {
        matches!(self, BlockKind::CoverPage | BlockKind::TableOfContents)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ContentBlock {
    pub fn section(title: impl Into<String>) -> Self {
        ContentBlock::SectionHeading(title.into())
    }

    pub fn sub(title: impl Into<String>) -> Self {
        ContentBlock::SubHeading(title.into())
    }

    pub fn body(text: impl Into<String>) -> Self {
        ContentBlock::BodyParagraph(text.into())
    }

    pub fn bullet(text: impl Into<String>) -> Self {
        ContentBlock::BulletItem {
            text: text.into(),
            indent: None,
        }
    }

    pub fn bullet_indented(text: impl Into<String>, indent: f32) -> Self {
        ContentBlock::BulletItem {
            text: text.into(),
            indent: Some(indent),
        }
    }

    pub fn code(text: impl Into<String>) -> Self {
        ContentBlock::CodeBlock(text.into())
    }

    pub fn badge(label: impl Into<String>, status: Status) -> Self {
        ContentBlock::StatusBadge {
            label: label.into(),
            status,
        }
    }

    pub fn check(label: impl Into<String>, done: bool) -> Self {
        ContentBlock::ChecklistRow {
            label: label.into(),
            done,
        }
    }

    pub fn file(path: impl Into<String>, tag: Option<&str>) -> Self {
        ContentBlock::FileHeading {
            path: path.into(),
            tag: tag.map(String::from),
        }
    }

    pub fn definition(term: impl Into<String>, description: impl Into<String>) -> Self {
        ContentBlock::Definition {
            term: term.into(),
            description: description.into(),
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            ContentBlock::CoverPage(_) => BlockKind::CoverPage,
            ContentBlock::TableOfContents(_) => BlockKind::TableOfContents,
            ContentBlock::SectionHeading(_) => BlockKind::SectionHeading,
            ContentBlock::SubHeading(_) => BlockKind::SubHeading,
            ContentBlock::BodyParagraph(_) => BlockKind::BodyParagraph,
            ContentBlock::BulletItem { .. } => BlockKind::BulletItem,
            ContentBlock::CodeBlock(_) => BlockKind::CodeBlock,
            ContentBlock::StatusBadge { .. } => BlockKind::StatusBadge,
            ContentBlock::ChecklistRow { .. } => BlockKind::ChecklistRow,
            ContentBlock::Divider => BlockKind::Divider,
            ContentBlock::FileHeading { .. } => BlockKind::FileHeading,
            ContentBlock::Definition { .. } => BlockKind::Definition,
            ContentBlock::Spacer(_) => BlockKind::Spacer,
        }
    }

    /// Reject blocks missing a required attribute
    pub fn validate(&self) -> Result<(), RenderError> {
        let kind = self.kind().name();
        match self {
            ContentBlock::CoverPage(cover) => {
                if cover.title_lines.iter().all(|l| l.trim().is_empty()) {
                    return Err(RenderError::malformed(kind, "no title lines"));
                }
                Ok(())
            }
            ContentBlock::TableOfContents(toc) => {
                if toc.entries.is_empty() {
                    return Err(RenderError::malformed(kind, "no entries"));
                }
                Ok(())
            }
            ContentBlock::SectionHeading(text)
            | ContentBlock::SubHeading(text)
            | ContentBlock::BodyParagraph(text)
            | ContentBlock::CodeBlock(text) => require_text(kind, "text", text),
            ContentBlock::BulletItem { text, indent } => {
                require_text(kind, "text", text)?;
                match indent {
                    Some(i) if !i.is_finite() || *i < 0.0 => Err(RenderError::malformed(
                        kind,
                        format!("indent {} is not a non-negative length", i),
                    )),
                    _ => Ok(()),
                }
            }
            ContentBlock::StatusBadge { label, .. } | ContentBlock::ChecklistRow { label, .. } => {
                require_text(kind, "label", label)
            }
            ContentBlock::Divider => Ok(()),
            ContentBlock::FileHeading { path, .. } => require_text(kind, "path", path),
            ContentBlock::Definition { term, .. } => require_text(kind, "term", term),
            ContentBlock::Spacer(height) => {
                if !height.is_finite() || *height < 0.0 {
                    return Err(RenderError::malformed(
                        kind,
                        format!("height {} is not a non-negative length", height),
                    ));
                }
                Ok(())
            }
        }
    }
}

fn require_text(kind: &'static str, field: &str, text: &str) -> Result<(), RenderError> {
    if text.trim().is_empty() {
        Err(RenderError::malformed(kind, format!("missing {}", field)))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_code_block_is_malformed() {
        let err = ContentBlock::code("").validate().unwrap_err();
        match err {
            RenderError::MalformedBlock { kind, reason } => {
                assert_eq!(kind, "code block");
                assert_eq!(reason, "missing text");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_spacer_and_indent_are_malformed() {
        assert!(ContentBlock::Spacer(-1.0).validate().is_err());
        assert!(ContentBlock::Spacer(f32::NAN).validate().is_err());
        assert!(ContentBlock::bullet_indented("x", -3.0).validate().is_err());
        assert!(ContentBlock::Spacer(0.0).validate().is_ok());
    }

    #[test]
    fn test_cover_and_toc_require_content() {
        let cover = ContentBlock::CoverPage(CoverPage {
            title_lines: vec!["  ".to_string()],
            subtitle: String::new(),
            metadata: Vec::new(),
            purpose: PurposeCard {
                title: String::new(),
                body: String::new(),
            },
        });
        assert!(cover.validate().is_err());

        let toc = ContentBlock::TableOfContents(TableOfContents::new(Vec::<String>::new()));
        assert!(toc.validate().is_err());
    }

    #[test]
    fn test_only_cover_and_toc_force_breaks() {
        assert!(BlockKind::CoverPage.forces_break());
        assert!(BlockKind::TableOfContents.forces_break());
        assert!(!ContentBlock::section("Checklist").kind().forces_break());
        assert!(!ContentBlock::code("x").kind().forces_break());
    }

    #[test]
    fn test_status_markers_are_distinct() {
        let markers = [
            Status::Complete.marker(),
            Status::InProgress.marker(),
            Status::Planned.marker(),
        ];
        assert_ne!(markers[0], markers[1]);
        assert_ne!(markers[1], markers[2]);
        assert_ne!(markers[0], markers[2]);
    }
}
