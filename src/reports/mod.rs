//! Built-in reports
//!
//! Each report is plain data: a header title and an ordered list of content
//! blocks. Nothing here knows about pages or drawing.

mod active_mode;
mod feed_posts;

use chrono::NaiveDate;

use crate::cli::ReportKind;
use crate::model::{ContentBlock, CoverPage, PurposeCard, ReportDocument};

const HUB_NAME: &str = "AutoNateAI Learning Hub";
const PURPOSE_TITLE: &str = "Document Purpose";

/// Assemble the document for a built-in report
pub fn build_report(kind: ReportKind, today: NaiveDate) -> ReportDocument {
    match kind {
        ReportKind::ActiveMode => active_mode::build(today),
        ReportKind::FeedPosts => feed_posts::build(today),
    }
}

/// Running header title: hub name plus the report name
fn header_title(report: &str) -> String {
    format!("{}  |  {}", HUB_NAME, report)
}

fn cover(title_lines: &[&str], version: &str, today: NaiveDate, purpose: &str) -> ContentBlock {
    ContentBlock::CoverPage(CoverPage {
        title_lines: title_lines.iter().map(|l| l.to_string()).collect(),
        subtitle: HUB_NAME.to_string(),
        metadata: vec![
            format!("Last Updated: {}", today.format("%B %d, %Y")),
            format!("{}  |  Status: Pushed to Main", version),
        ],
        purpose: PurposeCard {
            title: PURPOSE_TITLE.to_string(),
            body: purpose.to_string(),
        },
    })
}

/// File heading followed by its change bullets
fn file_changes(path: &str, tag: &str, changes: &[&str]) -> Vec<ContentBlock> {
    let mut blocks = vec![ContentBlock::file(path, Some(tag))];
    blocks.extend(
        changes
            .iter()
            .map(|change| ContentBlock::bullet_indented(*change, 10.0)),
    );
    blocks.push(ContentBlock::Spacer(2.0));
    blocks
}

fn checklist(items: &[(&str, bool)]) -> Vec<ContentBlock> {
    items
        .iter()
        .map(|(label, done)| ContentBlock::check(*label, *done))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlockKind;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
    }

    #[test]
    fn test_reports_start_with_cover_then_contents() {
        for kind in [ReportKind::ActiveMode, ReportKind::FeedPosts] {
            let doc = build_report(kind, today());
            assert_eq!(doc.blocks[0].kind(), BlockKind::CoverPage);
            assert_eq!(doc.blocks[1].kind(), BlockKind::TableOfContents);
            assert!(doc.header_title.starts_with(HUB_NAME));
        }
    }

    #[test]
    fn test_every_block_is_well_formed() {
        for kind in [ReportKind::ActiveMode, ReportKind::FeedPosts] {
            for block in &build_report(kind, today()).blocks {
                block.validate().unwrap();
            }
        }
    }

    #[test]
    fn test_contents_entries_match_section_count() {
        for kind in [ReportKind::ActiveMode, ReportKind::FeedPosts] {
            let doc = build_report(kind, today());
            let sections = doc
                .blocks
                .iter()
                .filter(|b| b.kind() == BlockKind::SectionHeading)
                .count();
            match &doc.blocks[1] {
                ContentBlock::TableOfContents(toc) => assert_eq!(toc.entries.len(), sections),
                other => panic!("expected table of contents, got {:?}", other.kind()),
            }
        }
    }

    #[test]
    fn test_cover_carries_date() {
        let doc = build_report(ReportKind::ActiveMode, today());
        match &doc.blocks[0] {
            ContentBlock::CoverPage(cover) => {
                assert_eq!(cover.metadata[0], "Last Updated: February 14, 2025");
            }
            other => panic!("expected cover, got {:?}", other.kind()),
        }
    }
}
