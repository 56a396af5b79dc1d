use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::defaults::DEFAULT_MAX_PAGES;

#[derive(Parser, Debug)]
#[command(name = "report-flow")]
#[command(
    author,
    version,
    about = "Render themed, paginated build-breakdown reports to PDF"
)]
pub struct Args {
    /// Built-in report to render
    #[arg(short, long, value_enum, default_value = "active-mode")]
    pub report: ReportKind,

    /// Output PDF file path (defaults to the report's file name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Page size
    #[arg(short = 's', long, value_enum, default_value = "a4")]
    pub page_size: PageSize,

    /// Skip lopdf stream compression
    #[arg(long)]
    pub no_compress: bool,

    /// Pin the footer timestamp ("YYYY-MM-DD HH:MM") for reproducible output
    #[arg(long)]
    pub timestamp: Option<String>,

    /// Footer confidentiality marker
    #[arg(long)]
    pub marker: Option<String>,

    /// Lay out the report and print its page map without writing a PDF
    #[arg(long)]
    pub dry_run: bool,

    /// Abort if the report needs more pages than this
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: usize,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PageSize {
    Letter,
    A4,
    Legal,
}

impl PageSize {
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            PageSize::Letter => (215.9, 279.4),
            PageSize::A4 => (210.0, 297.0),
            PageSize::Legal => (215.9, 355.6),
        }
    }
}

/// Built-in report selection
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum ReportKind {
    /// Admin/User Mode Switch build breakdown
    #[default]
    ActiveMode,
    /// Feed & Post Management feature breakdown
    FeedPosts,
}

impl ReportKind {
    /// Canonical output file name for the report
    pub fn file_name(&self) -> &'static str {
        match self {
            ReportKind::ActiveMode => "Admin-User-Mode-Switch-Breakdown.pdf",
            ReportKind::FeedPosts => "Feed-Post-Management-Breakdown.pdf",
        }
    }
}

impl Args {
    /// Get the output path, defaulting to the report's canonical file name
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.report.file_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["report-flow"]);
        assert_eq!(args.report, ReportKind::ActiveMode);
        assert_eq!(args.page_size, PageSize::A4);
        assert_eq!(args.max_pages, DEFAULT_MAX_PAGES);
        assert!(!args.dry_run);
        assert_eq!(
            args.output_path(),
            PathBuf::from("Admin-User-Mode-Switch-Breakdown.pdf")
        );
    }

    #[test]
    fn test_report_and_output_flags() {
        let args = Args::parse_from([
            "report-flow",
            "--report",
            "feed-posts",
            "-o",
            "out/feed.pdf",
            "-s",
            "letter",
            "--dry-run",
            "-vv",
        ]);
        assert_eq!(args.report, ReportKind::FeedPosts);
        assert_eq!(args.output_path(), PathBuf::from("out/feed.pdf"));
        assert_eq!(args.page_size.dimensions_mm(), (215.9, 279.4));
        assert!(args.dry_run);
        assert_eq!(args.verbose, 2);
    }
}
