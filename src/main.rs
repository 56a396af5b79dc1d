use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use report_flow::cli::Args;
use report_flow::config::Settings;
use report_flow::render::{layout_document, render_document, RenderSummary};
use report_flow::reports::build_report;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let settings = Settings::from_args(&args).with_context(|| "Invalid settings")?;

    let doc = build_report(args.report, settings.generated_at.date());
    log::info!(
        "Built \"{}\" with {} blocks",
        doc.header_title,
        doc.len()
    );

    if args.dry_run {
        let summary = layout_document(&doc, &settings)
            .with_context(|| "Failed to lay out report")?;
        print_page_map(&summary);
        return Ok(());
    }

    let pdf_data = render_document(&doc, &settings).with_context(|| "Failed to generate PDF")?;

    // Write output
    let output_path = args.output_path();
    fs::write(&output_path, pdf_data)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!("Successfully wrote PDF to {}", output_path.display());

    Ok(())
}

fn print_page_map(summary: &RenderSummary) {
    println!("{} pages", summary.page_count);
    for page in 1..=summary.page_count {
        let placements: Vec<_> = summary.on_page(page).collect();
        let bottom = placements.last().map(|p| p.bottom()).unwrap_or(0.0);
        println!(
            "  page {:>3}: {:>3} blocks, content ends at {:.1} mm",
            page,
            placements.len(),
            bottom
        );
    }
}
