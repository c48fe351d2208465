// Colored terminal output for label results.
//
// main.rs delegates all human-readable display here; JSON output goes
// through `output::to_json` instead.

use colored::Colorize;

use super::preview;
use crate::label::{LabelResult, MIN_CONTENT_LENGTH};
use crate::pipeline::batch::BatchReport;

/// Characters of source text shown above a single result.
const PREVIEW_CHARS: usize = 72;

/// Widest the document-name column gets, "..." included.
const NAME_COLUMN_CHARS: usize = 40;

/// Display the labels for one document.
pub fn display_result(source: &str, cleaned: &str, result: &LabelResult) {
    println!("\n{}", format!("=== Labels for {source} ===").bold());
    if !cleaned.is_empty() {
        println!("  {}", preview(cleaned, PREVIEW_CHARS).dimmed());
    }
    println!();
    println!("  {}", format_labels(result));
    println!();
}

/// Display a batch report: one line per document, then a summary.
pub fn display_batch(report: &BatchReport) {
    let total = report.labeled.len() + report.failed.len();
    if total == 0 {
        println!("No documents found.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Labeled {total} documents ===").bold()
    );
    println!();

    let name_width = report
        .labeled
        .iter()
        .map(|d| name_column(&d.name).chars().count())
        .chain(report.failed.iter().map(|d| name_column(&d.name).chars().count()))
        .max()
        .unwrap_or(0);

    for doc in &report.labeled {
        println!(
            "  {:<width$}  {}",
            name_column(&doc.name),
            format_labels(&doc.result),
            width = name_width
        );
    }
    for doc in &report.failed {
        println!(
            "  {:<width$}  {} {}",
            name_column(&doc.name),
            "error:".red().bold(),
            doc.error,
            width = name_width
        );
    }

    println!();
    println!("  {}", summary_line(report));
}

/// A document name cut to fit [`NAME_COLUMN_CHARS`].
fn name_column(name: &str) -> String {
    if name.chars().count() <= NAME_COLUMN_CHARS {
        name.to_string()
    } else {
        preview(name, NAME_COLUMN_CHARS - 3)
    }
}

/// Per-outcome counts; every document lands in exactly one bucket.
fn summary_line(report: &BatchReport) -> String {
    format!(
        "{} labeled, {} empty, {} too short, {} failed",
        report.labeled_count().to_string().bright_green(),
        report.empty_count().to_string().dimmed(),
        report.too_short_count().to_string().yellow(),
        report.failed.len().to_string().red(),
    )
}

/// One-line rendering of a result: bracketed labels, or why there are none.
fn format_labels(result: &LabelResult) -> String {
    if result.is_too_short {
        return format!("(too short, under {MIN_CONTENT_LENGTH} characters)")
            .yellow()
            .to_string();
    }
    if result.labels.is_empty() {
        return "(no labels)".dimmed().to_string();
    }
    result
        .labels
        .iter()
        .map(|label| format!("[{}]", label.bright_cyan()))
        .collect::<Vec<_>>()
        .join(" ")
}
