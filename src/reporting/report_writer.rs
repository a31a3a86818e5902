//! Rendering of analysis summaries

use clap::ValueEnum;
use std::fmt::Write as _;
use std::io::{self, Write};

use crate::core::checker::Summary;

const HEAVY_RULE: &str = "==================================================";
const LIGHT_RULE: &str = "--------------------------------------------------";

/// How summaries are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable report
    #[default]
    Text,
    /// One JSON object per file
    Json,
}

/// Render a summary as a human-readable report
///
/// Duplicate groups appear in ascending answer order, occurrences in file
/// order. The returned text starts with a blank line and ends with a newline.
pub fn format_summary(summary: &Summary) -> String {
    let mut out = String::new();
    // fmt::Write on String is infallible
    let _ = render_text(&mut out, summary);
    out
}

fn render_text(out: &mut String, summary: &Summary) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "Checking: {}", summary.file.display())?;
    writeln!(out, "{}", HEAVY_RULE)?;
    writeln!(out, "Total questions: {}", summary.total_questions)?;
    writeln!(out, "Unique answers: {}", summary.unique_answers)?;

    if !summary.has_duplicates() {
        writeln!(out)?;
        writeln!(out, "✓ No duplicate answers found!")?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "Duplicate answers found:")?;
    writeln!(out, "{}", LIGHT_RULE)?;

    for group in &summary.duplicates {
        writeln!(out)?;
        writeln!(
            out,
            "{} ({} occurrences):",
            group.answer,
            group.occurrences.len()
        )?;
        for occurrence in &group.occurrences {
            writeln!(out, "  - ID {}: {}", occurrence.id, occurrence.question)?;
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "Total duplicates: {} questions with {} unique duplicate answers",
        summary.duplicate_question_count(),
        summary.duplicates.len()
    )?;

    Ok(())
}

/// Render a summary as a single-line JSON object
pub fn format_summary_json(summary: &Summary) -> serde_json::Result<String> {
    serde_json::to_string(summary)
}

/// Write a summary to `out` in the requested format
///
/// # Arguments
/// * `out` - Destination, usually stdout
/// * `summary` - Summary to render
/// * `format` - Text report or JSON line
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &Summary,
    format: ReportFormat,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => out.write_all(format_summary(summary).as_bytes()),
        ReportFormat::Json => {
            let line = format_summary_json(summary).map_err(io::Error::other)?;
            writeln!(out, "{}", line)
        }
    }
}
