//! Sequential checking of several question files

use std::io::{self, Write};
use std::path::PathBuf;

use super::checker::analyze;
use crate::reporting::report_writer::{write_summary, ReportFormat};

/// Totals over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Sources that were analyzed successfully
    pub checked: usize,
    /// Sources that could not be read, parsed or understood
    pub failed: usize,
    /// Successfully checked sources with at least one duplicate answer
    pub with_duplicates: usize,
}

/// Check each source in order, printing a report or diagnostic per source
///
/// A failing source never stops the run. Text diagnostics go to `out` next to
/// the reports; in JSON mode they go to `err` so `out` stays machine-readable.
///
/// # Arguments
/// * `sources` - Files to check, in order
/// * `format` - Report format
/// * `separate` - Print a blank line after every source (directory-scan mode)
/// * `out` - Report destination
/// * `err` - Diagnostic destination in JSON mode
pub fn check_sources<W: Write, E: Write>(
    sources: &[PathBuf],
    format: ReportFormat,
    separate: bool,
    out: &mut W,
    err: &mut E,
) -> io::Result<BatchOutcome> {
    let mut outcome = BatchOutcome::default();

    for path in sources {
        match analyze(path) {
            Ok(summary) => {
                outcome.checked += 1;
                if summary.has_duplicates() {
                    outcome.with_duplicates += 1;
                }
                tracing::info!(
                    file = %path.display(),
                    duplicates = summary.duplicates.len(),
                    "checked question file"
                );
                write_summary(out, &summary, format)?;
            }
            Err(e) => {
                outcome.failed += 1;
                tracing::info!(
                    file = %e.path().display(),
                    error = %e,
                    "failed to check question file"
                );
                match format {
                    ReportFormat::Text => writeln!(out, "{}", e)?,
                    ReportFormat::Json => writeln!(err, "{}", e)?,
                }
            }
        }

        if separate && format == ReportFormat::Text {
            writeln!(out)?;
        }
    }

    Ok(outcome)
}
