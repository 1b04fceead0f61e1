//! CLI command logic - extracted for testability
//!
//! Pure formatting and path helpers used by main.rs. Display functions that
//! write to the terminal stay in main.rs; everything here returns strings and
//! paths so it can be unit tested without capturing stdout.

use std::path::{Path, PathBuf};

use crate::docs::DocFormat;
use crate::palette::Palette;
use crate::report::{ReportEntry, ReportSummary};

// ============================================================================
// Output Paths
// ============================================================================

/// Target path for one generated document.
pub fn output_path(dir: &Path, format: DocFormat) -> PathBuf {
    dir.join(format.file_name())
}

// ============================================================================
// Summary Lines
// ============================================================================

/// The generation summary line, e.g. "29 colors across 6 categories".
pub fn palette_summary(palette: &Palette) -> String {
    format!(
        "{} colors across {} categories",
        palette.len(),
        palette.category_count()
    )
}

/// One-line pass/fail tally for the accessibility report.
pub fn report_summary_line(summary: &ReportSummary) -> String {
    format!(
        "{}/{} pairs pass ({} failed, {} warnings)",
        summary.passed,
        summary.total_tests,
        summary.failed,
        summary.warnings.len()
    )
}

// ============================================================================
// Report Row Formatting
// ============================================================================

/// Fixed-width terminal row for one report entry (uncolored; main.rs adds
/// styling on top).
pub fn report_entry_line(entry: &ReportEntry) -> String {
    format!(
        "{:32} {:>7} {:>9}  {}",
        entry.color_pair,
        format!("{:.2}:1", entry.contrast.ratio),
        format!("{}", entry.contrast.level),
        if entry.contrast.passes { "✓" } else { "✗" }
    )
}

// ============================================================================
// Tests
// ============================================================================
