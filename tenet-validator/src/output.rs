//! Shared output formatting for validation reports.
//!
//! Provides JSON and plain-text formatters for `ValidationReport`. ANSI color
//! is intentionally excluded from this module; that concern belongs to the
//! CLI layer, and plain output can be piped or archived untouched.

use std::io::Write;

use crate::report::ValidationReport;

/// Format a `ValidationReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `ValidationReport` as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  TENET DOCUMENTATION VALIDATOR")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "  Documentation root:  {}", report.root.display())?;
    writeln!(writer, "  Documents scanned:   {}", report.scanned_documents)?;
    writeln!(writer)?;

    for result in &report.results {
        let status = if result.passed {
            "\u{2713} PASS"
        } else {
            "\u{2717} FAIL"
        };
        writeln!(writer, "{status} {}", result.name)?;
        writeln!(writer, "    {}", result.message)?;
        writeln!(writer)?;
    }

    if !report.read_failures.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  READ FAILURES (files that could not be loaded)")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for failure in &report.read_failures {
            writeln!(writer, "{}", failure.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(
        writer,
        "Summary: {}/{} principles validated",
        report.passed_count(),
        report.results.len()
    )?;
    if report.ok {
        writeln!(
            writer,
            "\u{2713} All {} principles validated successfully",
            report.results.len()
        )?;
    } else {
        writeln!(
            writer,
            "\u{2717} {} principle(s) failed validation",
            report.failed_count()
        )?;
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}
