use std::io::Write;

use crate::error::ScanError;
use crate::model::MatchReport;

/// # Errors
///
/// Fails only when writing to `out` fails.
pub fn write_banner(out: &mut impl Write, title: &str) -> Result<(), ScanError> {
    let rule = "=".repeat(80);
    writeln!(out, "{rule}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{rule}")?;
    Ok(())
}

/// One blank line and a header per report, then `Ligne <index>: <line>` rows.
///
/// # Errors
///
/// Fails only when writing to `out` fails.
pub fn write_reports(out: &mut impl Write, reports: &[MatchReport]) -> Result<(), ScanError> {
    for report in reports {
        writeln!(out)?;
        writeln!(out, "{}", report.title)?;
        for found in &report.matches {
            writeln!(out, "Ligne {}: {}", found.index, found.text)?;
        }
    }
    Ok(())
}
