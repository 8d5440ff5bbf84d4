//! Implementation of `certsuite claim compare --claim1 <FILE> --claim2 <FILE>`.
//!
//! Decodes both claim files, runs every report assembler and writes the
//! comparison to stdout.
//!
//! Exit codes:
//! - 0 = comparison written, whether or not the claims differ
//! - 1 = the comparison could not be assembled or written
//! - 2 = either claim file could not be decoded
use std::io::Write;

use certsuite_core::{ClaimComparison, ClaimFile, compare_claims, parse_claim};

use crate::OutputFormat;
use crate::error::CliError;

/// Runs the `claim compare` command on the contents of two claim files.
///
/// # Errors
///
/// - [`CliError::ParseFailed`] if either input is not a claim document.
/// - [`CliError::ReportFailed`] if a report cannot be assembled.
/// - [`CliError::OutputFailed`] if writing to stdout fails.
pub fn run(content1: &str, content2: &str, format: OutputFormat) -> Result<(), CliError> {
    let claim1 = decode(content1, "claim 1")?;
    let claim2 = decode(content2, "claim 2")?;

    let comparison = compare_claims(&claim1, &claim2).map_err(|e| CliError::ReportFailed {
        detail: e.to_string(),
    })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_comparison(&mut out, &comparison, format)
}

fn decode(content: &str, label: &str) -> Result<ClaimFile, CliError> {
    parse_claim(content).map_err(|e| CliError::ParseFailed {
        detail: format!("{label}: {e}"),
    })
}

/// Writes `comparison` to `w` in the requested format.
fn write_comparison<W: Write>(
    w: &mut W,
    comparison: &ClaimComparison,
    format: OutputFormat,
) -> Result<(), CliError> {
    let written = match format {
        OutputFormat::Human => write!(w, "{comparison}"),
        OutputFormat::Json => serde_json::to_writer_pretty(&mut *w, comparison)
            .map_err(std::io::Error::from)
            .and_then(|()| writeln!(w)),
    };
    written
        .and_then(|()| w.flush())
        .map_err(|e| CliError::OutputFailed {
            detail: e.to_string(),
        })
}
