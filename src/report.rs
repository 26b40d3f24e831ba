//! Output formatting for gate outcomes.
//!
//! User-facing lines go through explicit writers so the binary can point
//! them at stdout/stderr while tests capture them in buffers.

use std::io::{self, Write};

use crate::gate::{GateOutcome, GateReport};
use crate::github::error::GateError;

const BYPASS_NOTICE: &str =
    "Running in bypass mode - workflow will continue despite no positive emoji PRs";

/// Writes the informational header for a run with the given window size.
///
/// # Errors
///
/// Returns [`GateError::Io`] when the writer fails.
pub fn write_check_header<W: Write>(writer: &mut W, days: u32) -> Result<(), GateError> {
    writeln!(
        writer,
        "Checking for positive emojis in PR titles merged in the last {days} days"
    )
    .map_err(|error| io_error(&error))
}

/// Writes the count line and the outcome-specific lines.
///
/// Informational output (counts, the qualifying listing) goes to `out`;
/// warnings and the failure reason go to `err`.
///
/// # Errors
///
/// Returns [`GateError::Io`] when either writer fails.
pub fn write_outcome<Out, Err>(
    out: &mut Out,
    err: &mut Err,
    outcome: &GateOutcome,
) -> Result<(), GateError>
where
    Out: Write,
    Err: Write,
{
    let report = outcome.report();
    writeln!(
        out,
        "Found {} merged PRs, of which {} have positive emojis",
        report.total_merged,
        report.qualifying_count()
    )
    .map_err(|error| io_error(&error))?;

    match outcome {
        GateOutcome::Passed { report: passed } => write_qualifying_listing(out, passed),
        GateOutcome::BypassWarning { message, .. } => {
            writeln!(err, "warning: {message}").map_err(|error| io_error(&error))?;
            writeln!(err, "warning: {BYPASS_NOTICE}").map_err(|error| io_error(&error))
        }
        GateOutcome::Failed { message, .. } => {
            writeln!(err, "{message}").map_err(|error| io_error(&error))
        }
    }
}

fn write_qualifying_listing<W: Write>(
    writer: &mut W,
    report: &GateReport,
) -> Result<(), GateError> {
    writeln!(writer, "✅ Found these PRs with positive emojis:")
        .map_err(|error| io_error(&error))?;

    for pull_request in &report.qualifying {
        let title = pull_request.title.as_deref().unwrap_or("(no title)");
        writeln!(writer, "#{} - {title}", pull_request.number)
            .map_err(|error| io_error(&error))?;
    }

    Ok(())
}

/// Converts an I/O error to a [`GateError::Io`].
fn io_error(error: &io::Error) -> GateError {
    GateError::Io {
        message: error.to_string(),
    }
}
