//! Output and prompts for the delete command.

use super::types::DeletionReport;
use crate::error::{PlayError, Result};
use std::io::{BufRead, Write};
use std::path::Path;

/// Print one line per removed playground and per failure, then a summary.
pub fn print_report(report: &DeletionReport, home_dir: &Path) {
    for path in &report.removed {
        println!("Removed: {}", make_relative(path, home_dir));
    }
    for error in &report.failed {
        eprintln!("{}", describe_failure(error));
    }

    if report.failed.is_empty() {
        println!("Deleted {} playground(s).", report.removed.len());
    } else {
        println!(
            "Deleted {} playground(s), {} failed.",
            report.removed.len(),
            report.failed.len()
        );
    }
}

/// One stderr line for a candidate left in place.
///
/// Every deletion error already names the path.
pub fn describe_failure(error: &PlayError) -> String {
    format!("Could not delete: {}", error)
}

/// Ask before deleting everything. Only an exact `y` confirms.
pub fn confirm_delete_all<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    write!(output, "Delete all playgrounds? Enter 'y' to confirm: ")
        .and_then(|()| output.flush())
        .map_err(|e| PlayError::io("failed to write prompt", e))?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(|e| PlayError::io("failed to read confirmation", e))?;

    Ok(answer.trim() == "y")
}

/// Make a path relative to the home directory for display.
pub fn make_relative(path: &Path, home_dir: &Path) -> String {
    path.strip_prefix(home_dir)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.display().to_string())
}
