//! Candidate selection for the delete command.

use super::types::SelectionRequest;
use crate::commands::create::naming::validate_name;
use crate::context::PlayContext;
use crate::error::{PlayError, Result};
use std::path::PathBuf;

/// Resolve a selection request against the current ledger entries.
///
/// - `ByName` yields `<home>/<name>` without consulting the ledger.
/// - `ByCount(n)` yields the last `min(n, len)` entries, oldest first.
/// - `All` yields every entry.
///
/// A non-positive count is rejected before anything is selected.
pub fn select_candidates(
    ctx: &PlayContext,
    request: &SelectionRequest,
    entries: &[PathBuf],
) -> Result<Vec<PathBuf>> {
    match request {
        SelectionRequest::ByName(name) => {
            validate_name(name)?;
            Ok(vec![ctx.playground_path(name)])
        }
        SelectionRequest::ByCount(n) if *n <= 0 => Err(PlayError::InvalidArgument(format!(
            "could not delete any playgrounds; count {} is not positive",
            n
        ))),
        SelectionRequest::ByCount(n) => {
            let count = usize::try_from(*n).unwrap_or(usize::MAX).min(entries.len());
            Ok(most_recent(entries, count))
        }
        SelectionRequest::All => Ok(entries.to_vec()),
    }
}

/// The last `count` entries, in their original order.
fn most_recent(entries: &[PathBuf], count: usize) -> Vec<PathBuf> {
    entries[entries.len() - count..].to_vec()
}
