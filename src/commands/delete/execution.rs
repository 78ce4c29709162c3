//! Deletion execution and ledger reconciliation.

use super::types::DeletionReport;
use crate::error::{PlayError, Result};
use crate::ledger::Ledger;
use crate::marker;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Try to delete every candidate, in order.
///
/// A failed candidate is recorded and skipped; it never stops the batch.
pub fn delete_candidates(candidates: &[PathBuf]) -> DeletionReport {
    let mut report = DeletionReport::default();

    for path in candidates {
        match remove_playground(path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "removed playground");
                report.removed.push(path.clone());
            }
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "playground not removed");
                report.failed.push(error);
            }
        }
    }

    report
}

/// Remove a single playground after checking its marker.
pub fn remove_playground(path: &Path) -> Result<()> {
    marker::verify(path)?;
    fs::remove_dir_all(path).map_err(|e| PlayError::io_at("remove", path, e))
}

/// Drop the removed paths from the ledger, keeping every other entry in order.
///
/// `entries` is the ledger content read before the batch ran. Removed paths
/// that never appeared in it leave the ledger untouched.
pub fn reconcile_ledger(
    ledger: &mut Ledger,
    entries: &[PathBuf],
    removed: &[PathBuf],
) -> Result<()> {
    let removed: HashSet<&PathBuf> = removed.iter().collect();
    let retained: Vec<PathBuf> = entries
        .iter()
        .filter(|entry| !removed.contains(entry))
        .cloned()
        .collect();

    tracing::debug!(
        before = entries.len(),
        after = retained.len(),
        "reconciling ledger"
    );
    ledger.rewrite(&retained)
}
