//! Data types for the delete command.

use crate::error::PlayError;
use std::path::PathBuf;

/// Which playgrounds a deletion targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionRequest {
    /// The playground `<home>/<name>`, whether or not the ledger records it.
    ByName(String),
    /// The most recent `n` ledger entries. Must be positive.
    ByCount(i64),
    /// Every ledger entry.
    All,
}

impl SelectionRequest {
    /// Interpret a raw `-d` value: integers are counts, anything else a name.
    ///
    /// Playground names can never be integers, so the two never collide.
    /// Surrounding whitespace is dropped, as it is when creating.
    pub fn parse(target: &str) -> Self {
        let target = target.trim();
        match target.parse::<i64>() {
            Ok(n) => SelectionRequest::ByCount(n),
            Err(_) => SelectionRequest::ByName(target.to_string()),
        }
    }
}

/// Outcome of a deletion batch.
#[derive(Debug, Default)]
pub struct DeletionReport {
    /// Candidates removed from disk, in processing order.
    pub removed: Vec<PathBuf>,
    /// Why each remaining candidate was left in place, in processing order.
    /// Every error names its path.
    pub failed: Vec<PlayError>,
}

impl DeletionReport {
    /// Whether the batch had no candidates at all.
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.failed.is_empty()
    }
}
