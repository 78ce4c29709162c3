//! Implementation of `goplay --list`.
//!
//! Prints every ledger entry, oldest first, with whether it is still a marked
//! playground on disk.

use crate::error::{PlayError, Result};
use crate::ledger::Ledger;
use crate::marker;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// State of a recorded playground on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// Directory exists and carries the marker.
    Owned,
    /// Directory exists without a marker; goplay will not delete it.
    Unmarked,
    /// Directory is gone.
    Missing,
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryStatus::Owned => write!(f, "owned"),
            EntryStatus::Unmarked => write!(f, "unmarked"),
            EntryStatus::Missing => write!(f, "missing"),
        }
    }
}

/// One line of the listing.
#[derive(Debug, Clone, Serialize)]
pub struct ListEntry {
    pub path: PathBuf,
    pub status: EntryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Local>>,
}

impl ListEntry {
    fn inspect(path: &Path) -> Self {
        let status = match marker::verify(path) {
            Ok(()) => EntryStatus::Owned,
            Err(PlayError::NotFound(_)) => EntryStatus::Missing,
            Err(_) => EntryStatus::Unmarked,
        };
        let modified = path
            .metadata()
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Local>::from);

        Self {
            path: path.to_path_buf(),
            status,
            modified,
        }
    }
}

/// Describe every ledger entry, oldest first.
pub fn list_entries(ledger: &mut Ledger) -> Result<Vec<ListEntry>> {
    Ok(ledger
        .read_all()?
        .iter()
        .map(|path| ListEntry::inspect(path))
        .collect())
}

/// Execute `goplay --list`.
pub fn cmd_list(ledger: &mut Ledger, json: bool) -> Result<()> {
    let entries = list_entries(ledger)?;

    if json {
        let out = serde_json::to_string_pretty(&entries)
            .map_err(|e| PlayError::io("failed to serialize listing", e.into()))?;
        println!("{}", out);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No playgrounds recorded.");
        return Ok(());
    }

    for entry in &entries {
        let modified = entry
            .modified
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<9} {:<16} {}",
            entry.status.to_string(),
            modified,
            entry.path.display()
        );
    }

    Ok(())
}
