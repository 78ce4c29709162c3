//! The playground ledger.
//!
//! The ledger is a plain text file (`<home>/.generated_dirs`) listing the
//! absolute path of every playground goplay has created, one per line,
//! oldest first. New playgrounds are appended; deletion removes whole lines
//! by rewriting the file in place and truncating the tail.
//!
//! A single [`Ledger`] holds the open file handle for the whole run. Every
//! operation repositions the handle with a seek before touching the file.
//!
//! # Limitations
//!
//! - `rewrite` is not crash-atomic: an interruption between the write and the
//!   truncate can leave stale bytes at the end of the file.
//! - There is no locking; two goplay processes against the same home
//!   directory can race on the file.
//! - Only UTF-8 paths can be recorded. Anything else is refused on append
//!   and rewrite.

use crate::error::{PlayError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// File name of the ledger inside the goplay home directory.
pub const LEDGER_FILE: &str = ".generated_dirs";

/// Open handle to the ledger file.
#[derive(Debug)]
pub struct Ledger {
    file: File,
    path: PathBuf,
}

impl Ledger {
    /// Open the ledger at `path` for reading and writing, creating it if missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| PlayError::io_at("open ledger", &path, e))?;

        Ok(Self { file, path })
    }

    /// Path of the underlying ledger file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a playground path as the newest entry.
    pub fn append(&mut self, dir: &Path) -> Result<()> {
        self.file
            .seek(SeekFrom::End(0))
            .map_err(|e| PlayError::io_at("seek to end of ledger", &self.path, e))?;

        let line = format!("{}\n", entry_line(dir)?);
        self.file
            .write_all(line.as_bytes())
            .map_err(|e| PlayError::io_at("append to ledger", &self.path, e))?;

        tracing::debug!(entry = %dir.display(), "appended ledger entry");
        Ok(())
    }

    /// Read every entry, oldest first.
    ///
    /// Lines are trimmed and blank lines are skipped.
    pub fn read_all(&mut self) -> Result<Vec<PathBuf>> {
        self.file
            .seek(SeekFrom::Start(0))
            .map_err(|e| PlayError::io_at("seek to start of ledger", &self.path, e))?;

        let mut entries = Vec::new();
        for line in BufReader::new(&self.file).lines() {
            let line = line.map_err(|e| PlayError::io_at("read ledger", &self.path, e))?;
            let line = line.trim();
            if !line.is_empty() {
                entries.push(PathBuf::from(line));
            }
        }

        Ok(entries)
    }

    /// Replace the ledger contents with `entries`, in the given order.
    ///
    /// Writes from the start of the file and then truncates to the exact
    /// length written. The content ends with a newline unless it is empty.
    pub fn rewrite(&mut self, entries: &[PathBuf]) -> Result<()> {
        let content = render_entries(entries)?;

        self.file
            .seek(SeekFrom::Start(0))
            .map_err(|e| PlayError::io_at("seek to start of ledger", &self.path, e))?;
        self.file
            .write_all(content.as_bytes())
            .map_err(|e| PlayError::io_at("write ledger", &self.path, e))?;
        self.file
            .set_len(content.len() as u64)
            .map_err(|e| PlayError::io_at("truncate ledger", &self.path, e))?;
        self.file
            .flush()
            .map_err(|e| PlayError::io_at("flush ledger", &self.path, e))?;

        tracing::debug!(entries = entries.len(), "rewrote ledger");
        Ok(())
    }
}

/// The text of a ledger line for `path`.
fn entry_line(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| {
        PlayError::InvalidArgument(format!(
            "cannot record '{}' in the ledger: path is not valid UTF-8",
            path.display()
        ))
    })
}

/// Join entries into ledger file content.
fn render_entries(entries: &[PathBuf]) -> Result<String> {
    let mut content = entries
        .iter()
        .map(|p| entry_line(p))
        .collect::<Result<Vec<_>>>()?
        .join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    Ok(content)
}
