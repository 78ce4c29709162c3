//! Directory and file scaffolding for new playgrounds.

use crate::config::{Config, ExistingDirPolicy};
use crate::error::{PlayError, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Create the playground directory.
///
/// Returns `true` when the directory was newly created, `false` when an
/// existing one is reused. With [`ExistingDirPolicy::Fail`] an existing
/// directory is an error.
pub(super) fn create_playground_dir(dir: &Path, policy: ExistingDirPolicy) -> Result<bool> {
    match fs::create_dir(dir) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => match policy {
            ExistingDirPolicy::Reuse if dir.is_dir() => {
                tracing::info!(dir = %dir.display(), "reusing existing playground directory");
                Ok(false)
            }
            ExistingDirPolicy::Reuse => Err(PlayError::InvalidArgument(format!(
                "'{}' exists and is not a directory",
                dir.display()
            ))),
            ExistingDirPolicy::Fail => Err(PlayError::InvalidArgument(format!(
                "'{}' already exists (existing_dir: fail)",
                dir.display()
            ))),
        },
        Err(e) => Err(PlayError::io_at("create playground directory", dir, e)),
    }
}

/// Write the template entry file into `dir` unless it already exists.
///
/// Returns the entry file path either way.
pub fn write_template_file(dir: &Path, config: &Config) -> Result<PathBuf> {
    let entry = dir.join(&config.entry_file);

    let mut file = match OpenOptions::new().write(true).create_new(true).open(&entry) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::debug!(entry = %entry.display(), "entry file exists, leaving it alone");
            return Ok(entry);
        }
        Err(e) => return Err(PlayError::io_at("create entry file", &entry, e)),
    };

    file.write_all(config.template.as_bytes())
        .map_err(|e| PlayError::io_at("write entry file", &entry, e))?;

    Ok(entry)
}
