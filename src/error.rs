//! Error types for the goplay CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for goplay operations.
#[derive(Error, Debug)]
pub enum PlayError {
    /// A filesystem or ledger read/write failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The directory exists but carries no marker file, so it was not created by goplay.
    #[error("refusing to delete '{}': no {} marker file", .0.display(), crate::marker::MARKER_FILE)]
    NotOwned(PathBuf),

    /// A count, name, or flag combination was rejected.
    #[error("{0}")]
    InvalidArgument(String),

    /// The target directory does not exist.
    #[error("'{}' does not exist", .0.display())]
    NotFound(PathBuf),

    /// The config file could not be parsed or holds invalid values.
    #[error("invalid config: {0}")]
    Config(String),

    /// An external command (editor, module init) failed.
    #[error("command failed: {0}")]
    Command(String),
}

impl PlayError {
    /// Wrap an I/O error with a description of what was being attempted.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        PlayError::Io {
            context: context.into(),
            source,
        }
    }

    /// Shorthand for an I/O error on a specific path.
    pub fn io_at(action: &str, path: &Path, source: std::io::Error) -> Self {
        Self::io(format!("failed to {} '{}'", action, path.display()), source)
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PlayError::Io { .. } => exit_codes::IO_FAILURE,
            PlayError::NotOwned(_) => exit_codes::USER_ERROR,
            PlayError::InvalidArgument(_) => exit_codes::USER_ERROR,
            PlayError::NotFound(_) => exit_codes::USER_ERROR,
            PlayError::Config(_) => exit_codes::USER_ERROR,
            PlayError::Command(_) => exit_codes::COMMAND_FAILURE,
        }
    }
}

/// Result type alias for goplay operations.
pub type Result<T> = std::result::Result<T, PlayError>;
