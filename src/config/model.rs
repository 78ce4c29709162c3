//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for goplay.
///
/// This struct represents the contents of `<home>/config.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Editor
    // =========================================================================
    /// Command used to open the playground directory and its entry file.
    /// Split with shell quoting rules; the path is appended as the last argument.
    #[serde(default = "default_editor_command")]
    pub editor_command: String,

    // =========================================================================
    // Scaffolding
    // =========================================================================
    /// Command run inside a new playground to initialize it (empty disables).
    /// Failures are ignored so that re-running on an existing playground works.
    #[serde(default = "default_init_command")]
    pub init_command: String,

    /// Name of the source file written into each new playground.
    #[serde(default = "default_entry_file")]
    pub entry_file: String,

    /// Content of the entry file. Never overwrites an existing file.
    #[serde(default = "default_template")]
    pub template: String,

    /// Behavior when the playground directory already exists.
    #[serde(default)]
    pub existing_dir: ExistingDirPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor_command: default_editor_command(),
            init_command: default_init_command(),
            entry_file: default_entry_file(),
            template: default_template(),
            existing_dir: ExistingDirPolicy::default(),
        }
    }
}
