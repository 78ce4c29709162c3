//! Configuration types and defaults for goplay.

use serde::{Deserialize, Serialize};

/// What to do when the directory for a new playground already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExistingDirPolicy {
    /// Reuse the directory: setup skips files that are already there (default).
    #[default]
    Reuse,
    /// Refuse to create the playground.
    Fail,
}

/// Environment variable overriding `editor_command`.
pub const EDITOR_COMMAND_ENV: &str = "GOPLAY_CODE_CMD";

/// Program written into new playgrounds when no template is configured.
pub const DEFAULT_TEMPLATE: &str = r#"package main

import (
	"fmt"
)

func main() {
	fmt.Println("Hello world")
}
"#;

pub(crate) fn default_editor_command() -> String {
    "code".to_string()
}
pub(crate) fn default_init_command() -> String {
    "go mod init main".to_string()
}
pub(crate) fn default_entry_file() -> String {
    "main.go".to_string()
}
pub(crate) fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}
