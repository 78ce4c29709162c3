//! Configuration for goplay.
//!
//! This module defines the Config struct that represents `<home>/config.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, environment overrides, and
//! validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::{EDITOR_COMMAND_ENV, ExistingDirPolicy};
