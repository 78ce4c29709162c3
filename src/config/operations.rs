//! Config loading, validation, and utility operations.

use super::model::Config;
use super::EDITOR_COMMAND_ENV;
use crate::context::env_override;
use crate::error::{PlayError, Result};
use crate::fs::atomic_write_file;
use std::path::{Component, Path};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|e| PlayError::io_at("read config file", path, e))?;

        Self::from_yaml(&content)
    }

    /// Load the config for a run.
    ///
    /// Writes a default config file first if none exists, then applies
    /// environment overrides and validates the result.
    pub fn load_for_run<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            let yaml = Config::default().to_yaml()?;
            atomic_write_file(path, &yaml)?;
            tracing::info!(path = %path.display(), "wrote default config");
        }

        let mut config = Self::load(path)?;
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map.
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PlayError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| PlayError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Apply environment overrides (`GOPLAY_CODE_CMD`).
    pub fn apply_env(&mut self) -> Result<()> {
        if let Some(cmd) = env_override(EDITOR_COMMAND_ENV)? {
            tracing::debug!(editor = %cmd, "editor command overridden from environment");
            self.editor_command = cmd;
        }
        Ok(())
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `editor_command` must contain a program name
    /// - `init_command` must parse (it may be empty)
    /// - `entry_file` must be a plain file name, not a path
    pub fn validate(&self) -> Result<()> {
        self.editor_argv()?;
        self.init_argv()?;

        let mut components = Path::new(&self.entry_file).components();
        let is_plain_name = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !is_plain_name {
            return Err(PlayError::Config(format!(
                "entry_file must be a plain file name, got '{}'",
                self.entry_file
            )));
        }

        Ok(())
    }

    /// The editor command split into program and arguments.
    pub fn editor_argv(&self) -> Result<Vec<String>> {
        let argv = split_command("editor_command", &self.editor_command)?;
        if argv.is_empty() {
            return Err(PlayError::Config(
                "editor_command must not be empty".to_string(),
            ));
        }
        Ok(argv)
    }

    /// The module init command split into program and arguments, if enabled.
    pub fn init_argv(&self) -> Result<Option<Vec<String>>> {
        let argv = split_command("init_command", &self.init_command)?;
        Ok(if argv.is_empty() { None } else { Some(argv) })
    }
}

fn split_command(field: &str, command: &str) -> Result<Vec<String>> {
    shell_words::split(command.trim()).map_err(|e| {
        PlayError::Config(format!(
            "failed to parse {} '{}': {}\n\
             Fix: check for unmatched quotes or invalid escape sequences.",
            field, command, e
        ))
    })
}
