//! Home directory resolution for goplay.
//!
//! All playgrounds live directly under one home directory. It is taken from
//! `GOPLAY_DIR` when set, otherwise `~/.goplay`. The ledger and config file
//! sit alongside the playgrounds in the same directory.

use crate::error::{PlayError, Result};
use crate::ledger::LEDGER_FILE;
use std::env::{self, VarError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Environment variable overriding the home directory.
pub const HOME_DIR_ENV: &str = "GOPLAY_DIR";

/// Default home directory name under the user's home.
pub const DEFAULT_HOME_DIR: &str = ".goplay";

/// Config file name inside the home directory.
pub const CONFIG_FILE: &str = "config.yaml";

/// Resolved paths for a goplay run. All paths are absolute.
#[derive(Debug, Clone)]
pub struct PlayContext {
    /// Directory holding every playground, the ledger, and the config.
    pub home_dir: PathBuf,
}

impl PlayContext {
    /// Resolve the context from the environment.
    pub fn resolve() -> Result<Self> {
        Ok(Self::from_home(resolve_home_dir()?))
    }

    /// Build a context rooted at a known home directory.
    pub fn from_home<P: AsRef<Path>>(home_dir: P) -> Self {
        Self {
            home_dir: home_dir.as_ref().to_path_buf(),
        }
    }

    /// Path to the ledger file.
    pub fn ledger_path(&self) -> PathBuf {
        self.home_dir.join(LEDGER_FILE)
    }

    /// Path to the config file.
    pub fn config_path(&self) -> PathBuf {
        self.home_dir.join(CONFIG_FILE)
    }

    /// Path a playground named `name` would occupy.
    pub fn playground_path(&self, name: &str) -> PathBuf {
        self.home_dir.join(name)
    }

    /// Create the home directory if it does not exist yet.
    ///
    /// Only the final component is created; a missing parent is an error.
    pub fn ensure_home(&self) -> Result<()> {
        match fs::create_dir(&self.home_dir) {
            Ok(()) => {
                tracing::info!(home = %self.home_dir.display(), "created goplay home directory");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(PlayError::io_at(
                "create home directory",
                &self.home_dir,
                e,
            )),
        }
    }
}

/// Resolve the goplay home directory.
///
/// `GOPLAY_DIR` wins when set and non-empty; otherwise `~/.goplay`. A
/// relative `GOPLAY_DIR` is anchored at the current directory so ledger
/// entries are always absolute.
pub fn resolve_home_dir() -> Result<PathBuf> {
    if let Some(dir) = env_override(HOME_DIR_ENV)? {
        let dir = PathBuf::from(dir.trim());
        if dir.is_absolute() {
            return Ok(dir);
        }
        let cwd = env::current_dir()
            .map_err(|e| PlayError::io("failed to get current working directory", e))?;
        return Ok(cwd.join(dir));
    }

    let user_home = dirs::home_dir().ok_or_else(|| {
        PlayError::Config(format!(
            "could not determine the user's home directory; set {} instead",
            HOME_DIR_ENV
        ))
    })?;
    Ok(user_home.join(DEFAULT_HOME_DIR))
}

/// Read an environment variable that overrides a setting.
///
/// Unset or blank means no override. A value that is not valid UTF-8 is an
/// error rather than being ignored, since the ledger only stores UTF-8 paths.
pub fn env_override(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(PlayError::Config(format!(
            "{} is not valid UTF-8",
            key
        ))),
    }
}
