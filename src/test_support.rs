#[cfg(unix)]
use crate::config::Config;
use crate::ledger::Ledger;
use crate::marker;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Restores an environment variable on drop.
///
/// Setting environment variables is process-global; every test using this
/// guard must be `#[serial]`.
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<OsString>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        Self::set_os(key, OsStr::new(value))
    }

    pub(crate) fn set_os(key: &'static str, value: &OsStr) -> Self {
        let original = env::var_os(key);
        // SAFETY: callers are #[serial], so no other thread reads the environment.
        unsafe { env::set_var(key, value) };
        Self { key, original }
    }

    pub(crate) fn unset(key: &'static str) -> Self {
        let original = env::var_os(key);
        // SAFETY: callers are #[serial], so no other thread reads the environment.
        unsafe { env::remove_var(key) };
        Self { key, original }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: callers are #[serial], so no other thread reads the environment.
        unsafe {
            match &self.original {
                Some(v) => env::set_var(self.key, v),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// A temporary goplay home with an open ledger.
pub(crate) struct TestHome {
    pub(crate) dir: TempDir,
    pub(crate) ledger: Ledger,
}

impl TestHome {
    pub(crate) fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let ledger = Ledger::open(dir.path().join(crate::ledger::LEDGER_FILE)).unwrap();
        Self { dir, ledger }
    }

    pub(crate) fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a marked playground with some content and record it in the ledger.
    pub(crate) fn add_playground(&mut self, name: &str) -> PathBuf {
        let dir = self.add_unmarked(name);
        marker::stamp(&dir).unwrap();
        dir
    }

    /// Create a playground directory without a marker and record it in the ledger.
    pub(crate) fn add_unmarked(&mut self, name: &str) -> PathBuf {
        let dir = self.path().join(name);
        std::fs::create_dir_all(dir.join("pkg")).unwrap();
        std::fs::write(dir.join("pkg").join("lib.go"), "package pkg\n").unwrap();
        self.ledger.append(&dir).unwrap();
        dir
    }

    pub(crate) fn entries(&mut self) -> Vec<PathBuf> {
        self.ledger.read_all().unwrap()
    }
}

/// Config that runs no real editor or toolchain.
#[cfg(unix)]
pub(crate) fn quiet_config() -> Config {
    Config {
        editor_command: "true".to_string(),
        init_command: "true".to_string(),
        ..Config::default()
    }
}
