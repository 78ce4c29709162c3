//! Ownership markers for playground directories.
//!
//! Every playground goplay creates gets an empty `.goplay_marker` file. A
//! directory counts as owned by goplay only while that file exists directly
//! inside it, and nothing is ever deleted without checking it first.

use crate::error::{PlayError, Result};
use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;

/// Name of the sentinel file placed inside each playground.
pub const MARKER_FILE: &str = ".goplay_marker";

/// Create the marker file inside `dir`. An existing marker is left untouched.
pub fn stamp(dir: &Path) -> Result<()> {
    let marker = dir.join(MARKER_FILE);
    match OpenOptions::new().write(true).create_new(true).open(&marker) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(PlayError::io_at("create marker", &marker, e)),
    }
}

/// Check that `dir` exists and carries a marker file.
pub fn verify(dir: &Path) -> Result<()> {
    if let Err(e) = dir.symlink_metadata() {
        return Err(match e.kind() {
            ErrorKind::NotFound => PlayError::NotFound(dir.to_path_buf()),
            _ => PlayError::io_at("inspect", dir, e),
        });
    }

    let marker = dir.join(MARKER_FILE);
    match marker.symlink_metadata() {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(PlayError::NotOwned(dir.to_path_buf())),
        // A regular file at `dir` makes the marker path invalid rather than absent.
        Err(e) if e.kind() == ErrorKind::NotADirectory => {
            Err(PlayError::NotOwned(dir.to_path_buf()))
        }
        Err(e) => Err(PlayError::io_at("inspect marker", &marker, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_stamp_then_verify() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("play");
        fs::create_dir(&dir).unwrap();

        stamp(&dir).unwrap();

        assert!(dir.join(MARKER_FILE).exists());
        assert_eq!(fs::metadata(dir.join(MARKER_FILE)).unwrap().len(), 0);
        verify(&dir).unwrap();
    }

    #[test]
    fn test_stamp_is_idempotent_and_keeps_content() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join(MARKER_FILE), "anything").unwrap();

        stamp(dir).unwrap();
        stamp(dir).unwrap();

        assert_eq!(
            fs::read_to_string(dir.join(MARKER_FILE)).unwrap(),
            "anything"
        );
    }

    #[test]
    fn test_verify_missing_marker_is_not_owned() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("foreign");
        fs::create_dir(&dir).unwrap();

        let err = verify(&dir).unwrap_err();
        assert!(matches!(err, PlayError::NotOwned(ref p) if p == &dir));
    }

    #[test]
    fn test_verify_missing_dir_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("nope");

        let err = verify(&dir).unwrap_err();
        assert!(matches!(err, PlayError::NotFound(ref p) if p == &dir));
    }

    #[test]
    fn test_verify_regular_file_is_not_owned() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        assert!(matches!(
            verify(&file).unwrap_err(),
            PlayError::NotOwned(_)
        ));
    }

    #[test]
    fn test_stamp_into_missing_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = stamp(&temp_dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, PlayError::Io { .. }));
    }
}
