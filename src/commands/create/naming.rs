//! Playground name resolution and validation.

use crate::error::{PlayError, Result};
use std::path::{Component, Path};
use uuid::Uuid;

/// Pick the name for a new playground.
///
/// An absent or blank name yields a fresh UUID. Integer names are refused
/// because `goplay -d N` reads integers as counts.
pub fn resolve_name(requested: Option<&str>) -> Result<String> {
    let name = match requested.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => return Ok(Uuid::new_v4().to_string()),
    };

    if is_integer(&name) {
        return Err(PlayError::InvalidArgument(format!(
            "could not create playground \"{}\"; name cannot be an integer",
            name
        )));
    }
    validate_name(&name)?;

    Ok(name)
}

/// Check that `name` is a single directory name directly under the home directory.
pub fn validate_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(PlayError::InvalidArgument(format!(
            "invalid playground name \"{}\"; use a plain directory name",
            name
        ))),
    }
}

/// Whether `name` would be read as a deletion count.
pub fn is_integer(name: &str) -> bool {
    name.parse::<i64>().is_ok()
}
