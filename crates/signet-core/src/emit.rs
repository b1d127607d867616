//! Writing and removing `key.properties`.

use std::path::{Path, PathBuf};

use crate::error::{Result, SignetError};
use crate::models::KEY_PROPERTIES_FILE;
use crate::properties;

/// Writes `key.properties` at the Android project root.
///
/// `store_file` is written as given; the resolver's base-directory priority
/// applies when it is read back, so a path relative to the project root is
/// the conventional choice.
pub fn write_key_properties(
    project_root: &Path,
    store_file: &Path,
    store_password: &str,
    key_alias: &str,
    key_password: &str,
    store_type: Option<&str>,
) -> Result<PathBuf> {
    if !project_root.is_dir() {
        return Err(SignetError::Signing(format!(
            "Android project root not found: {}",
            project_root.display()
        )));
    }

    let path = project_root.join(KEY_PROPERTIES_FILE);
    let content = properties::generate(
        store_file,
        store_password,
        key_alias,
        key_password,
        store_type,
    );
    std::fs::write(&path, content).map_err(|source| SignetError::io(&path, source))?;

    tracing::debug!("Wrote key.properties to {}", path.display());
    Ok(path)
}

/// Removes `key.properties` from the Android project root.
///
/// Returns `Ok(false)` when the file was not there; removal is idempotent.
pub fn remove_key_properties(project_root: &Path) -> Result<bool> {
    let path = project_root.join(KEY_PROPERTIES_FILE);
    if !path.exists() {
        return Ok(false);
    }

    std::fs::remove_file(&path).map_err(|source| SignetError::io(&path, source))?;
    tracing::debug!("Removed {}", path.display());
    Ok(true)
}
