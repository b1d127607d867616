//! Keystore configuration resolution.
//!
//! Resolves release signing configuration from the first existing
//! `key.properties` among the conventional candidate locations of an
//! Android project. Absence of a credentials file is a valid, silent
//! outcome: builds without credentials proceed unsigned.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use secrecy::SecretString;

use crate::error::{Result, SignetError};
use crate::models::{AndroidProject, SigningConfig};
use crate::properties;

/// Returns the first existing candidate `key.properties`, if any.
pub fn locate_properties_file(project: &AndroidProject) -> Option<PathBuf> {
    for candidate in project.candidate_properties_files() {
        if candidate.is_file() {
            tracing::debug!("Found signing properties at {}", candidate.display());
            return Some(candidate);
        }
    }
    tracing::debug!("No key.properties found; release builds stay unsigned");
    None
}

/// Resolves the `storeFile` value against its candidate base directories.
///
/// Priority:
/// 1. relative to the properties file's own directory, if that file exists
/// 2. relative to the project root, if that file exists
/// 3. the raw literal path, unresolved and unchecked
///
/// The literal fallback defers the missing-keystore failure to the packaging
/// step; it is logged here so the deferral is visible.
pub fn resolve_store_file(raw: &str, properties_dir: &Path, project_root: &Path) -> PathBuf {
    let raw_path = Path::new(raw);
    // An absolute path resolves to itself under every candidate base.
    if raw_path.is_absolute() {
        return raw_path.to_path_buf();
    }

    let beside_properties = properties_dir.join(raw_path);
    if beside_properties.exists() {
        return beside_properties;
    }

    let at_root = project_root.join(raw_path);
    if at_root.exists() {
        return at_root;
    }

    tracing::warn!(
        "Keystore '{}' not found beside the properties file or under {}; \
         passing the path through unresolved",
        raw,
        project_root.display()
    );
    raw_path.to_path_buf()
}

/// Resolves the full release signing configuration for a project.
///
/// Returns `Ok(None)` when no candidate `key.properties` exists. An
/// unreadable or malformed file, or one missing a required key, is an
/// error: the credentials file is operator-authored, so there is nothing
/// sensible to fall back to.
pub fn resolve(project: &AndroidProject) -> Result<Option<SigningConfig>> {
    let Some(properties_file) = locate_properties_file(project) else {
        return Ok(None);
    };

    let content = std::fs::read_to_string(&properties_file)
        .map_err(|source| SignetError::io(&properties_file, source))?;
    let props = properties::parse(&properties_file, &content)?;

    let store_file = required(&props, &properties_file, properties::KEY_STORE_FILE)?;
    let store_password = required(&props, &properties_file, properties::KEY_STORE_PASSWORD)?;
    let key_alias = required(&props, &properties_file, properties::KEY_KEY_ALIAS)?;
    let key_password = required(&props, &properties_file, properties::KEY_KEY_PASSWORD)?;

    let properties_dir = properties_file.parent().unwrap_or_else(|| Path::new("."));
    let store_file = resolve_store_file(store_file, properties_dir, &project.project_root);

    Ok(Some(SigningConfig {
        store_file,
        store_type: props.get(properties::KEY_STORE_TYPE).cloned(),
        store_password: SecretString::from(store_password.to_string()),
        key_alias: key_alias.to_string(),
        key_password: SecretString::from(key_password.to_string()),
        properties_file,
    }))
}

fn required<'a>(
    props: &'a HashMap<String, String>,
    path: &Path,
    key: &'static str,
) -> Result<&'a str> {
    props
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| SignetError::PropertyMissing {
            path: path.to_path_buf(),
            key,
        })
}
