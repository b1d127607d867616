//! Java-style properties parsing and generation.
//!
//! `key.properties` is a flat Java properties file. Parsing covers the
//! subset Gradle's loader sees in practice for these files: `#`/`!`
//! comments, `=` or `:` separators, backslash line continuations, and
//! backslash escapes. Content is operator-authored; a malformed line is a
//! fatal error rather than something to recover from.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Result, SignetError};

pub const KEY_STORE_FILE: &str = "storeFile";
pub const KEY_STORE_TYPE: &str = "storeType";
pub const KEY_STORE_PASSWORD: &str = "storePassword";
pub const KEY_KEY_ALIAS: &str = "keyAlias";
pub const KEY_KEY_PASSWORD: &str = "keyPassword";

/// Parses properties file content into a flat string map.
///
/// Unknown keys are preserved; no presence or non-emptiness validation
/// happens here. `path` is used for error reporting only.
pub fn parse(path: &Path, content: &str) -> Result<HashMap<String, String>> {
    let mut props = HashMap::new();
    let lines: Vec<&str> = content.lines().collect();
    let mut i = 0;

    while i < lines.len() {
        let lineno = i + 1;
        let line = lines[i].trim();
        i += 1;

        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        // A trailing unescaped backslash continues the logical line.
        let mut logical = line.to_string();
        while ends_with_continuation(&logical) && i < lines.len() {
            logical.pop();
            logical.push_str(lines[i].trim_start());
            i += 1;
        }

        let (key, value) = split_pair(&logical).ok_or_else(|| SignetError::Properties {
            path: path.to_path_buf(),
            message: format!("line {}: expected key=value", lineno),
        })?;
        props.insert(unescape(key), unescape(value));
    }

    Ok(props)
}

/// Renders `key.properties` content for an Android release signing config.
///
/// The inverse of [`parse`] for the recognized keys: values containing
/// separators or backslashes are escaped so they survive a round trip.
pub fn generate(
    store_file: &Path,
    store_password: &str,
    key_alias: &str,
    key_password: &str,
    store_type: Option<&str>,
) -> String {
    let mut content = format!(
        "{}={}\n{}={}\n{}={}\n{}={}\n",
        KEY_STORE_PASSWORD,
        escape(store_password),
        KEY_KEY_PASSWORD,
        escape(key_password),
        KEY_KEY_ALIAS,
        escape(key_alias),
        KEY_STORE_FILE,
        escape(&store_file.to_string_lossy()),
    );
    if let Some(store_type) = store_type {
        content.push_str(&format!("{}={}\n", KEY_STORE_TYPE, escape(store_type)));
    }
    content
}

fn ends_with_continuation(line: &str) -> bool {
    line.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

/// Splits a logical line at the first unescaped `=` or `:`.
fn split_pair(line: &str) -> Option<(&str, &str)> {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return Some((line[..i].trim_end(), line[i + 1..].trim_start())),
            _ => {}
        }
    }
    None
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            // \=, \:, \\ and any other escaped character drop the backslash.
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' | '=' | ':' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}
