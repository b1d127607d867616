//! Error types for the signet core library.

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for signet operations.
#[derive(Error, Debug)]
pub enum SignetError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed properties file {}: {message}", .path.display())]
    Properties { path: PathBuf, message: String },

    #[error("Missing required property '{key}' in {}", .path.display())]
    PropertyMissing { path: PathBuf, key: &'static str },

    #[error("Signing error: {0}")]
    Signing(String),
}

impl SignetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SignetError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for signet operations.
pub type Result<T> = std::result::Result<T, SignetError>;
