//! Signet Core Library
//!
//! Resolution, inspection, and generation of Android release-signing
//! configuration (`key.properties`) for Flutter/Gradle projects.

pub mod emit;
pub mod error;
pub mod keystore;
pub mod models;
pub mod properties;
pub mod resolver;

pub use error::{Result, SignetError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
