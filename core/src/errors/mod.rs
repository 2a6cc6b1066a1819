//! Error types of the core crate.
//!
//! `CoreError` and `DictionaryError` report misuse of the library or broken
//! resource files; `AppError` is the typed application error services raise
//! and later feed back into the translator.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AppError, AppErrorKind};

use std::path::PathBuf;
use thiserror::Error;

/// Programmer errors raised at construction or error-creation time
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Empty error code")]
    EmptyCode,

    #[error("Errors list must not be empty")]
    EmptyErrors,

    #[error("Invalid options data type: {kind}")]
    InvalidOptions { kind: &'static str },

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// Failures while loading message resources.
///
/// A missing resource file is not an error; it is logged and skipped.
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Cannot read resource {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML resource {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid JSON resource {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Resource {origin} must be a table of messages")]
    NotATable { origin: String },

    #[error("Resource {origin} has a non-text message at key {key}")]
    InvalidEntry { origin: String, key: String },

    #[error("Unsupported locale: {0}")]
    InvalidLocale(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
