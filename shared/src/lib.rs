//! Shared types and utilities for Nexx services
//!
//! This crate provides common functionality used by the core and api crates:
//! - Error codes and the normalized error payloads
//! - Locale identifiers
//! - Configuration types
//! - Loose-value and template helpers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, HttpConfig, I18nConfig, LoggingConfig};
pub use errors::{error_codes, ErrorCode};
pub use types::{ErrorEnvelope, FlatResponse, Locale, NormalizedError, DEFAULT_LOCALE};
pub use utils::{params, render, Params};
