//! # Nexx Core
//!
//! Error normalization for Nexx services: a per-locale message dictionary,
//! an application-error classifier, adapters for validator and database
//! errors, and the translator that turns any of them into a normalized
//! `{errors: [...]}` envelope.

pub mod adapters;
pub mod classifier;
pub mod dictionary;
pub mod errors;
pub mod exceptions;
pub mod input;
pub mod translator;

// Re-export commonly used types for convenience
pub use adapters::{MongoError, PostgresError, ValidationDetail, ValidationFailure};
pub use dictionary::{Dictionary, DictionaryConfig};
pub use errors::{AppError, AppErrorKind, CoreError, CoreResult, DictionaryError};
pub use exceptions::{DbException, DbExceptions, ExceptionOptions};
pub use input::{ErrorInput, NativeException, DB_EXCEPTIONS_TAG, MONGO_EXCEPTIONS_TAG};
pub use translator::{EmptyCheck, ErrorOptions, Translator};
