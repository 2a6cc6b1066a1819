//! Tagged view of every error shape the translator accepts.
//!
//! A loose value is inspected once by [`ErrorInput::classify`]; the
//! translator then dispatches on the tag.

use nexx_shared::utils::data::{is_truthy, to_data_string};
use nexx_shared::{ErrorCode, NormalizedError};
use serde_json::Value;
use std::fmt;

use crate::adapters::ValidationFailure;
use crate::errors::AppError;
use crate::exceptions::DbExceptions;
use crate::translator::ErrorOptions;

/// Tag of relational exception collections
pub const DB_EXCEPTIONS_TAG: &str = "nexx.exceptions.DBExceptions";
/// Tag of document-store exception collections
pub const MONGO_EXCEPTIONS_TAG: &str = "nexx.exceptions.MongoExceptions";

/// Error names treated as runtime exceptions
const EXCEPTION_NAMES: &[&str] = &[
    "Error",
    "RangeError",
    "ReferenceError",
    "SyntaxError",
    "TypeError",
    "EvalError",
    "URIError",
];

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorInput {
    /// Plain message, reported as an unknown error
    StringMessage(String),
    /// Already-normalized errors
    ErrorArray(Vec<NormalizedError>),
    /// Schema-validator failure
    ValidationError(ValidationFailure),
    /// Object carrying its own code
    CodedError(CodedError),
    /// Tagged collection of driver exceptions
    ExceptionCollection(ExceptionCollection),
    /// Runtime exception, logged and reported as unknown
    NativeException(NativeException),
    /// Anything else, logged and reported as unknown
    Unknown(Value),
}

/// Error object with an explicit code and optional overrides
#[derive(Debug, Clone, PartialEq)]
pub struct CodedError {
    pub code: ErrorCode,
    pub options: ErrorOptions,
}

/// Which adapter handles the elements of a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionKind {
    Relational,
    Document,
}

impl ExceptionKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            DB_EXCEPTIONS_TAG => Some(ExceptionKind::Relational),
            MONGO_EXCEPTIONS_TAG => Some(ExceptionKind::Document),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ExceptionKind::Relational => DB_EXCEPTIONS_TAG,
            ExceptionKind::Document => MONGO_EXCEPTIONS_TAG,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExceptionCollection {
    pub kind: ExceptionKind,
    /// Raw driver errors, decoded by the adapter of `kind`
    pub errors: Vec<Value>,
}

/// Runtime exception reduced to its name and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeException {
    pub name: String,
    pub message: String,
}

impl NativeException {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for NativeException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}: {}", self.name, self.message)
        }
    }
}

impl ErrorInput {
    /// Inspect a loose value once and tag it.
    ///
    /// Precedence: array, string, then for objects the validator marker,
    /// a truthy `code`, an `errors` collection and finally an exception name.
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Array(items) => ErrorInput::ErrorArray(items.into_iter().map(normalize_entry).collect()),
            Value::String(message) => ErrorInput::StringMessage(message),
            Value::Object(_) => classify_object(value),
            other => ErrorInput::Unknown(other),
        }
    }

    /// Wrap any Rust error as a runtime exception
    pub fn exception<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        ErrorInput::NativeException(NativeException::new("Error", message))
    }

    /// Short tag name, used in log fields
    pub fn tag(&self) -> &'static str {
        match self {
            ErrorInput::StringMessage(_) => "string_message",
            ErrorInput::ErrorArray(_) => "error_array",
            ErrorInput::ValidationError(_) => "validation_error",
            ErrorInput::CodedError(_) => "coded_error",
            ErrorInput::ExceptionCollection(_) => "exception_collection",
            ErrorInput::NativeException(_) => "native_exception",
            ErrorInput::Unknown(_) => "unknown",
        }
    }
}

fn classify_object(value: Value) -> ErrorInput {
    if value.get("isJoi").and_then(Value::as_bool).unwrap_or(false) {
        return match serde_json::from_value::<ValidationFailure>(value.clone()) {
            Ok(failure) => ErrorInput::ValidationError(failure),
            Err(_) => ErrorInput::Unknown(value),
        };
    }

    if let Some(code) = value.get("code").filter(|code| is_truthy(code)) {
        let code = ErrorCode::from(to_data_string(code));
        return match ErrorOptions::from_value(&value) {
            Ok(options) => ErrorInput::CodedError(CodedError { code, options }),
            Err(_) => ErrorInput::Unknown(value),
        };
    }

    if let Some(errors) = value.get("errors").filter(|errors| is_truthy(errors)) {
        let kind = value
            .get("name")
            .and_then(Value::as_str)
            .and_then(ExceptionKind::from_tag);
        let items = errors.as_array().cloned();
        return match (kind, items) {
            (Some(kind), Some(items)) => {
                ErrorInput::ExceptionCollection(ExceptionCollection { kind, errors: items })
            }
            (None, Some(items)) => ErrorInput::ErrorArray(items.into_iter().map(normalize_entry).collect()),
            (_, None) => ErrorInput::Unknown(value),
        };
    }

    if let Some(name) = value.get("name").and_then(Value::as_str) {
        if EXCEPTION_NAMES.contains(&name) || name.ends_with("Error") {
            let message = value
                .get("message")
                .map(to_data_string)
                .unwrap_or_default();
            return ErrorInput::NativeException(NativeException::new(name, message));
        }
    }

    ErrorInput::Unknown(value)
}

/// Entries of an error list are expected to be normalized already; entries
/// that are not become unknown errors carrying their text.
fn normalize_entry(entry: Value) -> NormalizedError {
    if entry.is_object() {
        if let Ok(error) = serde_json::from_value::<NormalizedError>(entry.clone()) {
            return error;
        }
    }
    NormalizedError::new(ErrorCode::unknown()).with_message(to_data_string(&entry))
}

impl From<Value> for ErrorInput {
    fn from(value: Value) -> Self {
        ErrorInput::classify(value)
    }
}

impl From<&Value> for ErrorInput {
    fn from(value: &Value) -> Self {
        ErrorInput::classify(value.clone())
    }
}

impl From<&str> for ErrorInput {
    fn from(message: &str) -> Self {
        ErrorInput::StringMessage(message.to_string())
    }
}

impl From<String> for ErrorInput {
    fn from(message: String) -> Self {
        ErrorInput::StringMessage(message)
    }
}

impl From<Vec<NormalizedError>> for ErrorInput {
    fn from(errors: Vec<NormalizedError>) -> Self {
        ErrorInput::ErrorArray(errors)
    }
}

impl From<NormalizedError> for ErrorInput {
    fn from(error: NormalizedError) -> Self {
        ErrorInput::ErrorArray(vec![error])
    }
}

impl From<ValidationFailure> for ErrorInput {
    fn from(failure: ValidationFailure) -> Self {
        ErrorInput::ValidationError(failure)
    }
}

impl From<AppError> for ErrorInput {
    fn from(error: AppError) -> Self {
        ErrorInput::ErrorArray(error.into_errors())
    }
}

impl From<&AppError> for ErrorInput {
    fn from(error: &AppError) -> Self {
        ErrorInput::ErrorArray(error.errors().to_vec())
    }
}

impl From<DbExceptions> for ErrorInput {
    fn from(exceptions: DbExceptions) -> Self {
        ErrorInput::ExceptionCollection(exceptions.into_collection())
    }
}

impl From<NativeException> for ErrorInput {
    fn from(exception: NativeException) -> Self {
        ErrorInput::NativeException(exception)
    }
}
