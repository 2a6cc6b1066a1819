//! Typed application errors
//!
//! An `AppError` always carries at least one normalized error. Services
//! return it from business code; the translator turns it back into an
//! envelope unchanged.

use nexx_shared::{error_codes, ErrorCode, NormalizedError};
use thiserror::Error;

use super::CoreError;
use crate::translator::{ErrorOptions, Translator};

/// Which well-known failure an `AppError` represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppErrorKind {
    NotFound,
    Permission,
    Empty,
    Custom,
}

/// Application error carrying normalized error records
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct AppError {
    kind: AppErrorKind,
    code: ErrorCode,
    message: String,
    errors: Vec<NormalizedError>,
}

impl AppError {
    /// Wrap already-normalized errors; the first one names the error
    pub fn from_errors(errors: Vec<NormalizedError>) -> Result<Self, CoreError> {
        let first = errors.first().ok_or(CoreError::EmptyErrors)?;
        Ok(Self {
            kind: AppErrorKind::Custom,
            code: first.code.clone(),
            message: first.message.clone(),
            errors,
        })
    }

    /// Resource not found (code 202)
    pub fn not_found(translator: &Translator, ui_message: Option<&str>) -> Self {
        Self::with_code(translator, AppErrorKind::NotFound, error_codes::NOT_FOUND, ui_message)
    }

    /// Caller lacks permission (code 204)
    pub fn permission(translator: &Translator, ui_message: Option<&str>) -> Self {
        Self::with_code(translator, AppErrorKind::Permission, error_codes::PERMISSION, ui_message)
    }

    /// Required data is missing; reported with the unknown code (999)
    pub fn empty(translator: &Translator, ui_message: Option<&str>) -> Self {
        Self::with_code(translator, AppErrorKind::Empty, error_codes::UNKNOWN, ui_message)
    }

    fn with_code(
        translator: &Translator,
        kind: AppErrorKind,
        code: &str,
        ui_message: Option<&str>,
    ) -> Self {
        let options = ui_message.map(ErrorOptions::from).unwrap_or_default();
        let error = translator.build_error(ErrorCode::from(code), &options);
        Self {
            kind,
            code: error.code.clone(),
            message: error.message.clone(),
            errors: vec![error],
        }
    }

    pub fn kind(&self) -> AppErrorKind {
        self.kind
    }

    pub fn code(&self) -> &ErrorCode {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn errors(&self) -> &[NormalizedError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<NormalizedError> {
        self.errors
    }
}
