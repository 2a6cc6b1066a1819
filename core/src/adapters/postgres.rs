//! Relational driver errors → normalized errors

use nexx_shared::{error_codes, ErrorCode, NormalizedError};
use serde::{Deserialize, Serialize};

use crate::dictionary::Dictionary;

/// SQLSTATE of a unique constraint violation
pub const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE of a not-null constraint violation
pub const NOT_NULL_VIOLATION: &str = "23502";

/// Error fields reported by a relational driver
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostgresError {
    #[serde(default)]
    pub code: ErrorCode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl PostgresError {
    pub fn new(code: impl Into<ErrorCode>) -> Self {
        Self {
            code: code.into(),
            ..Default::default()
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = Some(constraint.into());
        self
    }

    /// `detail`, else `message`, else empty
    pub fn best_message(&self) -> String {
        non_empty(&self.detail)
            .or_else(|| non_empty(&self.message))
            .unwrap_or_default()
            .to_string()
    }

    /// `column`, else `source`, else empty
    pub fn best_source(&self) -> String {
        non_empty(&self.column)
            .or_else(|| non_empty(&self.source))
            .unwrap_or_default()
            .to_string()
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|text| !text.is_empty())
}

/// Application code for a driver code; unknown driver codes pass through.
pub(crate) fn map_code(code: &ErrorCode) -> ErrorCode {
    match code.as_str() {
        UNIQUE_VIOLATION => ErrorCode::from(error_codes::DUPLICATE),
        NOT_NULL_VIOLATION => ErrorCode::from(error_codes::EMPTY),
        _ => code.clone(),
    }
}

pub(crate) fn translate(err: &PostgresError, dictionary: &Dictionary) -> NormalizedError {
    let code = map_code(&err.code);
    let message = err.best_message();
    let ui_message = dictionary
        .get_ui_message(code.as_str(), None)
        .unwrap_or_else(|| message.clone());

    NormalizedError::new(code)
        .with_message(message)
        .with_ui_message(ui_message)
        .with_source(err.best_source())
}
