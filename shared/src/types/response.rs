//! Normalized error payloads and the flat response shape

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ErrorCode;

/// Canonical error record every source is translated into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedError {
    /// Error code, always present
    #[serde(default)]
    pub code: ErrorCode,

    /// Developer-facing message for logs
    #[serde(default)]
    pub message: String,

    /// Locale-resolved message that is safe to show to end users
    #[serde(default)]
    pub ui_message: String,

    /// Offending field or column, empty when unknown
    #[serde(default)]
    pub source: String,
}

impl NormalizedError {
    pub fn new(code: impl Into<ErrorCode>) -> Self {
        Self {
            code: code.into(),
            message: String::new(),
            ui_message: String::new(),
            source: String::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_ui_message(mut self, ui_message: impl Into<String>) -> Self {
        self.ui_message = ui_message.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// User message, or the operator message when no user message exists
    pub fn display_message(&self) -> &str {
        if self.ui_message.is_empty() {
            &self.message
        } else {
            &self.ui_message
        }
    }
}

/// `{errors: [...]}` wrapper returned by the translator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub errors: Vec<NormalizedError>,
}

impl ErrorEnvelope {
    pub fn new(errors: Vec<NormalizedError>) -> Self {
        Self { errors }
    }

    pub fn single(error: NormalizedError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    pub fn first(&self) -> Option<&NormalizedError> {
        self.errors.first()
    }

    /// Code of the first error, or the internal sentinel
    pub fn code(&self) -> ErrorCode {
        self.first()
            .map(|error| error.code.clone())
            .unwrap_or_else(ErrorCode::internal)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<NormalizedError> {
        self.errors
    }
}

impl From<Vec<NormalizedError>> for ErrorEnvelope {
    fn from(errors: Vec<NormalizedError>) -> Self {
        Self::new(errors)
    }
}

/// Single flat object handed to the HTTP layer.
///
/// Only fields holding a truthy value are serialized; `errorCode` is always
/// present and numeric, `0` meaning no error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatResponse {
    pub error_code: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl FlatResponse {
    pub fn is_error(&self) -> bool {
        self.error_code != 0
    }

    pub fn is_success(&self) -> bool {
        self.error_code == 0
    }

    /// JSON object form of the response
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| {
            let mut map = Map::new();
            map.insert("errorCode".to_string(), Value::from(self.error_code));
            Value::Object(map)
        })
    }
}
