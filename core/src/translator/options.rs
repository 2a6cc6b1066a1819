//! Overrides accepted when creating an error object

use nexx_shared::utils::data::to_data_string;
use nexx_shared::Params;
use serde_json::Value;

use crate::errors::CoreError;

/// Explicit values always win over dictionary lookups.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorOptions {
    pub message: Option<String>,
    pub ui_message: Option<String>,
    pub source: Option<String>,
    pub params: Option<Params>,
}

impl ErrorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn ui_message(mut self, ui_message: impl Into<String>) -> Self {
        self.ui_message = Some(ui_message.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    /// Read options from a loose value.
    ///
    /// A string overrides the user message, an object may carry `message`,
    /// `uiMessage`, `source` and `params`, null means no options.
    pub fn from_value(value: &Value) -> Result<Self, CoreError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::String(ui_message) => Ok(Self::from(ui_message.as_str())),
            Value::Object(map) => {
                let text = |key: &str| {
                    map.get(key)
                        .and_then(Value::as_str)
                        .filter(|text| !text.is_empty())
                        .map(str::to_string)
                };
                let params = map.get("params").and_then(Value::as_object).map(|params| {
                    params
                        .iter()
                        .map(|(key, value)| (key.clone(), to_data_string(value)))
                        .collect::<Params>()
                });

                Ok(Self {
                    message: text("message"),
                    ui_message: text("uiMessage"),
                    source: text("source"),
                    params,
                })
            }
            Value::Bool(_) => Err(CoreError::InvalidOptions { kind: "boolean" }),
            Value::Number(_) => Err(CoreError::InvalidOptions { kind: "number" }),
            Value::Array(_) => Err(CoreError::InvalidOptions { kind: "array" }),
        }
    }

    /// Explicit operator message, ignoring empty strings
    pub(crate) fn explicit_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|text| !text.is_empty())
    }

    /// Explicit user message, ignoring empty strings
    pub(crate) fn explicit_ui_message(&self) -> Option<&str> {
        self.ui_message.as_deref().filter(|text| !text.is_empty())
    }
}

impl From<&str> for ErrorOptions {
    fn from(ui_message: &str) -> Self {
        Self::default().ui_message(ui_message)
    }
}

impl From<String> for ErrorOptions {
    fn from(ui_message: String) -> Self {
        Self::default().ui_message(ui_message)
    }
}
