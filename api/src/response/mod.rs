//! Projection of backend results and errors into one flat response.
//!
//! The handler accepts whatever a service returned (a success payload with
//! `data`, an already-normalized error, a list of errors or any raw error)
//! and binds at most one error onto itself.

#[cfg(test)]
mod tests;

use nexx_core::Translator;
use nexx_shared::utils::data::{is_truthy, parse_int, to_data_string, value_to_int};
use nexx_shared::{error_codes, FlatResponse, NormalizedError};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseHandler {
    error_code: i64,
    code: String,
    message: String,
    ui_message: String,
    source: String,
    request_id: String,
    data: Option<Value>,
}

impl ResponseHandler {
    pub fn new(value: &Value, translator: &Translator) -> Self {
        let mut handler = Self::default();

        match value {
            Value::Null => {}
            Value::Object(map) => handler.bind_object(map, value, translator),
            _ => handler.bind_translated(value, translator),
        }
        handler
    }

    /// Construct and project in one step
    pub fn response(value: &Value, translator: &Translator) -> FlatResponse {
        Self::new(value, translator).to_object()
    }

    fn bind_object(&mut self, map: &Map<String, Value>, value: &Value, translator: &Translator) {
        if let Some(request_id) = map.get("requestId").filter(|id| is_truthy(id)) {
            self.request_id = to_data_string(request_id);
        }

        match map.get("errorCode").filter(|code| !code.is_null()) {
            None => {
                match map.get("data").filter(|data| is_truthy(data)) {
                    Some(data) => self.data = Some(data.clone()),
                    None => self.bind_translated(value, translator),
                }
            }
            Some(error_code) if is_zero_code(error_code) => {
                self.data = map.get("data").cloned();
            }
            Some(error_code) => {
                let field = |key: &str| map.get(key).map(to_data_string).unwrap_or_default();

                self.error_code = nonzero_or_unknown(value_to_int(error_code, 0));
                self.code = match field("code") {
                    code if code.is_empty() => to_data_string(error_code),
                    code => code,
                };
                self.message = field("message");
                self.source = field("source");
                self.ui_message = match field("uiMessage") {
                    ui_message if ui_message.is_empty() => translator
                        .dictionary()
                        .get_ui_message(&self.code, None)
                        .unwrap_or_else(|| self.message.clone()),
                    ui_message => ui_message,
                };
            }
        }
    }

    fn bind_translated(&mut self, value: &Value, translator: &Translator) {
        let envelope = translator.translate(value);
        if let Some(error) = envelope.first() {
            self.bind_error(error);
        }
    }

    fn bind_error(&mut self, error: &NormalizedError) {
        self.error_code = nonzero_or_unknown(error.code.numeric().unwrap_or_default());
        self.code = error.code.to_string();
        self.message = error.message.clone();
        self.ui_message = error.ui_message.clone();
        self.source = error.source.clone();
    }

    pub fn error_code(&self) -> i64 {
        self.error_code
    }

    pub fn is_error(&self) -> bool {
        self.error_code != 0
    }

    /// Flat response with every falsy field dropped
    pub fn to_object(&self) -> FlatResponse {
        let text = |field: &str| Some(field.to_string()).filter(|field| !field.is_empty());

        FlatResponse {
            error_code: self.error_code,
            code: text(&self.code),
            message: text(&self.message),
            ui_message: text(&self.ui_message),
            source: text(&self.source),
            request_id: text(&self.request_id),
            data: self.data.clone().filter(is_truthy),
        }
    }
}

/// A bound error never reports `0`; codes that are not numbers become 999
fn nonzero_or_unknown(code: i64) -> i64 {
    match code {
        0 => parse_int(error_codes::UNKNOWN).unwrap_or_default(),
        code => code,
    }
}

/// `errorCode` compares loosely against `"0"`
fn is_zero_code(code: &Value) -> bool {
    match code {
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.trim() == "0",
        Value::Bool(flag) => !flag,
        _ => false,
    }
}
