//! Error translator: turns any error input into a normalized envelope.
//!
//! A translator owns one read-only [`Dictionary`]. Services build their own
//! instance with their resource paths and pass it around explicitly;
//! [`Translator::shared`] exists for binaries that want a process-wide one.

mod options;

#[cfg(test)]
mod tests;

pub use options::ErrorOptions;

use nexx_shared::utils::data::is_empty;
use nexx_shared::{error_codes, ErrorCode, ErrorEnvelope, I18nConfig, NormalizedError, Params};
use once_cell::sync::Lazy;
use serde_json::Value;
use tracing::{error, warn};

use crate::adapters::{mongo, postgres, validation, MongoError, PostgresError};
use crate::classifier;
use crate::dictionary::{Dictionary, DictionaryConfig};
use crate::errors::{CoreError, DictionaryError};
use crate::input::{CodedError, ErrorInput, ExceptionCollection, ExceptionKind};

static SHARED: Lazy<Translator> = Lazy::new(|| Translator::new(Dictionary::bundled()));

/// One value to check in [`Translator::check_empty`]
#[derive(Debug, Clone)]
pub struct EmptyCheck {
    pub value: Value,
    pub message: String,
    pub source: String,
}

impl EmptyCheck {
    pub fn new(value: Value, message: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            value,
            message: message.into(),
            source: source.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Translator {
    dictionary: Dictionary,
}

impl Translator {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    /// Load the dictionary described by the application's i18n settings
    pub fn from_config(config: &I18nConfig) -> Result<Self, DictionaryError> {
        let dictionary = Dictionary::load(&DictionaryConfig::from_i18n(config)?)?;
        Ok(Self::new(dictionary))
    }

    /// Process-wide translator over the bundled resources
    pub fn shared() -> &'static Translator {
        &SHARED
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Operator message for `code`, empty when not configured
    pub fn get_message(&self, code: &str, params: Option<&Params>) -> String {
        self.dictionary.get_message(code, params).unwrap_or_default()
    }

    /// User message for `code`, empty when not configured
    pub fn get_ui_message(&self, code: &str, params: Option<&Params>) -> String {
        self.dictionary.get_ui_message(code, params).unwrap_or_default()
    }

    /// Code of an error-like value; see [`classifier::extract_code`]
    pub fn get_code(&self, error_like: &Value) -> ErrorCode {
        classifier::extract_code(error_like)
    }

    /// See [`classifier::is_application_error`]
    pub fn is_application_error(&self, candidate: &Value) -> bool {
        classifier::is_application_error(candidate)
    }

    /// Build one error object. Explicit options win over dictionary lookups.
    pub fn create_error_object(
        &self,
        code: impl Into<ErrorCode>,
        options: impl Into<ErrorOptions>,
    ) -> Result<NormalizedError, CoreError> {
        let code = code.into();
        if code.is_empty() {
            return Err(CoreError::EmptyCode);
        }
        Ok(self.build_error(code, &options.into()))
    }

    /// [`Self::create_error_object`] wrapped in a one-element list
    pub fn create_error(
        &self,
        code: impl Into<ErrorCode>,
        options: impl Into<ErrorOptions>,
    ) -> Result<Vec<NormalizedError>, CoreError> {
        Ok(vec![self.create_error_object(code, options)?])
    }

    pub(crate) fn build_error(&self, code: ErrorCode, options: &ErrorOptions) -> NormalizedError {
        let params = options.params.as_ref();
        let message = match options.explicit_message() {
            Some(message) => message.to_string(),
            None => self.get_message(code.as_str(), params),
        };
        let ui_message = match options.explicit_ui_message() {
            Some(ui_message) => ui_message.to_string(),
            None => self.get_ui_message(code.as_str(), params),
        };
        let source = options.source.clone().unwrap_or_default();

        NormalizedError {
            code,
            message,
            ui_message,
            source,
        }
    }

    /// Not-found error (202); the source defaults to `uid` and is also
    /// available to the template as `{{source}}`
    pub fn not_found(&self, source: Option<&str>, params: Option<Params>) -> Vec<NormalizedError> {
        let source = source.filter(|s| !s.is_empty()).unwrap_or("uid");
        let mut params = params.unwrap_or_default();
        params.entry("source".to_string()).or_insert_with(|| source.to_string());

        let options = ErrorOptions::new().source(source).params(params);
        vec![self.build_error(ErrorCode::from(error_codes::NOT_FOUND), &options)]
    }

    /// Empty-data error (203)
    pub fn empty_error(&self, options: impl Into<ErrorOptions>) -> Vec<NormalizedError> {
        vec![self.build_error(ErrorCode::from(error_codes::EMPTY), &options.into())]
    }

    /// Unknown error (999)
    pub fn unknown_error(&self, options: impl Into<ErrorOptions>) -> Vec<NormalizedError> {
        vec![self.build_error(ErrorCode::unknown(), &options.into())]
    }

    /// Remote server unreachable (400)
    pub fn disconnected_error(&self, options: impl Into<ErrorOptions>) -> Vec<NormalizedError> {
        vec![self.build_error(ErrorCode::from(error_codes::DISCONNECTED), &options.into())]
    }

    /// Translate any error input into an envelope. Never fails.
    pub fn translate(&self, input: impl Into<ErrorInput>) -> ErrorEnvelope {
        match input.into() {
            ErrorInput::StringMessage(message) => self.unknown(message),
            ErrorInput::ErrorArray(errors) => {
                if errors.is_empty() {
                    warn!("Translating an empty error list");
                    return self.unknown("empty error list".to_string());
                }
                ErrorEnvelope::new(errors)
            }
            ErrorInput::ValidationError(failure) => {
                if failure.is_empty() {
                    return self.unknown("validation failed without details".to_string());
                }
                ErrorEnvelope::new(validation::translate(&failure, &self.dictionary))
            }
            ErrorInput::CodedError(CodedError { code, options }) => {
                ErrorEnvelope::single(self.build_error(code, &options))
            }
            ErrorInput::ExceptionCollection(collection) => self.from_exceptions(collection),
            ErrorInput::NativeException(exception) => {
                error!(error = %exception, kind = "native_exception", "Unhandled system error");
                self.unknown(exception.to_string())
            }
            ErrorInput::Unknown(value) => {
                error!(error = %value, kind = "unknown", "Unrecognized error value");
                self.unknown(value.to_string())
            }
        }
    }

    /// JSON text of [`Self::translate`]
    pub fn serialize(&self, input: impl Into<ErrorInput>) -> String {
        let envelope = self.translate(input);
        serde_json::to_string(&envelope).unwrap_or_else(|err| {
            error!(error = %err, "Cannot serialize error envelope");
            String::from(r#"{"errors":[{"code":"999","message":"","uiMessage":"","source":""}]}"#)
        })
    }

    /// Validate that required values are present.
    ///
    /// The first null, empty-object or empty-array value yields an empty-data
    /// error carrying that check's message and source.
    pub fn check_empty(&self, inputs: &[EmptyCheck]) -> Result<(), Vec<NormalizedError>> {
        match inputs.iter().find(|input| is_empty(&input.value)) {
            Some(input) => {
                warn!(source = %input.source, "{}", input.message);
                Err(self.empty_error(
                    ErrorOptions::new()
                        .message(input.message.clone())
                        .source(input.source.clone()),
                ))
            }
            None => Ok(()),
        }
    }

    fn unknown(&self, message: String) -> ErrorEnvelope {
        ErrorEnvelope::new(self.unknown_error(ErrorOptions::new().message(message)))
    }

    fn from_exceptions(&self, collection: ExceptionCollection) -> ErrorEnvelope {
        if collection.errors.is_empty() {
            return self.unknown(format!("{} without errors", collection.kind.tag()));
        }

        let errors = collection
            .errors
            .into_iter()
            .map(|raw| self.from_exception(collection.kind, raw))
            .collect();

        ErrorEnvelope::new(errors)
    }

    fn from_exception(&self, kind: ExceptionKind, raw: Value) -> NormalizedError {
        let translated = match kind {
            ExceptionKind::Relational => serde_json::from_value::<PostgresError>(raw.clone())
                .map(|err| postgres::translate(&err, &self.dictionary)),
            ExceptionKind::Document => serde_json::from_value::<MongoError>(raw.clone())
                .map(|err| mongo::translate(&err, &self.dictionary)),
        };

        translated.unwrap_or_else(|err| {
            warn!(error = %err, tag = kind.tag(), "Malformed database exception");
            self.build_error(ErrorCode::unknown(), &ErrorOptions::new().message(raw.to_string()))
        })
    }
}

