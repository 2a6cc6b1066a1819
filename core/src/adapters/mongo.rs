//! Document-store driver errors → normalized errors

use nexx_shared::{ErrorCode, NormalizedError};
use serde::{Deserialize, Serialize};

use crate::dictionary::Dictionary;

/// Error fields reported by a document-store driver
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MongoError {
    #[serde(default)]
    pub code: ErrorCode,

    #[serde(default)]
    pub message: String,
}

impl MongoError {
    pub fn new(code: impl Into<ErrorCode>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Codes pass through unchanged; there is no mapping table.
pub(crate) fn translate(err: &MongoError, dictionary: &Dictionary) -> NormalizedError {
    let ui_message = dictionary
        .get_ui_message(err.code.as_str(), None)
        .unwrap_or_else(|| err.message.clone());

    NormalizedError::new(err.code.clone())
        .with_message(err.message.clone())
        .with_ui_message(ui_message)
}
