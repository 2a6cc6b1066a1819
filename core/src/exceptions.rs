//! Tagged collections of database exceptions.
//!
//! Data-access code wraps driver errors into a `DbExceptions` collection
//! before handing them to upper layers; the collection keeps its tag when
//! serialized so the translator recognizes it again.

use chrono::Utc;
use nexx_shared::ErrorCode;
use serde::{Deserialize, Serialize};

use crate::adapters::PostgresError;
use crate::input::{ExceptionCollection, ExceptionKind, DB_EXCEPTIONS_TAG};
use crate::translator::Translator;

/// Where the failing statement ran; fills fields the driver left empty
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExceptionOptions {
    pub table: Option<String>,
    pub schema: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// One database exception
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DbException {
    pub code: ErrorCode,
    pub message: String,
    pub ui_message: String,
    pub source: String,
    pub constraint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// Tagged exception collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbExceptions {
    pub name: String,
    pub errors: Vec<DbException>,
}

impl DbExceptions {
    /// Wrap a single driver error, keeping its raw code
    pub fn from_postgres(err: &PostgresError) -> Self {
        let exception = DbException {
            code: err.code.clone(),
            message: err.detail.clone().unwrap_or_default(),
            constraint: err.constraint.clone().unwrap_or_default(),
            table: err.table.clone(),
            schema: err.schema.clone(),
            source: err.column.clone().unwrap_or_default(),
            data_type: err.data_type.clone(),
            time: err.time.clone().unwrap_or_default(),
            ..Default::default()
        };

        Self {
            name: DB_EXCEPTIONS_TAG.to_string(),
            errors: vec![exception],
        }
    }

    /// Normalize driver errors into a collection.
    ///
    /// The user message comes from the translator's dictionary, falling back
    /// to the driver message; missing table, schema, host and port come from
    /// `options`, a missing time is now.
    pub fn create(params: &[PostgresError], options: &ExceptionOptions, translator: &Translator) -> Self {
        let errors = params
            .iter()
            .map(|err| {
                let message = err.best_message();
                let ui_message = translator
                    .dictionary()
                    .get_ui_message(err.code.as_str(), None)
                    .unwrap_or_else(|| message.clone());

                DbException {
                    code: err.code.clone(),
                    message,
                    ui_message,
                    source: err.best_source(),
                    constraint: err.constraint.clone().unwrap_or_default(),
                    table: err.table.clone().or_else(|| options.table.clone()),
                    schema: err.schema.clone().or_else(|| options.schema.clone()),
                    data_type: err.data_type.clone(),
                    time: err.time.clone().unwrap_or_else(|| Utc::now().to_rfc3339()),
                    host: options.host.clone(),
                    port: options.port,
                }
            })
            .collect();

        Self {
            name: DB_EXCEPTIONS_TAG.to_string(),
            errors,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn into_collection(self) -> ExceptionCollection {
        let kind = ExceptionKind::from_tag(&self.name).unwrap_or(ExceptionKind::Relational);
        let errors = self
            .errors
            .iter()
            .filter_map(|exception| serde_json::to_value(exception).ok())
            .collect();
        ExceptionCollection { kind, errors }
    }
}
