//! Error code to HTTP status table

use actix_web::http::StatusCode;
use nexx_shared::{error_codes, ErrorCode};
use std::collections::BTreeMap;
use tracing::warn;

/// Lookup table consulted when replying with an error envelope.
///
/// Unmapped codes reply `500 Internal Server Error`.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusTable {
    statuses: BTreeMap<String, StatusCode>,
}

impl Default for StatusTable {
    fn default() -> Self {
        let mut statuses = BTreeMap::new();
        statuses.insert(error_codes::NOT_FOUND.to_string(), StatusCode::NOT_FOUND);
        statuses.insert(error_codes::INTERNAL.to_string(), StatusCode::INTERNAL_SERVER_ERROR);
        Self { statuses }
    }
}

impl StatusTable {
    /// Defaults with `overrides` merged on top; invalid statuses are skipped
    pub fn with_overrides(overrides: &BTreeMap<String, u16>) -> Self {
        let mut table = Self::default();
        for (code, status) in overrides {
            match StatusCode::from_u16(*status) {
                Ok(status) => table.insert(code.as_str(), status),
                Err(_) => warn!(code = %code, status = *status, "Ignoring invalid HTTP status override"),
            }
        }
        table
    }

    pub fn insert(&mut self, code: impl Into<ErrorCode>, status: StatusCode) {
        self.statuses.insert(code.into().to_string(), status);
    }

    pub fn status_for(&self, code: &ErrorCode) -> StatusCode {
        self.statuses
            .get(code.as_str())
            .copied()
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
