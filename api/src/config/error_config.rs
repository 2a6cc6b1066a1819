use nexx_shared::{AppConfig, HttpConfig};

use crate::http::StatusTable;

/// Error reply configuration options
#[derive(Debug, Clone)]
pub struct ErrorConfig {
    /// Error code to HTTP status mapping
    pub status: StatusTable,

    /// Log every error reply
    pub log_replies: bool,

    /// Keep operator-facing `message` fields in replies (development only)
    pub expose_messages: bool,

    /// Re-render user messages in the request's `Accept-Language`
    pub localize: bool,
}

impl Default for ErrorConfig {
    fn default() -> Self {
        Self {
            status: StatusTable::default(),
            log_replies: true,
            expose_messages: cfg!(debug_assertions), // Only in debug builds
            localize: true,
        }
    }
}

impl ErrorConfig {
    /// Create production configuration
    pub fn production() -> Self {
        Self {
            expose_messages: false,
            ..Self::default()
        }
    }

    /// Create development configuration
    pub fn development() -> Self {
        Self {
            expose_messages: true,
            ..Self::default()
        }
    }

    /// Build from the HTTP section of the application configuration
    pub fn from_http(http: &HttpConfig) -> Self {
        Self {
            status: StatusTable::with_overrides(&http.status_overrides),
            log_replies: http.log_replies,
            ..Self::default()
        }
    }

    /// Environment defaults plus the HTTP section
    pub fn from_app(config: &AppConfig) -> Self {
        Self {
            expose_messages: !config.environment.is_production(),
            ..Self::from_http(&config.http)
        }
    }
}
