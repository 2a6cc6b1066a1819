//! HTTP reply configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Settings consulted by the HTTP reply helper
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Extra error code to HTTP status mappings, merged over the defaults
    #[serde(default)]
    pub status_overrides: BTreeMap<String, u16>,

    /// Log every error reply
    #[serde(default = "default_log_replies")]
    pub log_replies: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            status_overrides: BTreeMap::new(),
            log_replies: default_log_replies(),
        }
    }
}

fn default_log_replies() -> bool {
    true
}
