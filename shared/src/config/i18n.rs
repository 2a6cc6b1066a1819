//! Message dictionary configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where error message resources live and which locale is active
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct I18nConfig {
    /// Active language (`vi`, `en-US`); `default` bucket when unset
    #[serde(default)]
    pub language: Option<String>,

    /// Directory prefixed to every resource path
    #[serde(default)]
    pub base_path: Option<PathBuf>,

    /// Resource paths without extension, merged in order
    #[serde(default)]
    pub resource_paths: Vec<String>,

    /// Locales loaded next to the active one for per-request lookups
    #[serde(default)]
    pub extra_locales: Vec<String>,
}

impl I18nConfig {
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_resource(mut self, path: impl Into<String>) -> Self {
        self.resource_paths.push(path.into());
        self
    }

    pub fn with_base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }
}
