//! Deployment environment and the logging defaults it implies

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Variable naming the environment. It is the same key `AppConfig::load`
/// maps onto `environment`, so both always agree.
pub const ENVIRONMENT_VAR: &str = "NEXX__ENVIRONMENT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 3] = [
        Environment::Development,
        Environment::Staging,
        Environment::Production,
    ];

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Environment named by `NEXX__ENVIRONMENT`, development when unset
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(ENVIRONMENT_VAR).ok().as_deref())
    }

    /// Unset or unrecognized names fall back to development
    pub fn resolve(name: Option<&str>) -> Self {
        name.and_then(|name| name.parse().ok()).unwrap_or_default()
    }

    /// Optional per-environment settings file, e.g. `nexx.production.toml`
    pub fn config_file(&self) -> String {
        format!("nexx.{}.toml", self)
    }

    /// Optional per-environment dotenv file, e.g. `.env.production`
    pub fn env_file(&self) -> String {
        format!(".env.{}", self)
    }

    fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|env| env.as_str() == name || (name.len() >= 3 && env.as_str().starts_with(&name)))
            .ok_or_else(|| format!("Unknown environment: {}", name))
    }
}

/// Subscriber output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
    Compact,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogFormat::Json => "json",
            LogFormat::Pretty => "pretty",
            LogFormat::Compact => "compact",
        })
    }
}

/// Settings for `nexx_api::init_logging`; `RUST_LOG` still wins over `level`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `nexx_core=debug,warn`
    pub level: String,
    pub format: LogFormat,
    pub colored: bool,
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl LoggingConfig {
    /// Development logs translator internals in color; deployed
    /// environments emit JSON for the log pipeline and only report replies.
    pub fn for_environment(env: Environment) -> Self {
        let (level, format) = match env {
            Environment::Development => ("debug", LogFormat::Pretty),
            Environment::Staging => ("info", LogFormat::Json),
            Environment::Production => ("nexx_api=info,warn", LogFormat::Json),
        };

        Self {
            level: level.to_string(),
            format,
            colored: format == LogFormat::Pretty,
            source_location: !env.is_production() && format == LogFormat::Pretty,
        }
    }
}
