//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `http` - Error code to HTTP status overrides and reply logging
//! - `i18n` - Message dictionary resources and active locale

pub mod environment;
pub mod http;
pub mod i18n;

use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig, ENVIRONMENT_VAR};
pub use http::HttpConfig;
pub use i18n::I18nConfig;

/// Prefix of environment variables overriding file settings,
/// e.g. `NEXX__I18N__LANGUAGE=vi`
pub const ENV_PREFIX: &str = "NEXX";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Message dictionary configuration
    #[serde(default)]
    pub i18n: I18nConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// HTTP reply configuration
    #[serde(default)]
    pub http: HttpConfig,
}

impl AppConfig {
    /// Create configuration for an environment with its logging defaults
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            logging: LoggingConfig::for_environment(environment),
            ..Default::default()
        }
    }

    /// Load configuration from an optional TOML file, then `NEXX__*`
    /// environment variables.
    ///
    /// `NEXX__ENVIRONMENT` picks the default settings file and seeds the
    /// `environment` and `logging` defaults, so an unset key always agrees
    /// with [`Environment::from_env`]. A missing file is an error only when a
    /// path was given explicitly.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let env = Environment::from_env();
        let logging = LoggingConfig::for_environment(env);

        let mut builder = Config::builder()
            .set_default("environment", env.to_string())?
            .set_default("logging.level", logging.level)?
            .set_default("logging.format", logging.format.to_string())?
            .set_default("logging.colored", logging.colored)?
            .set_default("logging.source_location", logging.source_location)?;

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(&env.config_file()).required(false)),
        };

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
