//! HTTP-facing configuration built on top of `nexx_shared::AppConfig`

mod error_config;

pub use error_config::ErrorConfig;
