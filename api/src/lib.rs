//! # Nexx API helpers
//!
//! Response shaping and HTTP reply helpers on top of `nexx_core`: the
//! response handler that flattens results into one object, the code to HTTP
//! status table, actix-web reply builders and the logging bootstrap shared by
//! binaries.

pub mod config;
pub mod http;
pub mod logging;
pub mod response;

pub use config::ErrorConfig;
pub use http::{reply_error, reply_error_for, respond, StatusTable};
pub use logging::init_logging;
pub use response::ResponseHandler;
