//! HTTP collaborator helpers: status mapping, localized replies

pub mod locale;
pub mod reply;
pub mod status;

pub use reply::{reply_error, reply_error_for, respond};
pub use status::StatusTable;
