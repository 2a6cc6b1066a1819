//! Per-origin translators from native error shapes to `NormalizedError`.
//!
//! The input shapes are public so callers can build them; the translation
//! functions are only reachable through the `Translator`.

pub mod mongo;
pub mod postgres;
pub mod validation;

pub use mongo::MongoError;
pub use postgres::PostgresError;
pub use validation::{ValidationDetail, ValidationFailure};
