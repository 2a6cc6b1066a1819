//! Type definitions module
//!
//! - `language` - Locale identifiers and Accept-Language negotiation
//! - `response` - Normalized errors, envelopes and the flat response shape

pub mod language;
pub mod response;

// Re-export commonly used types at module level
pub use language::{Locale, DEFAULT_LOCALE};
pub use response::{ErrorEnvelope, FlatResponse, NormalizedError};
