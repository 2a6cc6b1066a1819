//! Error codes shared by every Nexx service
//!
//! Codes are opaque strings that usually look numeric (`"202"`, `"999"`).
//! Equality is string-based; only the application-error range check parses
//! them as numbers.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::utils::data::parse_int;

/// Well-known codes of the Nexx registry
pub mod error_codes {
    pub const REQUIRED: &str = "100";
    pub const STRING_MIN: &str = "101";
    pub const STRING_MAX: &str = "102";
    pub const ALPHANUM: &str = "108";
    pub const COORDINATES_INVALID: &str = "120";
    pub const DUPLICATE: &str = "201";
    pub const NOT_FOUND: &str = "202";
    pub const EMPTY: &str = "203";
    pub const PERMISSION: &str = "204";
    pub const DISCONNECTED: &str = "400";
    pub const UNKNOWN: &str = "999";
    pub const INTERNAL: &str = "1000";
}

/// Exclusive upper bound of the application error range
pub const APPLICATION_CODE_LIMIT: i64 = 999;

/// Opaque error identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ErrorCode(String);

impl ErrorCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn unknown() -> Self {
        Self::new(error_codes::UNKNOWN)
    }

    pub fn internal() -> Self {
        Self::new(error_codes::INTERNAL)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Leading integer of the code, parsed the lenient way (`"12abc"` is 12)
    pub fn numeric(&self) -> Option<i64> {
        parse_int(&self.0)
    }

    /// Whether the code falls in the catalogued application range `(0, 999)`
    pub fn is_application(&self) -> bool {
        matches!(self.numeric(), Some(code) if code > 0 && code < APPLICATION_CODE_LIMIT)
    }
}

impl Default for ErrorCode {
    fn default() -> Self {
        Self::internal()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&String> for ErrorCode {
    fn from(code: &String) -> Self {
        Self(code.clone())
    }
}

impl From<i64> for ErrorCode {
    fn from(code: i64) -> Self {
        Self(code.to_string())
    }
}

impl From<u32> for ErrorCode {
    fn from(code: u32) -> Self {
        Self(code.to_string())
    }
}

impl PartialEq<str> for ErrorCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ErrorCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl AsRef<str> for ErrorCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Drivers and clients send codes both as strings and as numbers.
impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawCode {
            Text(String),
            Integer(i64),
            Float(f64),
        }

        Ok(match RawCode::deserialize(deserializer)? {
            RawCode::Text(text) => ErrorCode(text),
            RawCode::Integer(value) => ErrorCode(value.to_string()),
            RawCode::Float(value) => ErrorCode(value.to_string()),
        })
    }
}
