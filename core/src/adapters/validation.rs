//! Schema-validator failures → normalized errors

use nexx_shared::{error_codes, params, ErrorCode, NormalizedError};
use serde::{Deserialize, Deserializer, Serialize};

use crate::dictionary::Dictionary;

/// Validation failure as reported by the schema validator
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationFailure {
    #[serde(default)]
    pub details: Vec<ValidationDetail>,
}

/// One failed rule
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationDetail {
    /// Rule identifier such as `any.required` or `string.min`
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Dotted path of the offending field
    #[serde(default, deserialize_with = "field_path")]
    pub path: String,

    #[serde(default)]
    pub message: String,
}

impl ValidationFailure {
    pub fn new(details: Vec<ValidationDetail>) -> Self {
        Self { details }
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }
}

impl ValidationDetail {
    pub fn new(kind: impl Into<String>, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            path: path.into(),
            message: message.into(),
        }
    }
}

// Paths arrive either as "address.city" or as ["address", "city"].
fn field_path<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Segment {
        Name(String),
        Index(u64),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPath {
        Dotted(String),
        Segments(Vec<Segment>),
    }

    Ok(match Option::<RawPath>::deserialize(deserializer)? {
        None => String::new(),
        Some(RawPath::Dotted(path)) => path,
        Some(RawPath::Segments(segments)) => segments
            .into_iter()
            .map(|segment| match segment {
                Segment::Name(name) => name,
                Segment::Index(index) => index.to_string(),
            })
            .collect::<Vec<_>>()
            .join("."),
    })
}

/// Error code for a validator rule; unmapped rules are unknown errors.
pub(crate) fn code_for_rule(kind: &str) -> ErrorCode {
    let code = match kind {
        "any.empty" | "any.required" => error_codes::REQUIRED,
        "string.min" => error_codes::STRING_MIN,
        "string.max" => error_codes::STRING_MAX,
        "string.alphanum" => error_codes::ALPHANUM,
        "geo.coordinates" => error_codes::COORDINATES_INVALID,
        _ => error_codes::UNKNOWN,
    };
    ErrorCode::from(code)
}

/// One normalized error per detail, in detail order.
pub(crate) fn translate(failure: &ValidationFailure, dictionary: &Dictionary) -> Vec<NormalizedError> {
    failure
        .details
        .iter()
        .map(|detail| {
            let code = code_for_rule(&detail.kind);
            let field = params([("field", detail.path.as_str())]);
            let ui_message = dictionary
                .get_ui_message(code.as_str(), Some(&field))
                .unwrap_or_else(|| detail.message.clone());

            NormalizedError::new(code)
                .with_source(detail.path.clone())
                .with_message(detail.message.clone())
                .with_ui_message(ui_message)
        })
        .collect()
}
