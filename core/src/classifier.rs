//! Application-error classification and code extraction for loose values

use nexx_shared::errors::APPLICATION_CODE_LIMIT;
use nexx_shared::utils::data::{is_truthy, to_data_string, value_to_number};
use nexx_shared::ErrorCode;
use serde_json::Value;

/// Whether a numeric code lies in the application range `(0, 999)`
fn in_application_range(code: &Value) -> bool {
    match value_to_number(code) {
        Some(number) => number > 0.0 && number < APPLICATION_CODE_LIMIT as f64,
        None => false,
    }
}

/// First element of an error list, if the value is a non-empty array
fn first_of(list: &Value) -> Option<&Value> {
    list.as_array().and_then(|items| items.first())
}

/// Decide whether `candidate` denotes a catalogued application error.
///
/// Accepts a code (string or number), a list of error objects (its first
/// `code` is inspected) or an object with an `errors` list. Any other shape,
/// and any code that does not parse, is not an application error.
pub fn is_application_error(candidate: &Value) -> bool {
    match candidate {
        Value::String(_) | Value::Number(_) => in_application_range(candidate),
        Value::Array(_) => first_of(candidate)
            .and_then(|first| first.get("code"))
            .map(in_application_range)
            .unwrap_or(false),
        Value::Object(map) => map
            .get("errors")
            .and_then(first_of)
            .and_then(|first| first.get("code"))
            .map(in_application_range)
            .unwrap_or(false),
        _ => false,
    }
}

/// Extract the code of an error-like value, or the internal sentinel.
pub fn extract_code(error_like: &Value) -> ErrorCode {
    let code = match error_like {
        Value::Array(_) => first_of(error_like).and_then(|first| first.get("code")),
        Value::Object(map) => match map.get("errors").filter(|errors| is_truthy(errors)) {
            Some(errors) => first_of(errors).and_then(|first| first.get("code")),
            None => map.get("code"),
        },
        _ => None,
    };

    code.filter(|code| is_truthy(code))
        .map(|code| ErrorCode::from(to_data_string(code)))
        .unwrap_or_else(ErrorCode::internal)
}
