//! Loose-value helpers for JSON payloads coming from drivers and clients

use serde_json::Value;

/// Parse the leading integer of a string the lenient way.
///
/// Leading whitespace and a single sign are accepted and parsing stops at the
/// first non-digit, so `" 42px"` is 42. Returns `None` when no digit is found.
pub fn parse_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(idx, _)| idx)
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Coerce a loose value to an integer, returning `default` for falsy or
/// unparsable input.
pub fn value_to_int(value: &Value, default: i64) -> i64 {
    if !is_truthy(value) {
        return default;
    }

    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(default),
        Value::String(text) => parse_int(text).unwrap_or(default),
        _ => default,
    }
}

/// Numeric view of a loose code value (`"12"`, `12`, `12.5`)
pub fn value_to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_int(text).map(|n| n as f64),
        _ => None,
    }
}

/// Null, empty arrays and objects without keys are empty; scalars never are.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Truthiness as the web layer sees it: null, false, 0, NaN and "" are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0 && !n.is_nan()).unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// String view of a loose value: null is `""`, strings are kept, everything
/// else becomes its JSON text.
pub fn to_data_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    }
}

/// Non-empty string field of an object, if any
pub fn string_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}
