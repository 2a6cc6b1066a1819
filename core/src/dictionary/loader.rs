//! Reading message resources from disk and from the bundled set

use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::DictionaryError;

pub(crate) type Messages = BTreeMap<String, String>;

/// Bundled resources as `(locale, toml text)`; `default` is always first.
pub(crate) const BUNDLED: &[(&str, &str)] = &[
    ("default", include_str!("../../resources/errors/errors.toml")),
    ("vi", include_str!("../../resources/errors/errors_vi.toml")),
];

const EXTENSIONS: &[&str] = &["toml", "json"];

/// Locate `<path>.toml` or `<path>.json`; a path that already names an
/// existing file is used as is.
pub(crate) fn resolve(path: &Path) -> Option<PathBuf> {
    if path.extension().is_some() && path.is_file() {
        return Some(path.to_path_buf());
    }

    EXTENSIONS.iter().find_map(|ext| {
        let mut candidate = path.as_os_str().to_owned();
        candidate.push(".");
        candidate.push(ext);
        let candidate = PathBuf::from(candidate);
        candidate.is_file().then_some(candidate)
    })
}

/// Read one resource file. `Ok(None)` means the file does not exist.
pub(crate) fn read_resource(path: &Path) -> Result<Option<Messages>, DictionaryError> {
    let Some(file) = resolve(path) else {
        return Ok(None);
    };

    let text = fs::read_to_string(&file).map_err(|source| DictionaryError::Read {
        path: file.clone(),
        source,
    })?;
    let origin = file.display().to_string();

    let messages = match file.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&text, &origin)?,
        _ => parse_toml(&text, &origin)?,
    };
    Ok(Some(messages))
}

pub(crate) fn parse_toml(text: &str, origin: &str) -> Result<Messages, DictionaryError> {
    let value: Value = toml::from_str(text).map_err(|source| DictionaryError::Toml {
        origin: origin.to_string(),
        source,
    })?;
    flatten(&value, origin)
}

pub(crate) fn parse_json(text: &str, origin: &str) -> Result<Messages, DictionaryError> {
    let value: Value = serde_json::from_str(text).map_err(|source| DictionaryError::Json {
        origin: origin.to_string(),
        source,
    })?;
    flatten(&value, origin)
}

/// Nested tables become dotted keys: `[auth] expired = ".."` is `auth.expired`.
fn flatten(value: &Value, origin: &str) -> Result<Messages, DictionaryError> {
    let Value::Object(root) = value else {
        return Err(DictionaryError::NotATable {
            origin: origin.to_string(),
        });
    };

    let mut messages = Messages::new();
    let mut pending: Vec<(String, &Value)> =
        root.iter().map(|(key, value)| (key.clone(), value)).collect();

    while let Some((key, value)) = pending.pop() {
        match value {
            Value::String(text) => {
                messages.insert(key, text.clone());
            }
            Value::Number(number) => {
                messages.insert(key, number.to_string());
            }
            Value::Bool(flag) => {
                messages.insert(key, flag.to_string());
            }
            Value::Object(table) => {
                pending.extend(
                    table
                        .iter()
                        .map(|(child, value)| (format!("{}.{}", key, child), value)),
                );
            }
            Value::Null | Value::Array(_) => {
                return Err(DictionaryError::InvalidEntry {
                    origin: origin.to_string(),
                    key,
                });
            }
        }
    }

    Ok(messages)
}
