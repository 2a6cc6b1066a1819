//! `{{key}}` placeholder substitution for message templates

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeMap;

/// Template parameters, keyed by placeholder name without braces
pub type Params = BTreeMap<String, String>;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_.\-]+)\s*\}\}").expect("placeholder pattern is valid")
});

/// Replace every `{{key}}` occurrence with its parameter value.
///
/// Placeholders without a matching parameter are left untouched.
pub fn render(template: &str, params: &Params) -> String {
    if params.is_empty() || !template.contains("{{") {
        return template.to_string();
    }

    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match params.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Build parameters from `(key, value)` pairs
pub fn params<K, V, I>(pairs: I) -> Params
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}
