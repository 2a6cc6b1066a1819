//! Locale identifiers for message dictionaries

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static LOCALE_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}([-_][A-Za-z0-9]{2,8})*$").expect("locale pattern is valid")
});

/// Name of the bucket every dictionary falls back to
pub const DEFAULT_LOCALE: &str = "default";

/// Locale tag such as `vi`, `en-US` or the `default` bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Default for Locale {
    fn default() -> Self {
        Locale(DEFAULT_LOCALE.to_string())
    }
}

impl Locale {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_LOCALE
    }

    /// Primary language subtag, lowercased (`en-US` gives `en`)
    pub fn language(&self) -> String {
        self.0
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }

    /// Pick the supported locale with the highest quality from an
    /// `Accept-Language` header value.
    ///
    /// Example header: "vi-VN,vi;q=0.9,en-US;q=0.8". Region subtags match on
    /// their primary language. Returns `None` when nothing matches.
    pub fn from_accept_language(header: &str, supported: &[Locale]) -> Option<Locale> {
        let mut preferred: Option<(Locale, f32)> = None;

        for entry in header.split(',') {
            let mut parts = entry.trim().split(';');
            let tag = parts.next().unwrap_or_default().trim().to_lowercase();
            if tag.is_empty() {
                continue;
            }
            let quality = parts
                .find_map(|part| part.trim().strip_prefix("q="))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);

            let language = tag.split(['-', '_']).next().unwrap_or_default();
            let matched = supported
                .iter()
                .find(|locale| locale.0.eq_ignore_ascii_case(&tag))
                .or_else(|| supported.iter().find(|locale| locale.language() == language));

            if let Some(locale) = matched {
                let better = preferred
                    .as_ref()
                    .map(|(_, best)| quality > *best)
                    .unwrap_or(true);
                if better {
                    preferred = Some((locale.clone(), quality));
                }
            }
        }

        preferred.map(|(locale, _)| locale)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.eq_ignore_ascii_case(DEFAULT_LOCALE) {
            return Ok(Locale::default());
        }
        if LOCALE_TAG.is_match(tag) {
            Ok(Locale(tag.to_string()))
        } else {
            Err(format!("Unsupported locale: {}", s))
        }
    }
}

impl From<&str> for Locale {
    /// Unchecked conversion; use `parse` for untrusted input.
    fn from(s: &str) -> Self {
        Locale(s.to_string())
    }
}
