//! Per-locale message dictionary.
//!
//! A dictionary is built once from the bundled resources plus an ordered list
//! of resource paths and is read-only afterwards. Buckets are merged in load
//! order, so a later resource wins for the same code and locale.
//!
//! Every lookup walks the same chain: requested locale, then `default`, then
//! nothing. `get_message` starts at `default`, `get_ui_message` at the active
//! locale and `translate_in` at a per-call locale.
//!
//! `None` means no message is configured; an entry configured as `""` is
//! returned as an empty message.

mod loader;

use nexx_shared::{render, I18nConfig, Locale, Params};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::errors::DictionaryError;
use loader::Messages;

/// How to build a [`Dictionary`]
#[derive(Debug, Clone, Default)]
pub struct DictionaryConfig {
    /// Locale used for user-facing messages
    pub locale: Locale,

    /// Further locales to load for per-call lookups
    pub extra_locales: Vec<Locale>,

    /// Directory prefixed to every resource path
    pub base_path: Option<PathBuf>,

    /// Resource paths without extension, merged after the bundled set
    pub paths: Vec<String>,
}

impl DictionaryConfig {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Default::default()
        }
    }

    /// Build from the application's i18n settings; an unset language selects
    /// the `default` bucket.
    pub fn from_i18n(config: &I18nConfig) -> Result<Self, DictionaryError> {
        let parse = |tag: &str| {
            tag.parse::<Locale>()
                .map_err(|_| DictionaryError::InvalidLocale(tag.to_string()))
        };

        let locale = match config.language.as_deref() {
            Some(tag) => parse(tag)?,
            None => Locale::default(),
        };
        let extra_locales = config
            .extra_locales
            .iter()
            .map(|tag| parse(tag))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            locale,
            extra_locales,
            base_path: config.base_path.clone(),
            paths: config.resource_paths.clone(),
        })
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.paths.push(path.into());
        self
    }

    pub fn with_base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    pub fn with_extra_locale(mut self, locale: Locale) -> Self {
        self.extra_locales.push(locale);
        self
    }

    /// Active locale followed by the extra ones, without `default` or repeats
    fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = Vec::new();
        for locale in std::iter::once(&self.locale).chain(self.extra_locales.iter()) {
            if !locale.is_default() && !locales.contains(locale) {
                locales.push(locale.clone());
            }
        }
        locales
    }
}

/// Immutable locale → code → message template mapping
#[derive(Debug, Clone)]
pub struct Dictionary {
    locale: Locale,
    buckets: HashMap<Locale, Messages>,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::bundled()
    }
}

impl Dictionary {
    /// Dictionary with no messages at all, not even the bundled ones
    pub fn empty(locale: Locale) -> Self {
        let mut buckets = HashMap::new();
        buckets.insert(Locale::default(), Messages::new());
        Self { locale, buckets }
    }

    /// Only the bundled resources, active locale `default`
    pub fn bundled() -> Self {
        Self::with_bundled(&DictionaryConfig::default())
    }

    /// Bundled resources first, then every configured path in order.
    ///
    /// Missing files are logged and skipped; unreadable or malformed files
    /// fail the load.
    pub fn load(config: &DictionaryConfig) -> Result<Self, DictionaryError> {
        let mut dictionary = Self::with_bundled(config);
        let locales = config.locales();

        for path in &config.paths {
            let base = match &config.base_path {
                Some(base_path) => base_path.join(path),
                None => PathBuf::from(path),
            };

            dictionary.merge_file(&Locale::default(), &base)?;
            for locale in &locales {
                let localized = PathBuf::from(format!("{}_{}", base.display(), locale));
                dictionary.merge_file(locale, &localized)?;
            }
        }

        debug!(
            locale = %dictionary.locale,
            resources = config.paths.len(),
            "Error dictionary loaded"
        );
        Ok(dictionary)
    }

    fn with_bundled(config: &DictionaryConfig) -> Self {
        let mut dictionary = Self::empty(config.locale.clone());
        let wanted = config.locales();

        for (tag, text) in loader::BUNDLED {
            let locale = Locale::from(*tag);
            if !locale.is_default() && !wanted.contains(&locale) {
                continue;
            }
            match loader::parse_toml(text, tag) {
                Ok(messages) => dictionary.merge(&locale, messages),
                Err(err) => warn!(locale = %tag, error = %err, "Bundled error resource is invalid"),
            }
        }

        for locale in wanted {
            dictionary.buckets.entry(locale).or_default();
        }
        dictionary
    }

    fn merge_file(&mut self, locale: &Locale, path: &Path) -> Result<(), DictionaryError> {
        match loader::read_resource(path)? {
            Some(messages) => {
                self.merge(locale, messages);
            }
            None => {
                warn!(path = %path.display(), locale = %locale, "Resource path does not exist");
            }
        }
        Ok(())
    }

    fn merge(&mut self, locale: &Locale, messages: Messages) {
        self.buckets.entry(locale.clone()).or_default().extend(messages);
    }

    /// Active locale for user-facing messages
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Loaded locale buckets, sorted
    pub fn locales(&self) -> Vec<&Locale> {
        let mut locales: Vec<&Locale> = self.buckets.keys().collect();
        locales.sort();
        locales
    }

    /// Whether `locale` itself (without fallback) defines `code`
    pub fn contains(&self, locale: &Locale, code: &str) -> bool {
        self.buckets
            .get(locale)
            .map(|bucket| bucket.contains_key(code))
            .unwrap_or(false)
    }

    /// Number of messages in a locale bucket
    pub fn len(&self, locale: &Locale) -> usize {
        self.buckets.get(locale).map(Messages::len).unwrap_or(0)
    }

    /// Raw template: requested locale, then `default`. A template configured
    /// as `""` is `Some("")` and does not fall through to `default`.
    pub fn lookup(&self, locale: &Locale, code: &str) -> Option<&str> {
        let own = self
            .buckets
            .get(locale)
            .and_then(|bucket| bucket.get(code));
        let message = match own {
            Some(message) => Some(message),
            None => self
                .buckets
                .get(&Locale::default())
                .and_then(|bucket| bucket.get(code)),
        };
        message.map(String::as_str)
    }

    /// Operator message from the `default` bucket
    pub fn get_message(&self, code: &str, params: Option<&Params>) -> Option<String> {
        self.translate_in(code, &Locale::default(), params)
    }

    /// User message in the active locale, falling back to `default`
    pub fn get_ui_message(&self, code: &str, params: Option<&Params>) -> Option<String> {
        self.translate_in(code, &self.locale, params)
    }

    /// Message for a per-call locale, falling back to `default`
    pub fn translate_in(&self, code: &str, locale: &Locale, params: Option<&Params>) -> Option<String> {
        let template = self.lookup(locale, code)?;
        Some(match params {
            Some(params) => render(template, params),
            None => template.to_string(),
        })
    }
}

#[cfg(test)]
mod tests;
