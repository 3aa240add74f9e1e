//! Thread-safe store for localized message templates

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use quill_core::{LocalizationSource, MessageError, MessageResult};

/// Language tag used when nothing else is configured
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Thread-safe store for localized message templates
///
/// Templates are registered per language under scoped keys (`"Net.Connect.Error"`).
/// Display reads resolve against the current language and fall back to the
/// default language; log reads use the logging language instead, so persisted
/// text does not change with the user's locale.
#[derive(Debug)]
pub struct StringHost {
    language: RwLock<String>,
    logging_language: RwLock<Option<String>>,
    /// language → scoped key → template
    strings: RwLock<HashMap<String, HashMap<String, String>>>,
}

impl StringHost {
    /// Empty host set to the default language
    pub fn new() -> Self {
        Self {
            language: RwLock::new(DEFAULT_LANGUAGE.to_string()),
            logging_language: RwLock::new(None),
            strings: RwLock::new(HashMap::new()),
        }
    }

    /// Current display language
    pub fn language(&self) -> String {
        self.language.read().clone()
    }

    /// Switch the display language
    pub fn set_language(&self, language: impl Into<String>) {
        *self.language.write() = language.into();
    }

    /// Language used for log-variant lookups, when configured
    pub fn logging_language(&self) -> Option<String> {
        self.logging_language.read().clone()
    }

    /// Pin log-variant lookups to one language
    pub fn set_logging_language(&self, language: impl Into<String>) {
        *self.logging_language.write() = Some(language.into());
    }

    /// Insert or overwrite a single template under `language`
    pub fn register(&self, language: &str, key: impl Into<String>, text: impl Into<String>) {
        let key = key.into();
        debug!(language, key = %key, "Registered localized string");
        self.strings
            .write()
            .entry(language.to_string())
            .or_default()
            .insert(key, text.into());
    }

    /// Insert a batch of templates under `language`
    pub fn register_many<I, K, V>(&self, language: &str, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut strings = self.strings.write();
        let table = strings.entry(language.to_string()).or_default();
        for (key, text) in entries {
            table.insert(key.into(), text.into());
        }
    }

    /// Display template for `key` in the current language
    pub fn read(&self, key: &str) -> MessageResult<String> {
        let language = self.language.read().clone();
        self.lookup(&language, key)
    }

    /// Log template for `key` in the logging language
    pub fn read_log(&self, key: &str) -> MessageResult<String> {
        let language = self
            .logging_language
            .read()
            .clone()
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        self.lookup(&language, key)
    }

    /// Language table first, default language second, error when neither hits
    fn lookup(&self, language: &str, key: &str) -> MessageResult<String> {
        let strings = self.strings.read();
        strings
            .get(language)
            .and_then(|table| table.get(key))
            .or_else(|| strings.get(DEFAULT_LANGUAGE).and_then(|table| table.get(key)))
            .cloned()
            .ok_or_else(|| MessageError::UnknownString(key.to_string()))
    }
}

impl Default for StringHost {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalizationSource for StringHost {
    fn display_string(&self, key: &str) -> MessageResult<String> {
        self.read(key)
    }

    fn log_string(&self, key: &str) -> MessageResult<String> {
        self.read_log(key)
    }
}
