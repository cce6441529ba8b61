//! Translation table: read-only `Language -> (TranslationKey -> text)` store.

use super::keys::TranslationKey;
use super::metrics::TranslationMetrics;
use super::strings::{Entries, SOURCES};
use super::Language;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

/// Immutable mapping from language to its dictionary.
///
/// Lookups never fail: a missing entry resolves to the key's own string
/// form, so an incomplete table degrades to showing identifiers instead of
/// breaking a page.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    tables: HashMap<Language, HashMap<TranslationKey, &'static str>>,
}

static TABLE: OnceLock<TranslationTable> = OnceLock::new();

impl TranslationTable {
    /// The shipped table, built on first access.
    pub fn global() -> &'static TranslationTable {
        TABLE.get_or_init(|| TranslationTable::from_entries(&SOURCES))
    }

    /// Build a table from per-language entry lists.
    ///
    /// Later duplicates of a key overwrite earlier ones; the validator
    /// reports duplicates in the shipped sources.
    pub fn from_entries(sources: &[(Language, Entries)]) -> Self {
        let tables = sources
            .iter()
            .map(|(language, entries)| (*language, entries.iter().copied().collect()))
            .collect();

        Self { tables }
    }

    /// Look up `key` for `language`, falling back to the key's string form.
    /// An empty entry counts as missing.
    pub fn lookup(&self, language: Language, key: TranslationKey) -> &'static str {
        let metrics = TranslationMetrics::global();
        metrics.record_lookup();

        match self.get(language, key).filter(|text| !text.is_empty()) {
            Some(text) => text,
            None => {
                metrics.record_fallback();
                debug!(language = %language, key = %key, "Missing translation, showing key");
                key.as_str()
            }
        }
    }

    /// Look up a raw key string, returning the input itself when it is not a
    /// known key or has no entry for `language`.
    pub fn lookup_raw<'a>(&self, language: Language, key: &'a str) -> &'a str {
        match TranslationKey::from_key(key) {
            Some(known) => self.lookup(language, known),
            None => {
                let metrics = TranslationMetrics::global();
                metrics.record_lookup();
                metrics.record_fallback();
                debug!(language = %language, key, "Unknown translation key, showing key");
                key
            }
        }
    }

    /// Entry for `key` without fallback or metrics.
    pub fn get(&self, language: Language, key: TranslationKey) -> Option<&'static str> {
        self.tables
            .get(&language)
            .and_then(|table| table.get(&key))
            .copied()
    }

    /// Keys that `language` has no entry for, in declaration order.
    pub fn missing_keys(&self, language: Language) -> Vec<TranslationKey> {
        TranslationKey::ALL
            .iter()
            .copied()
            .filter(|key| self.get(language, *key).is_none())
            .collect()
    }
}
