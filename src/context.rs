//! Per-session language context.
//!
//! A `LanguageContext` owns the session's selected language and resolves
//! translation keys against it. Views receive it by shared reference, so a
//! language change (which needs `&mut`) can never land in the middle of a
//! render.

use crate::i18n::{Language, TranslationKey, TranslationMetrics, TranslationTable};
use tracing::info;

#[derive(Debug, Clone)]
pub struct LanguageContext {
    language: Language,
    table: &'static TranslationTable,
}

impl LanguageContext {
    /// Context over the shipped table, starting in the default language.
    pub fn new() -> Self {
        Self::with_table(TranslationTable::global())
    }

    pub fn with_table(table: &'static TranslationTable) -> Self {
        Self {
            language: Language::default(),
            table,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Replace the session language. Every lookup after this call uses the
    /// new language.
    pub fn set_language(&mut self, language: Language) {
        if self.language == language {
            return;
        }

        info!(from = %self.language, to = %language, "Session language changed");
        TranslationMetrics::global().record_language_change();
        self.language = language;
    }

    /// Translate `key` in the current language.
    pub fn t(&self, key: TranslationKey) -> &'static str {
        self.table.lookup(self.language, key)
    }

    /// Translate a raw key string; unknown keys come back unchanged.
    pub fn t_raw<'a>(&self, key: &'a str) -> &'a str {
        self.table.lookup_raw(self.language, key)
    }
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self::new()
    }
}
