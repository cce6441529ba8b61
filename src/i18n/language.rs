//! Language type: validated member of the closed language set.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A language from the registry.
///
/// Only the constants below or [`Language::from_code`] can produce a value,
/// so every `Language` is guaranteed to have a translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "ta")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const HINDI: Language = Language { code: "hi" };
    pub const MARATHI: Language = Language { code: "mr" };
    pub const GUJARATI: Language = Language { code: "gu" };
    pub const TAMIL: Language = Language { code: "ta" };

    /// Every supported language, in selector order.
    pub const ALL: [Language; 5] = [
        Language::ENGLISH,
        Language::HINDI,
        Language::MARATHI,
        Language::GUJARATI,
        Language::TAMIL,
    ];

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is one of en, hi, mr, gu, ta
    /// * `Err` for anything else (codes are case-sensitive)
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The canonical language, which is also the default for a new session.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Registry metadata for this language.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a value built through the constants or `from_code`.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn flag(&self) -> &'static str {
        self.config().flag
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_constants_match_registry() {
        for language in Language::ALL {
            let config = language.config();
            assert_eq!(config.code, language.code());
        }
    }

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(english.is_canonical());
    }

    #[test]
    fn test_tamil_constant() {
        let tamil = Language::TAMIL;
        assert_eq!(tamil.code(), "ta");
        assert_eq!(tamil.name(), "Tamil");
        assert_eq!(tamil.native_name(), "தமிழ்");
        assert!(!tamil.is_canonical());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_each_language() {
        for code in ["en", "hi", "mr", "gu", "ta"] {
            let language = Language::from_code(code).expect("Should succeed");
            assert_eq!(language.code(), code);
        }
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("es");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Language::from_code("HI").is_err());
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    // ==================== Default Tests ====================

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::ENGLISH);
        assert_eq!(Language::canonical(), Language::ENGLISH);
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::GUJARATI.to_string(), "gu");
    }

    #[test]
    fn test_language_equality() {
        assert_eq!(Language::HINDI, Language::from_code("hi").unwrap());
        assert_ne!(Language::HINDI, Language::MARATHI);
    }
}
