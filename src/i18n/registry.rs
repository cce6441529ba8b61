//! Language registry: single source of truth for the portal's languages.
//!
//! The set is closed and fixed at build time. The registry is initialized
//! once behind a `OnceLock` and is read-only afterwards.

use std::sync::OnceLock;

/// Metadata for one supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "hi")
    pub code: &'static str,

    /// English name of the language (e.g., "Hindi")
    pub name: &'static str,

    /// Name of the language in its own script (e.g., "हिंदी")
    pub native_name: &'static str,

    /// Flag emoji shown in the language selector
    pub flag: &'static str,

    /// Whether this is the source language every other table is translated
    /// from. It is also the session default. Exactly one entry sets this.
    pub is_canonical: bool,
}

/// Global language registry.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Look up a language by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the code belongs to the closed set
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All languages in selector order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// The canonical (source and default) language.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one canonical
    /// language, which is a build-time configuration error.
    pub fn canonical(&self) -> &LanguageConfig {
        let mut canonical = self.languages.iter().filter(|lang| lang.is_canonical);

        match (canonical.next(), canonical.next()) {
            (Some(lang), None) => lang,
            (None, _) => panic!("Registry defines no canonical language"),
            (Some(_), Some(_)) => panic!("Registry defines more than one canonical language"),
        }
    }
}

/// English first, then the regional languages in selector order.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            flag: "🇺🇸",
            is_canonical: true,
        },
        LanguageConfig {
            code: "hi",
            name: "Hindi",
            native_name: "हिंदी",
            flag: "🇮🇳",
            is_canonical: false,
        },
        LanguageConfig {
            code: "mr",
            name: "Marathi",
            native_name: "मराठी",
            flag: "🇮🇳",
            is_canonical: false,
        },
        LanguageConfig {
            code: "gu",
            name: "Gujarati",
            native_name: "ગુજરાતી",
            flag: "🇮🇳",
            is_canonical: false,
        },
        LanguageConfig {
            code: "ta",
            name: "Tamil",
            native_name: "தமிழ்",
            flag: "🇮🇳",
            is_canonical: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_hindi() {
        let config = LanguageRegistry::get()
            .get_by_code("hi")
            .expect("hi should be registered");

        assert_eq!(config.name, "Hindi");
        assert_eq!(config.native_name, "हिंदी");
        assert_eq!(config.flag, "🇮🇳");
        assert!(!config.is_canonical);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("fr").is_none());
        assert!(LanguageRegistry::get().get_by_code("EN").is_none());
    }

    #[test]
    fn test_list_all_has_five_languages_in_order() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list_all()
            .iter()
            .map(|lang| lang.code)
            .collect();

        assert_eq!(codes, vec!["en", "hi", "mr", "gu", "ta"]);
    }

    #[test]
    fn test_canonical_returns_english() {
        let canonical = LanguageRegistry::get().canonical();

        assert_eq!(canonical.code, "en");
        assert!(canonical.is_canonical);
    }
}
