//! Translation table validation.
//!
//! Checks the per-language sources for completeness (every key present
//! once, nothing empty) and compares each translation with the canonical
//! English text to catch lost numbers and acronyms such as helpline hours,
//! "24/7" or "OTP".

use super::keys::TranslationKey;
use super::strings::Entries;
use super::Language;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Defects: missing, duplicated or empty entries
    pub errors: Vec<String>,

    /// Likely mistranslations
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation tables.
pub struct TranslationValidator;

static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
static ACRONYM_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate every language's entries against the closed key set and
    /// against the canonical language's text.
    pub fn validate_sources(sources: &[(Language, Entries)]) -> ValidationReport {
        let mut report = ValidationReport::new();
        let canonical = Language::canonical();

        for language in Language::ALL {
            if !sources.iter().any(|(lang, _)| *lang == language) {
                report
                    .errors
                    .push(format!("{}: no translation table", language));
            }
        }

        let canonical_entries: HashMap<TranslationKey, &str> = sources
            .iter()
            .find(|(lang, _)| *lang == canonical)
            .map(|(_, entries)| entries.iter().copied().collect())
            .unwrap_or_default();

        for (language, entries) in sources {
            let mut seen: HashMap<TranslationKey, usize> = HashMap::new();
            for (key, text) in entries.iter() {
                *seen.entry(*key).or_insert(0) += 1;

                if text.trim().is_empty() {
                    report
                        .errors
                        .push(format!("{}/{}: empty translation", language, key));
                }
            }

            for key in TranslationKey::ALL {
                match seen.get(key) {
                    None => report
                        .errors
                        .push(format!("{}/{}: missing translation", language, key)),
                    Some(count) if *count > 1 => report.errors.push(format!(
                        "{}/{}: defined {} times",
                        language, key, count
                    )),
                    Some(_) => {}
                }
            }

            if *language == canonical {
                continue;
            }

            for (key, text) in entries.iter() {
                let Some(original) = canonical_entries.get(key) else {
                    continue;
                };

                if text == original {
                    report.warnings.push(format!(
                        "{}/{}: identical to {} text",
                        language, key, canonical
                    ));
                }

                for warning in Self::validate(original, text).warnings {
                    report
                        .warnings
                        .push(format!("{}/{}: {}", language, key, warning));
                }
            }
        }

        report
    }

    /// Validate that a translation preserves numbers and acronyms from the
    /// original.
    pub fn validate(original: &str, translated: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        let orig_numbers = Self::extract_numbers(original);
        let trans_numbers = Self::extract_numbers(translated);
        if orig_numbers != trans_numbers {
            report.warnings.push(format!(
                "Number mismatch: original has {:?}, translation has {:?}",
                orig_numbers, trans_numbers
            ));
        }

        let orig_acronyms = Self::extract_acronyms(original);
        let trans_acronyms = Self::extract_acronyms(translated);
        if orig_acronyms != trans_acronyms {
            report.warnings.push(format!(
                "Acronym mismatch: original has {:?}, translation has {:?}",
                orig_acronyms, trans_acronyms
            ));
        }

        report
    }

    /// Extract ASCII digit runs, in order
    fn extract_numbers(text: &str) -> Vec<String> {
        let regex = NUMBER_REGEX.get_or_init(|| Regex::new(r"[0-9]+").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Extract upper-case Latin acronyms of three or more letters (e.g. OTP)
    fn extract_acronyms(text: &str) -> Vec<String> {
        let regex = ACRONYM_REGEX.get_or_init(|| Regex::new(r"\b[A-Z]{3,}\b").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::strings::SOURCES;

    // ==================== Extraction Tests ====================

    #[test]
    fn test_extract_numbers_in_order() {
        let numbers = TranslationValidator::extract_numbers("Mon-Sat: 9 AM - 6 PM");
        assert_eq!(numbers, vec!["9", "6"]);
    }

    #[test]
    fn test_extract_numbers_splits_slash() {
        let numbers = TranslationValidator::extract_numbers("Available 24/7");
        assert_eq!(numbers, vec!["24", "7"]);
    }

    #[test]
    fn test_extract_acronyms_ignores_short_caps() {
        let acronyms = TranslationValidator::extract_acronyms("Verify OTP between 9 AM and 6 PM");
        assert_eq!(acronyms, vec!["OTP"]);
    }

    // ==================== Pairwise Validation Tests ====================

    #[test]
    fn test_validate_preserved_tokens_is_clean() {
        let report = TranslationValidator::validate(
            "Available 24/7 for farm emergencies",
            "फार्म आपातकाल के लिए 24/7 उपलब्ध",
        );
        assert!(report.is_clean());
    }

    #[test]
    fn test_validate_lost_number_warns() {
        let report = TranslationValidator::validate("Mon-Sat: 9 AM - 6 PM", "सोम-शनि");
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("Number mismatch"));
    }

    #[test]
    fn test_validate_lost_acronym_warns() {
        let report = TranslationValidator::validate("Verify OTP", "सत्यापित करें");
        assert!(report.warnings.iter().any(|w| w.contains("Acronym mismatch")));
    }

    // ==================== Source Validation Tests ====================

    #[test]
    fn test_shipped_sources_are_clean() {
        let report = TranslationValidator::validate_sources(&SOURCES);
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_missing_language_and_key_are_errors() {
        const EN: Entries = &[(TranslationKey::Login, "Login")];
        let report = TranslationValidator::validate_sources(&[(Language::ENGLISH, EN)]);

        assert!(report.errors.iter().any(|e| e == "hi: no translation table"));
        assert!(report
            .errors
            .iter()
            .any(|e| e == "en/logout: missing translation"));
        assert!(!report.errors.iter().any(|e| e.starts_with("en/login:")));
    }

    #[test]
    fn test_duplicate_and_empty_are_errors() {
        const EN: Entries = &[
            (TranslationKey::Help, "Help"),
            (TranslationKey::Help, "Help again"),
            (TranslationKey::Logout, "  "),
        ];
        let report = TranslationValidator::validate_sources(&[(Language::ENGLISH, EN)]);

        assert!(report.errors.iter().any(|e| e == "en/help: defined 2 times"));
        assert!(report.errors.iter().any(|e| e == "en/logout: empty translation"));
    }

    #[test]
    fn test_untranslated_copy_warns() {
        const EN: Entries = &[(TranslationKey::MonSat, "Mon-Sat: 9 AM - 6 PM")];
        const TA: Entries = &[(TranslationKey::MonSat, "Mon-Sat: 9 AM - 6 PM")];
        let report = TranslationValidator::validate_sources(&[
            (Language::ENGLISH, EN),
            (Language::TAMIL, TA),
        ]);

        assert!(report
            .warnings
            .iter()
            .any(|w| w == "ta/monSat: identical to en text"));
    }

    #[test]
    fn test_report_default_is_clean() {
        assert!(ValidationReport::default().is_clean());
    }
}
