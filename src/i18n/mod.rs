//! Internationalization (i18n) module.
//!
//! Everything language-related lives here: the closed language set, the
//! closed key set, the per-language tables and the lookup that ties them
//! together.
//!
//! # Architecture
//!
//! - `registry`: supported languages and their display metadata
//! - `language`: validated `Language` type
//! - `keys`: the `TranslationKey` enumeration
//! - `strings`: raw per-language tables
//! - `table`: the read-only lookup store with fallback-to-key
//! - `validator`: completeness and token-preservation checks
//! - `metrics`: lookup and fallback counters
//!
//! # Example
//!
//! ```rust,ignore
//! use farm_portal::i18n::{Language, TranslationKey, TranslationTable};
//!
//! let table = TranslationTable::global();
//! let title = table.lookup(Language::HINDI, TranslationKey::FarmerDashboard);
//! ```

mod keys;
mod language;
mod metrics;
mod registry;
pub mod strings;
mod table;
mod validator;

pub use keys::TranslationKey;
pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use table::TranslationTable;
pub use validator::{TranslationValidator, ValidationReport};
