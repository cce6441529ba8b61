//! Translation metrics and observability module.
//!
//! Counts lookups, key fallbacks and language switches so incomplete
//! tables show up at `/metrics/i18n` instead of only in rendered pages.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global translation metrics singleton.
pub struct TranslationMetrics {
    /// Number of lookups served (typed or raw)
    lookups: AtomicUsize,

    /// Number of lookups that fell back to the raw key
    fallbacks: AtomicUsize,

    /// Number of session language changes
    language_changes: AtomicUsize,
}

static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// Get the global translation metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(|| TranslationMetrics {
            lookups: AtomicUsize::new(0),
            fallbacks: AtomicUsize::new(0),
            language_changes: AtomicUsize::new(0),
        })
    }

    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_language_change(&self) {
        self.language_changes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn language_changes(&self) -> usize {
        self.language_changes.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let fallbacks = self.fallbacks();
        let fallback_rate = if lookups > 0 {
            (fallbacks as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            fallbacks,
            fallback_rate,
            language_changes: self.language_changes(),
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.lookups.store(0, Ordering::Relaxed);
        self.fallbacks.store(0, Ordering::Relaxed);
        self.language_changes.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of the translation counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub fallbacks: usize,
    /// Percentage of lookups that showed a raw key (0-100)
    pub fallback_rate: f64,
    pub language_changes: usize,
}

impl MetricsReport {
    /// Format report as a human-readable log line.
    pub fn format(&self) -> String {
        format!(
            "Translation Metrics: {} lookups, {} fallbacks ({:.1}%), {} language changes",
            self.lookups, self.fallbacks, self.fallback_rate, self.language_changes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // Every test here touches the global counters, and lookups elsewhere in
    // the crate bump them too, so they run serially and reset first.

    #[test]
    #[serial(i18n_metrics)]
    fn test_global_returns_singleton() {
        let first = TranslationMetrics::global();
        let second = TranslationMetrics::global();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    #[serial(i18n_metrics)]
    fn test_report_fallback_rate() {
        let metrics = TranslationMetrics::global();
        metrics.reset();

        for _ in 0..4 {
            metrics.record_lookup();
        }
        metrics.record_fallback();

        let report = metrics.report();
        assert!(report.lookups >= 4);
        assert!(report.fallbacks >= 1);
        assert!(report.fallback_rate > 0.0 && report.fallback_rate <= 100.0);
    }

    #[test]
    #[serial(i18n_metrics)]
    fn test_record_language_change() {
        let metrics = TranslationMetrics::global();
        let before = metrics.language_changes();
        metrics.record_language_change();
        assert!(metrics.language_changes() > before);
    }

    #[test]
    fn test_report_zero_lookups_has_zero_rate() {
        let metrics = TranslationMetrics {
            lookups: AtomicUsize::new(0),
            fallbacks: AtomicUsize::new(0),
            language_changes: AtomicUsize::new(0),
        };
        let report = metrics.report();
        assert_eq!(report.fallback_rate, 0.0);
    }

    #[test]
    fn test_report_format_and_serialize() {
        let report = MetricsReport {
            lookups: 200,
            fallbacks: 2,
            fallback_rate: 1.0,
            language_changes: 3,
        };

        let text = report.format();
        assert!(text.contains("200 lookups"));
        assert!(text.contains("2 fallbacks (1.0%)"));

        let json = serde_json::to_value(&report).expect("Should serialize");
        assert_eq!(json["language_changes"], 3);
    }
}
