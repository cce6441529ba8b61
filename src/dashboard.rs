//! Role-keyed dashboard configuration.
//!
//! `DashboardConfig::build` is a total function over [`Role`]: every role
//! yields four feature cards and three quick stats, all translated through
//! the caller's [`LanguageContext`].

use crate::context::LanguageContext;
use crate::i18n::TranslationKey;
use crate::role::Role;

/// Colour family of a quick-stat value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Primary,
    Warning,
    Success,
}

impl StatTone {
    pub fn color(&self) -> &'static str {
        match self {
            StatTone::Primary => "#16a34a",
            StatTone::Warning => "#ca8a04",
            StatTone::Success => "#15803d",
        }
    }
}

/// Untranslated stat as produced by a [`MetricsSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatSpec {
    pub value: String,
    pub label: TranslationKey,
    pub tone: StatTone,
}

impl StatSpec {
    fn new(value: impl Into<String>, label: TranslationKey, tone: StatTone) -> Self {
        Self {
            value: value.into(),
            label,
            tone,
        }
    }
}

pub type RoleStats = [StatSpec; 3];

/// Supplies the three dashboard counters for a role.
pub trait MetricsSource: Send + Sync {
    fn stats(&self, role: Role) -> RoleStats;
}

/// Fixed counters shown until a live source exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMetrics;

impl MetricsSource for StaticMetrics {
    fn stats(&self, role: Role) -> RoleStats {
        use StatTone::*;
        use TranslationKey as K;

        match role {
            Role::Admin => [
                StatSpec::new("24", K::ActiveFarms, Primary),
                StatSpec::new("3", K::PendingApprovals, Warning),
                StatSpec::new("98%", K::SystemHealth, Success),
            ],
            Role::Farmer => [
                StatSpec::new("8", K::PendingTasks, Primary),
                StatSpec::new("2", K::ActiveAlerts, Warning),
                StatSpec::new("85%", K::FarmHealthScore, Success),
            ],
            Role::Visitor => [
                StatSpec::new("12", K::NearbyFarmsCount, Primary),
                StatSpec::new("5", K::HighRiskFarms, Warning),
                StatSpec::new("92%", K::AverageSafetyScore, Success),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub value: String,
    pub label: &'static str,
    pub tone: StatTone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub role: Role,
    pub title: &'static str,
    pub overview: &'static str,
    pub features: [Feature; 4],
    pub stats: [Stat; 3],
}

type FeatureSpec = (&'static str, TranslationKey, TranslationKey);

fn feature_specs(role: Role) -> [FeatureSpec; 4] {
    use TranslationKey as K;

    match role {
        Role::Admin => [
            ("👥", K::FarmManagement, K::ManageAllFarms),
            ("📊", K::ReportsAnalytics, K::ViewReports),
            ("⚠️", K::Approvals, K::ReviewRequests),
            ("📖", K::TrainingModules, K::ManageContent),
        ],
        Role::Farmer => [
            ("🏠", K::MyFarm, K::ManageFarm),
            ("⚠️", K::DiseaseAlerts, K::LatestAlerts),
            ("📖", K::Training, K::AccessModules),
            ("📈", K::FarmPerformance, K::ViewMetrics),
        ],
        Role::Visitor => [
            ("📍", K::NearbyFarms, K::ExploreFarms),
            ("📈", K::RiskAssessment, K::ViewScores),
            ("📖", K::LearningResources, K::EducationalContent),
            ("👥", K::FarmDirectory, K::BrowseListings),
        ],
    }
}

impl DashboardConfig {
    pub fn build(role: Role, context: &LanguageContext, metrics: &dyn MetricsSource) -> Self {
        let features = feature_specs(role).map(|(icon, title, description)| Feature {
            icon,
            title: context.t(title),
            description: context.t(description),
        });

        let stats = metrics.stats(role).map(|spec| Stat {
            value: spec.value,
            label: context.t(spec.label),
            tone: spec.tone,
        });

        Self {
            role,
            title: context.t(role.dashboard_title_key()),
            overview: context.t(role.overview_key()),
            features,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn build(role: Role, language: Language) -> DashboardConfig {
        let mut context = LanguageContext::new();
        context.set_language(language);
        DashboardConfig::build(role, &context, &StaticMetrics)
    }

    #[test]
    fn test_every_role_has_four_features_and_three_stats() {
        for language in Language::ALL {
            for role in Role::ALL {
                let config = build(role, language);
                assert_eq!(config.features.len(), 4);
                assert_eq!(config.stats.len(), 3);

                for feature in &config.features {
                    assert!(!feature.title.is_empty());
                    assert!(!feature.description.is_empty());
                }
                for stat in &config.stats {
                    assert!(!stat.label.is_empty());
                    assert!(!stat.value.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_farmer_dashboard_in_hindi() {
        let context = {
            let mut c = LanguageContext::new();
            c.set_language(Language::HINDI);
            c
        };
        let config = DashboardConfig::build(Role::Farmer, &context, &StaticMetrics);

        assert_eq!(config.title, context.t(TranslationKey::FarmerDashboard));
        let titles: Vec<_> = config.features.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec![
                context.t(TranslationKey::MyFarm),
                context.t(TranslationKey::DiseaseAlerts),
                context.t(TranslationKey::Training),
                context.t(TranslationKey::FarmPerformance),
            ]
        );
    }

    #[test]
    fn test_static_stat_values() {
        let values = |role| {
            StaticMetrics
                .stats(role)
                .map(|s| s.value)
                .to_vec()
        };
        assert_eq!(values(Role::Admin), vec!["24", "3", "98%"]);
        assert_eq!(values(Role::Farmer), vec!["8", "2", "85%"]);
        assert_eq!(values(Role::Visitor), vec!["12", "5", "92%"]);
    }

    #[test]
    fn test_stat_labels_in_english() {
        let config = build(Role::Visitor, Language::ENGLISH);
        let labels: Vec<_> = config.stats.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec!["Nearby Farms", "High Risk Farms", "Average Safety Score"]
        );
    }

    #[test]
    fn test_custom_metrics_source() {
        struct Live;
        impl MetricsSource for Live {
            fn stats(&self, _role: Role) -> RoleStats {
                [
                    StatSpec::new("1", TranslationKey::ActiveFarms, StatTone::Primary),
                    StatSpec::new("0", TranslationKey::PendingApprovals, StatTone::Warning),
                    StatSpec::new("100%", TranslationKey::SystemHealth, StatTone::Success),
                ]
            }
        }

        let config = DashboardConfig::build(Role::Admin, &LanguageContext::new(), &Live);
        assert_eq!(config.stats[2].value, "100%");
    }
}
