//! Closed set of translation keys shared by every language.
//!
//! Each key has a stable camelCase string form. That form is what a raw
//! lookup accepts and what a lookup falls back to when a table has no entry.

macro_rules! translation_keys {
    ($( $variant:ident => $name:literal, )+) => {
        /// Identifier of one piece of user-facing text.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TranslationKey {
            $( $variant, )+
        }

        impl TranslationKey {
            /// Every key, in declaration order.
            pub const ALL: &'static [TranslationKey] = &[ $( TranslationKey::$variant, )+ ];

            /// The stable string form of the key (e.g. `"farmerDashboard"`).
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( TranslationKey::$variant => $name, )+
                }
            }

            /// Parse a raw key string. Returns `None` for strings outside the set.
            pub fn from_key(key: &str) -> Option<TranslationKey> {
                match key {
                    $( $name => Some(TranslationKey::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

translation_keys! {
    // Landing page
    Title => "title",
    Subtitle => "subtitle",
    SelectRole => "selectRole",
    Welcome => "welcome",

    // Roles
    Admin => "admin",
    Farmer => "farmer",
    Visitor => "visitor",
    AdminDesc => "adminDesc",
    FarmerDesc => "farmerDesc",
    VisitorDesc => "visitorDesc",

    // Login
    Login => "login",
    Username => "username",
    Password => "password",
    EnterUsername => "enterUsername",
    EnterPassword => "enterPassword",
    ForgotPassword => "forgotPassword",
    Help => "help",
    VerifyOtp => "verifyOtp",
    LoginWithOtp => "loginWithOtp",
    EnterOtp => "enterOtp",
    BackToPassword => "backToPassword",
    OtpSent => "otpSent",
    LoginFailed => "loginFailed",

    // Role-specific login titles
    AdminLogin => "adminLogin",
    FarmerLogin => "farmerLogin",
    VisitorLogin => "visitorLogin",

    // Dashboard
    DashboardOverview => "dashboardOverview",
    AdminDashboard => "adminDashboard",
    FarmerDashboard => "farmerDashboard",
    VisitorDashboard => "visitorDashboard",
    AdminDescFull => "adminDescFull",
    FarmerDescFull => "farmerDescFull",
    VisitorDescFull => "visitorDescFull",

    // Feature cards
    FarmManagement => "farmManagement",
    ReportsAnalytics => "reportsAnalytics",
    Approvals => "approvals",
    TrainingModules => "trainingModules",
    MyFarm => "myFarm",
    DiseaseAlerts => "diseaseAlerts",
    Training => "training",
    FarmPerformance => "farmPerformance",
    NearbyFarms => "nearbyFarms",
    RiskAssessment => "riskAssessment",
    LearningResources => "learningResources",
    FarmDirectory => "farmDirectory",

    // Feature descriptions
    ManageAllFarms => "manageAllFarms",
    ViewReports => "viewReports",
    ReviewRequests => "reviewRequests",
    ManageContent => "manageContent",
    ManageFarm => "manageFarm",
    LatestAlerts => "latestAlerts",
    AccessModules => "accessModules",
    ViewMetrics => "viewMetrics",
    ExploreFarms => "exploreFarms",
    ViewScores => "viewScores",
    EducationalContent => "educationalContent",
    BrowseListings => "browseListings",

    // Quick stats
    QuickStats => "quickStats",
    ActiveFarms => "activeFarms",
    PendingTasks => "pendingTasks",
    NearbyFarmsCount => "nearbyFarmsCount",
    PendingApprovals => "pendingApprovals",
    ActiveAlerts => "activeAlerts",
    HighRiskFarms => "highRiskFarms",
    SystemHealth => "systemHealth",
    FarmHealthScore => "farmHealthScore",
    AverageSafetyScore => "averageSafetyScore",

    // Support & helpline
    EmergencySupport => "emergencySupport",
    DiseaseAlert => "diseaseAlert",
    VeterinaryEmergency => "veterinaryEmergency",
    Available247 => "available247",
    TechnicalSupport => "technicalSupport",
    Whatsapp => "whatsapp",
    MonSat => "monSat",
    FarmerHelpline => "farmerHelpline",
    Helpline => "helpline",
    TrainingSupport => "trainingSupport",
    FreeServices => "freeServices",
    NeedHelp => "needHelp",

    // Footer
    Copyright => "copyright",
    Ministry => "ministry",

    // Header
    Logout => "logout",
    WelcomeBack => "welcomeBack",
    ChooseLanguage => "chooseLanguage",
}

impl std::fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_from_key_inverts_as_str() {
        for key in TranslationKey::ALL {
            assert_eq!(TranslationKey::from_key(key.as_str()), Some(*key));
        }
    }

    #[test]
    fn test_string_forms_are_unique() {
        let names: HashSet<_> = TranslationKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), TranslationKey::ALL.len());
    }

    #[test]
    fn test_from_key_unknown() {
        assert_eq!(TranslationKey::from_key("notAKey"), None);
        assert_eq!(TranslationKey::from_key(""), None);
        // Matching is exact, not case-insensitive
        assert_eq!(TranslationKey::from_key("Login"), None);
    }

    #[test]
    fn test_display_uses_string_form() {
        assert_eq!(TranslationKey::FarmerDashboard.to_string(), "farmerDashboard");
        assert_eq!(TranslationKey::Available247.to_string(), "available247");
    }
}
