//! User roles and the role-keyed display configuration shared by the
//! landing, login and dashboard views.

use crate::i18n::TranslationKey;
use tracing::warn;

/// One of the three portal roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Farmer,
    Visitor,
}

impl Role {
    /// Roles in the order the landing page offers them.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Farmer, Role::Visitor];

    /// Role used for any path segment outside the known set.
    pub const FALLBACK: Role = Role::Farmer;

    /// Parse an exact path segment.
    pub fn parse(segment: &str) -> Option<Role> {
        match segment {
            "admin" => Some(Role::Admin),
            "farmer" => Some(Role::Farmer),
            "visitor" => Some(Role::Visitor),
            _ => None,
        }
    }

    /// Resolve a path segment, falling back to [`Role::FALLBACK`] for
    /// anything unrecognized.
    ///
    /// Both the login and dashboard views go through this function so an
    /// unknown role renders the same configuration everywhere.
    pub fn resolve(segment: &str) -> Role {
        match Role::parse(segment) {
            Some(role) => role,
            None => {
                warn!(
                    segment,
                    fallback = Role::FALLBACK.segment(),
                    "Unrecognized role, using fallback configuration"
                );
                Role::FALLBACK
            }
        }
    }

    /// Path segment used in `/login/{role}` and `/dashboard/{role}`.
    pub fn segment(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Farmer => "farmer",
            Role::Visitor => "visitor",
        }
    }

    pub fn title_key(&self) -> TranslationKey {
        match self {
            Role::Admin => TranslationKey::Admin,
            Role::Farmer => TranslationKey::Farmer,
            Role::Visitor => TranslationKey::Visitor,
        }
    }

    /// Short description shown on the role card.
    pub fn description_key(&self) -> TranslationKey {
        match self {
            Role::Admin => TranslationKey::AdminDesc,
            Role::Farmer => TranslationKey::FarmerDesc,
            Role::Visitor => TranslationKey::VisitorDesc,
        }
    }

    pub fn login_title_key(&self) -> TranslationKey {
        match self {
            Role::Admin => TranslationKey::AdminLogin,
            Role::Farmer => TranslationKey::FarmerLogin,
            Role::Visitor => TranslationKey::VisitorLogin,
        }
    }

    pub fn dashboard_title_key(&self) -> TranslationKey {
        match self {
            Role::Admin => TranslationKey::AdminDashboard,
            Role::Farmer => TranslationKey::FarmerDashboard,
            Role::Visitor => TranslationKey::VisitorDashboard,
        }
    }

    /// Long description under the dashboard overview heading.
    pub fn overview_key(&self) -> TranslationKey {
        match self {
            Role::Admin => TranslationKey::AdminDescFull,
            Role::Farmer => TranslationKey::FarmerDescFull,
            Role::Visitor => TranslationKey::VisitorDescFull,
        }
    }

    /// Header and card accent colour.
    pub fn accent(&self) -> &'static str {
        match self {
            Role::Admin => "#3b82f6",
            Role::Farmer => "#22c55e",
            Role::Visitor => "#a855f7",
        }
    }

    /// Icon on the landing page role card.
    pub fn card_icon(&self) -> &'static str {
        match self {
            Role::Admin => "🛡️",
            Role::Farmer => "✅",
            Role::Visitor => "👁️",
        }
    }

    /// Icon in the login and dashboard headers.
    pub fn header_icon(&self) -> &'static str {
        match self {
            Role::Admin => "🛠️",
            Role::Farmer => "👨‍🌾",
            Role::Visitor => "👥",
        }
    }

    /// Whether the login view offers one-time-code login.
    pub fn offers_otp(&self) -> bool {
        matches!(self, Role::Farmer)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.segment())
    }
}
