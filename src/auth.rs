//! Authentication collaborators used by the login flow.
//!
//! The portal ships only stand-ins: `MockAuthenticator` accepts every
//! complete submission and `LogOtpNotifier` records that a code was
//! requested without generating one. A real deployment swaps these for
//! implementations backed by an identity service.

use crate::role::Role;
use tracing::info;

/// What the login form hands to the authenticator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Password { username: String, password: String },
    OneTimeCode { username: String, code: String },
}

impl Credentials {
    pub fn username(&self) -> &str {
        match self {
            Credentials::Password { username, .. } => username,
            Credentials::OneTimeCode { username, .. } => username,
        }
    }

    fn method(&self) -> &'static str {
        match self {
            Credentials::Password { .. } => "password",
            Credentials::OneTimeCode { .. } => "otp",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Success,
    Failure,
}

/// Verifies credentials for a role. Navigation happens only on success.
pub trait Authenticator: Send + Sync {
    fn verify(&self, role: Role, credentials: &Credentials) -> AuthOutcome;
}

/// Fire-and-forget delivery of a one-time code.
pub trait OtpNotifier: Send + Sync {
    fn send_code(&self, role: Role, username: &str);
}

/// Accepts every submission.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAuthenticator;

impl Authenticator for MockAuthenticator {
    fn verify(&self, role: Role, credentials: &Credentials) -> AuthOutcome {
        info!(
            role = %role,
            method = credentials.method(),
            "Mock login accepted without verification"
        );
        AuthOutcome::Success
    }
}

/// Logs the request; no code is generated or delivered.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOtpNotifier;

impl OtpNotifier for LogOtpNotifier {
    fn send_code(&self, role: Role, username: &str) {
        info!(role = %role, has_username = !username.is_empty(), "One-time code requested");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_authenticator_accepts_everything() {
        let auth = MockAuthenticator;
        let password = Credentials::Password {
            username: "9876543210".to_string(),
            password: "x".to_string(),
        };
        let code = Credentials::OneTimeCode {
            username: "ramesh".to_string(),
            code: "000000".to_string(),
        };

        for role in Role::ALL {
            assert_eq!(auth.verify(role, &password), AuthOutcome::Success);
            assert_eq!(auth.verify(role, &code), AuthOutcome::Success);
        }
    }

    #[test]
    fn test_credentials_username() {
        let code = Credentials::OneTimeCode {
            username: "ramesh".to_string(),
            code: "123456".to_string(),
        };
        assert_eq!(code.username(), "ramesh");
        assert_eq!(code.method(), "otp");
    }
}
