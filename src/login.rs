//! Login form state.
//!
//! The form has two mutually exclusive modes. Switching modes clears the
//! secret belonging to the mode being left and keeps the username.

use crate::auth::{AuthOutcome, Authenticator, Credentials, OtpNotifier};
use crate::error::{PortalError, PortalResult};
use crate::i18n::TranslationKey;
use crate::role::Role;
use tracing::info;

/// Maximum length of a one-time code.
pub const OTP_LENGTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMode {
    #[default]
    Password,
    Otp,
}

/// Message shown above the form after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    OtpSent,
    LoginFailed,
}

impl Notice {
    pub fn key(&self) -> TranslationKey {
        match self {
            Notice::OtpSent => TranslationKey::OtpSent,
            Notice::LoginFailed => TranslationKey::LoginFailed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    username: String,
    password: String,
    otp: String,
    mode: LoginMode,
    notice: Option<Notice>,
}

impl LoginForm {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn otp(&self) -> &str {
        &self.otp
    }

    pub fn mode(&self) -> LoginMode {
        self.mode
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Store the code, keeping at most [`OTP_LENGTH`] characters.
    pub fn set_otp(&mut self, otp: &str) {
        self.otp = otp.chars().take(OTP_LENGTH).collect();
    }

    pub fn switch_mode(&mut self, mode: LoginMode) {
        if self.mode == mode {
            return;
        }

        match self.mode {
            LoginMode::Password => self.password.clear(),
            LoginMode::Otp => self.otp.clear(),
        }
        self.mode = mode;
        self.notice = None;
    }

    /// True when every field the active mode needs is non-empty.
    pub fn can_submit(&self) -> bool {
        if self.username.is_empty() {
            return false;
        }

        match self.mode {
            LoginMode::Password => !self.password.is_empty(),
            LoginMode::Otp => !self.otp.is_empty(),
        }
    }

    /// Credentials for the active mode.
    pub fn credentials(&self) -> PortalResult<Credentials> {
        if !self.can_submit() {
            return Err(PortalError::IncompleteForm);
        }

        Ok(match self.mode {
            LoginMode::Password => Credentials::Password {
                username: self.username.clone(),
                password: self.password.clone(),
            },
            LoginMode::Otp => Credentials::OneTimeCode {
                username: self.username.clone(),
                code: self.otp.clone(),
            },
        })
    }

    /// Ask the notifier for a code and move to OTP mode.
    pub fn request_otp(&mut self, role: Role, notifier: &dyn OtpNotifier) {
        notifier.send_code(role, &self.username);
        self.switch_mode(LoginMode::Otp);
        self.notice = Some(Notice::OtpSent);
    }

    /// Submit the form to `authenticator`.
    ///
    /// On success the secrets are cleared; the caller is responsible for
    /// navigating to the dashboard. On failure the form keeps its contents
    /// and carries a [`Notice::LoginFailed`].
    pub fn submit(&mut self, role: Role, authenticator: &dyn Authenticator) -> PortalResult<AuthOutcome> {
        let credentials = self.credentials()?;
        let outcome = authenticator.verify(role, &credentials);

        match outcome {
            AuthOutcome::Success => {
                info!(role = %role, "Login succeeded");
                self.password.clear();
                self.otp.clear();
                self.mode = LoginMode::Password;
                self.notice = None;
            }
            AuthOutcome::Failure => {
                info!(role = %role, "Login rejected");
                self.notice = Some(Notice::LoginFailed);
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MockAuthenticator;
    use std::sync::Mutex;

    struct RejectAll;

    impl Authenticator for RejectAll {
        fn verify(&self, _role: Role, _credentials: &Credentials) -> AuthOutcome {
            AuthOutcome::Failure
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<(Role, String)>>,
    }

    impl OtpNotifier for RecordingNotifier {
        fn send_code(&self, role: Role, username: &str) {
            self.sent.lock().unwrap().push((role, username.to_string()));
        }
    }

    fn filled_form() -> LoginForm {
        let mut form = LoginForm::default();
        form.set_username("9876543210");
        form.set_password("x");
        form
    }

    // ==================== Submit Gating Tests ====================

    #[test]
    fn test_empty_form_cannot_submit() {
        let form = LoginForm::default();
        assert_eq!(form.mode(), LoginMode::Password);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_password_mode_requires_username_and_password() {
        let mut form = LoginForm::default();
        form.set_username("farmer1");
        assert!(!form.can_submit());

        form.set_password("secret");
        assert!(form.can_submit());

        form.set_username("");
        assert!(!form.can_submit());
    }

    #[test]
    fn test_otp_mode_requires_code_not_password() {
        let mut form = filled_form();
        form.switch_mode(LoginMode::Otp);
        assert!(!form.can_submit());

        form.set_otp("123456");
        assert!(form.can_submit());
    }

    #[test]
    fn test_incomplete_submit_is_rejected() {
        let mut form = LoginForm::default();
        form.set_username("farmer1");
        let result = form.submit(Role::Farmer, &MockAuthenticator);
        assert!(matches!(result, Err(PortalError::IncompleteForm)));
    }

    // ==================== Mode Switching Tests ====================

    #[test]
    fn test_mode_round_trip_preserves_username() {
        let mut form = filled_form();

        form.switch_mode(LoginMode::Otp);
        form.set_otp("4242");
        form.switch_mode(LoginMode::Password);

        assert_eq!(form.username(), "9876543210");
        assert_eq!(form.mode(), LoginMode::Password);
    }

    #[test]
    fn test_switching_clears_left_secret() {
        let mut form = filled_form();

        form.switch_mode(LoginMode::Otp);
        assert_eq!(form.password(), "");

        form.set_otp("4242");
        form.switch_mode(LoginMode::Password);
        assert_eq!(form.otp(), "");
    }

    #[test]
    fn test_switch_to_same_mode_keeps_secret() {
        let mut form = filled_form();
        form.switch_mode(LoginMode::Password);
        assert_eq!(form.password(), "x");
    }

    #[test]
    fn test_otp_is_truncated() {
        let mut form = LoginForm::default();
        form.set_otp("12345678");
        assert_eq!(form.otp(), "123456");
    }

    // ==================== OTP Request Tests ====================

    #[test]
    fn test_request_otp_notifies_and_switches() {
        let notifier = RecordingNotifier::default();
        let mut form = filled_form();

        form.request_otp(Role::Farmer, &notifier);

        assert_eq!(form.mode(), LoginMode::Otp);
        assert_eq!(form.notice(), Some(Notice::OtpSent));
        assert_eq!(form.username(), "9876543210");
        assert_eq!(
            *notifier.sent.lock().unwrap(),
            vec![(Role::Farmer, "9876543210".to_string())]
        );
    }

    #[test]
    fn test_switching_back_clears_notice() {
        let mut form = filled_form();
        form.request_otp(Role::Farmer, &RecordingNotifier::default());
        form.switch_mode(LoginMode::Password);
        assert_eq!(form.notice(), None);
    }

    // ==================== Submit Outcome Tests ====================

    #[test]
    fn test_successful_submit_clears_secrets() {
        let mut form = filled_form();
        let outcome = form.submit(Role::Farmer, &MockAuthenticator).unwrap();

        assert_eq!(outcome, AuthOutcome::Success);
        assert_eq!(form.password(), "");
        assert_eq!(form.username(), "9876543210");
        assert_eq!(form.notice(), None);
    }

    #[test]
    fn test_failed_submit_sets_notice() {
        let mut form = filled_form();
        let outcome = form.submit(Role::Admin, &RejectAll).unwrap();

        assert_eq!(outcome, AuthOutcome::Failure);
        assert_eq!(form.notice(), Some(Notice::LoginFailed));
        assert_eq!(form.password(), "x");
    }

    #[test]
    fn test_credentials_match_mode() {
        let mut form = filled_form();
        assert_eq!(
            form.credentials().unwrap(),
            Credentials::Password {
                username: "9876543210".to_string(),
                password: "x".to_string(),
            }
        );

        form.switch_mode(LoginMode::Otp);
        form.set_otp("999999");
        assert_eq!(
            form.credentials().unwrap(),
            Credentials::OneTimeCode {
                username: "9876543210".to_string(),
                code: "999999".to_string(),
            }
        );
    }
}
