//! Portal error type and its mapping onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum PortalError {
    /// A view asked for the language context of a session that was never
    /// mounted. Handlers only run after the session layer mounts one, so
    /// this is a wiring bug rather than a user error.
    #[error("Language context used before the session was initialized")]
    UninitializedContext,

    #[error("Unknown language code: '{0}'")]
    UnknownLanguage(String),

    #[error("Login form is missing required fields")]
    IncompleteForm,
}

pub type PortalResult<T> = Result<T, PortalError>;

impl PortalError {
    pub fn status(&self) -> StatusCode {
        match self {
            PortalError::UninitializedContext => StatusCode::INTERNAL_SERVER_ERROR,
            PortalError::UnknownLanguage(_) => StatusCode::BAD_REQUEST,
            PortalError::IncompleteForm => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }
        (status, self.to_string()).into_response()
    }
}
