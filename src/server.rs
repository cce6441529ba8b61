//! HTTP surface.
//!
//! Page routes sit behind a session layer that mounts (or touches) the
//! caller's session and exposes its [`SessionId`] as a request extension.
//! Each handler applies one user event and renders while holding that
//! session's lock.

use crate::auth::{AuthOutcome, Authenticator, LogOtpNotifier, MockAuthenticator, OtpNotifier};
use crate::config::Config;
use crate::dashboard::{DashboardConfig, MetricsSource, StaticMetrics};
use crate::error::{PortalError, PortalResult};
use crate::i18n::{Language, MetricsReport, TranslationMetrics};
use crate::login::LoginMode;
use crate::role::Role;
use crate::session::{SessionId, SessionStore};
use crate::views;
use anyhow::{Context, Result};
use axum::{
    extract::{Path, Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Extension, Form, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    pub authenticator: Arc<dyn Authenticator>,
    pub otp_notifier: Arc<dyn OtpNotifier>,
    pub metrics_source: Arc<dyn MetricsSource>,
}

impl AppState {
    /// State wired with the built-in mock collaborators.
    pub fn new(config: Config) -> Self {
        let sessions = SessionStore::new(config.max_sessions);
        Self {
            config,
            sessions,
            authenticator: Arc::new(MockAuthenticator),
            otp_notifier: Arc::new(LogOtpNotifier),
            metrics_source: Arc::new(StaticMetrics),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let pages = Router::new()
        .route("/", get(landing))
        .route("/language", post(change_language))
        .route("/login/:role", get(login_page).post(login_action))
        .route("/dashboard/:role", get(dashboard))
        .route("/logout", get(logout))
        .route_layer(middleware::from_fn_with_state(state.clone(), session_layer));

    Router::new()
        .merge(pages)
        .route("/health", get(health_check))
        .route("/metrics/i18n", get(i18n_metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: Config) -> Result<()> {
    let address = config.bind_address();
    let app = router(Arc::new(AppState::new(config)));

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("{}", TranslationMetrics::global().report().format());
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}

// ==================== Session Layer ====================

async fn session_layer(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let cookie_name = &state.config.session_cookie;
    let presented = session_cookie(request.headers(), cookie_name);
    let (id, created) = state.sessions.ensure(presented);
    request.extensions_mut().insert(id);

    let mut response = next.run(request).await;

    if created {
        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", cookie_name, id);
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => warn!("Could not encode session cookie: {}", e),
        }
    }

    response
}

/// Session id from the `Cookie` header(s), if present and well formed.
fn session_cookie(headers: &HeaderMap, name: &str) -> Option<SessionId> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| SessionId::parse(value))
}

/// Local redirect target, or `/` for anything that could leave the site.
fn safe_redirect(target: Option<&str>) -> &str {
    match target {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path
        }
        _ => "/",
    }
}

// ==================== Page Handlers ====================

async fn landing(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionId>,
) -> PortalResult<Html<String>> {
    state
        .sessions
        .with_session(session, |s| Html(views::landing::render(s.context())))
}

#[derive(Debug, Deserialize)]
struct LanguageForm {
    lang: String,
    redirect: Option<String>,
}

async fn change_language(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<LanguageForm>,
) -> PortalResult<Redirect> {
    let language = Language::from_code(&form.lang)
        .map_err(|_| PortalError::UnknownLanguage(form.lang.clone()))?;

    state
        .sessions
        .with_session_mut(session, |s| s.context_mut().set_language(language))?;

    Ok(Redirect::to(safe_redirect(form.redirect.as_deref())))
}

async fn login_page(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionId>,
    Path(segment): Path<String>,
) -> PortalResult<Html<String>> {
    let role = Role::resolve(&segment);

    state.sessions.with_session(session, |s| {
        Html(views::login::render(role, s.context(), &s.login_form(role)))
    })
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum LoginAction {
    Submit,
    RequestOtp,
    UsePassword,
}

#[derive(Debug, Deserialize)]
struct LoginInput {
    action: LoginAction,
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    otp: String,
}

async fn login_action(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionId>,
    Path(segment): Path<String>,
    Form(input): Form<LoginInput>,
) -> PortalResult<Response> {
    let role = Role::resolve(&segment);

    state.sessions.with_session_mut(session, |s| {
        let (context, form) = s.login_parts(role);
        form.set_username(input.username);

        match input.action {
            LoginAction::RequestOtp if role.offers_otp() => {
                form.request_otp(role, state.otp_notifier.as_ref());
            }
            LoginAction::RequestOtp => {
                debug!(role = %role, "One-time code login not offered for role");
            }
            LoginAction::UsePassword => form.switch_mode(LoginMode::Password),
            LoginAction::Submit => {
                match form.mode() {
                    LoginMode::Password => form.set_password(input.password),
                    LoginMode::Otp => form.set_otp(&input.otp),
                }

                match form.submit(role, state.authenticator.as_ref()) {
                    Ok(AuthOutcome::Success) => {
                        let target = format!("/dashboard/{}", role.segment());
                        return Redirect::to(&target).into_response();
                    }
                    Ok(AuthOutcome::Failure) => {
                        let page = views::login::render(role, context, form);
                        return (StatusCode::UNAUTHORIZED, Html(page)).into_response();
                    }
                    Err(e) => {
                        warn!(role = %role, "{}", e);
                        let page = views::login::render(role, context, form);
                        return (e.status(), Html(page)).into_response();
                    }
                }
            }
        }

        Html(views::login::render(role, context, form)).into_response()
    })
}

async fn dashboard(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionId>,
    Path(segment): Path<String>,
) -> PortalResult<Html<String>> {
    let role = Role::resolve(&segment);

    state.sessions.with_session(session, |s| {
        let config = DashboardConfig::build(role, s.context(), state.metrics_source.as_ref());
        Html(views::dashboard::render(&config, s.context()))
    })
}

async fn logout(Extension(session): Extension<SessionId>) -> Redirect {
    info!(session = %session, "Logged out");
    Redirect::to("/")
}

// ==================== Service Endpoints ====================

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "farm-portal"
    }))
}

async fn i18n_metrics() -> Json<MetricsReport> {
    Json(TranslationMetrics::global().report())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Redirect Tests ====================

    #[test]
    fn test_safe_redirect_accepts_local_paths() {
        assert_eq!(safe_redirect(Some("/")), "/");
        assert_eq!(safe_redirect(Some("/login/farmer")), "/login/farmer");
        assert_eq!(safe_redirect(Some("/dashboard/admin")), "/dashboard/admin");
    }

    #[test]
    fn test_safe_redirect_rejects_external_targets() {
        assert_eq!(safe_redirect(None), "/");
        assert_eq!(safe_redirect(Some("")), "/");
        assert_eq!(safe_redirect(Some("https://evil.example")), "/");
        assert_eq!(safe_redirect(Some("//evil.example")), "/");
        assert_eq!(safe_redirect(Some("/\\evil.example")), "/");
    }

    // ==================== Cookie Tests ====================

    #[test]
    fn test_session_cookie_found_among_others() {
        let id = SessionId::new();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; farm_portal_session={}; x=1", id)).unwrap(),
        );

        assert_eq!(session_cookie(&headers, "farm_portal_session"), Some(id));
        assert_eq!(session_cookie(&headers, "other"), None);
    }

    #[test]
    fn test_malformed_session_cookie_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("farm_portal_session=garbage"),
        );
        assert_eq!(session_cookie(&headers, "farm_portal_session"), None);
        assert_eq!(session_cookie(&HeaderMap::new(), "farm_portal_session"), None);
    }
}
