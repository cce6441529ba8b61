//! In-memory session store.
//!
//! Each browser session owns one [`LanguageContext`] plus the login form
//! state for every role it has visited. Sessions are keyed by a random id
//! carried in a cookie and evicted least-recently-seen first once the store
//! reaches its capacity.
//!
//! A handler that panics while holding the store lock poisons it; later
//! requests take the guard anyway so the rest of the portal keeps serving.

use crate::context::LanguageContext;
use crate::error::{PortalError, PortalResult};
use crate::login::LoginForm;
use crate::role::Role;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a cookie value. Anything that isn't a UUID is treated as absent.
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value.trim()).ok().map(Self)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    context: LanguageContext,
    login_forms: HashMap<Role, LoginForm>,
    last_seen: DateTime<Utc>,
}

impl Session {
    fn new(id: SessionId) -> Self {
        Self {
            id,
            context: LanguageContext::new(),
            login_forms: HashMap::new(),
            last_seen: Utc::now(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn context(&self) -> &LanguageContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut LanguageContext {
        &mut self.context
    }

    /// Login form for `role`, blank if the session hasn't touched it yet.
    pub fn login_form(&self, role: Role) -> LoginForm {
        self.login_forms.get(&role).cloned().unwrap_or_default()
    }

    /// Split borrow of the language context and a role's login form, for
    /// handlers that update the form and then render with the context.
    pub fn login_parts(&mut self, role: Role) -> (&LanguageContext, &mut LoginForm) {
        let form = self.login_forms.entry(role).or_default();
        (&self.context, form)
    }

    pub fn last_seen(&self) -> DateTime<Utc> {
        self.last_seen
    }

    fn touch(&mut self) {
        self.last_seen = Utc::now();
    }
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<SessionId, Session>>>,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            max_sessions: max_sessions.max(1),
        }
    }

    /// Create a fresh session and return its id.
    pub fn mount(&self) -> SessionId {
        let id = SessionId::new();
        let mut sessions = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        if sessions.len() >= self.max_sessions {
            Self::evict_oldest(&mut sessions);
        }

        sessions.insert(id, Session::new(id));
        debug!(session = %id, total = sessions.len(), "Session mounted");
        id
    }

    /// Touch the session for `id`, mounting a new one when `id` is absent or
    /// unknown. The flag is true when a session was created.
    pub fn ensure(&self, id: Option<SessionId>) -> (SessionId, bool) {
        if let Some(id) = id {
            let mut sessions = self.inner.write().unwrap_or_else(PoisonError::into_inner);
            if let Some(session) = sessions.get_mut(&id) {
                session.touch();
                return (id, false);
            }
            debug!(session = %id, "Unknown session id, mounting a new session");
        }

        (self.mount(), true)
    }

    /// Run `f` against a mounted session.
    ///
    /// Returns [`PortalError::UninitializedContext`] when no session with
    /// this id was ever mounted or it has since been evicted.
    pub fn with_session<R>(&self, id: SessionId, f: impl FnOnce(&Session) -> R) -> PortalResult<R> {
        let sessions = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let session = sessions.get(&id).ok_or(PortalError::UninitializedContext)?;
        Ok(f(session))
    }

    pub fn with_session_mut<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut Session) -> R,
    ) -> PortalResult<R> {
        let mut sessions = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let session = sessions
            .get_mut(&id)
            .ok_or(PortalError::UninitializedContext)?;
        Ok(f(session))
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn evict_oldest(sessions: &mut HashMap<SessionId, Session>) {
        let oldest = sessions
            .values()
            .min_by_key(|session| session.last_seen())
            .map(Session::id);

        if let Some(id) = oldest {
            sessions.remove(&id);
            info!(session = %id, "Session store full, evicted least recently seen session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, TranslationKey};
    use std::thread::sleep;
    use std::time::Duration;

    // ==================== Session Id Tests ====================

    #[test]
    fn test_session_id_parse() {
        let id = SessionId::new();
        assert_eq!(SessionId::parse(&id.to_string()), Some(id));
        assert_eq!(SessionId::parse("not-a-uuid"), None);
        assert_eq!(SessionId::parse(""), None);
    }

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
    }

    // ==================== Store Tests ====================

    #[test]
    fn test_unmounted_session_is_uninitialized() {
        let store = SessionStore::new(10);
        let result = store.with_session(SessionId::new(), |s| s.context().language());
        assert!(matches!(result, Err(PortalError::UninitializedContext)));

        let result = store.with_session_mut(SessionId::new(), |_| ());
        assert!(matches!(result, Err(PortalError::UninitializedContext)));
    }

    #[test]
    fn test_new_session_starts_in_english() {
        let store = SessionStore::new(10);
        let id = store.mount();
        let language = store.with_session(id, |s| s.context().language()).unwrap();
        assert_eq!(language, Language::ENGLISH);
    }

    #[test]
    fn test_ensure_reuses_known_session() {
        let store = SessionStore::new(10);
        let (id, created) = store.ensure(None);
        assert!(created);

        let (again, created) = store.ensure(Some(id));
        assert_eq!(again, id);
        assert!(!created);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ensure_replaces_unknown_session() {
        let store = SessionStore::new(10);
        let stale = SessionId::new();
        let (id, created) = store.ensure(Some(stale));

        assert!(created);
        assert_ne!(id, stale);
    }

    #[test]
    fn test_language_persists_across_calls() {
        let store = SessionStore::new(10);
        let id = store.mount();

        store
            .with_session_mut(id, |s| s.context_mut().set_language(Language::HINDI))
            .unwrap();

        let title = store
            .with_session(id, |s| s.context().t(TranslationKey::Logout))
            .unwrap();
        assert_eq!(title, "लॉगआउट");
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = SessionStore::new(10);
        let a = store.mount();
        let b = store.mount();

        store
            .with_session_mut(a, |s| s.context_mut().set_language(Language::TAMIL))
            .unwrap();

        let language_b = store.with_session(b, |s| s.context().language()).unwrap();
        assert_eq!(language_b, Language::ENGLISH);
    }

    #[test]
    fn test_login_form_state_is_per_role() {
        let store = SessionStore::new(10);
        let id = store.mount();

        store
            .with_session_mut(id, |s| {
                let (_, form) = s.login_parts(Role::Farmer);
                form.set_username("ramesh");
            })
            .unwrap();

        let (farmer, admin) = store
            .with_session(id, |s| (s.login_form(Role::Farmer), s.login_form(Role::Admin)))
            .unwrap();
        assert_eq!(farmer.username(), "ramesh");
        assert_eq!(admin.username(), "");
    }

    #[test]
    fn test_store_survives_panicking_handler() {
        let store = SessionStore::new(10);
        let id = store.mount();

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = store.with_session_mut(id, |_| -> () { panic!("render failed") });
        }));
        assert!(outcome.is_err());

        let (again, created) = store.ensure(Some(id));
        assert_eq!(again, id);
        assert!(!created);
        assert!(store.with_session(id, |s| s.context().language()).is_ok());
        assert_eq!(store.len(), 1);
    }

    // ==================== Eviction Tests ====================

    #[test]
    fn test_evicts_least_recently_seen() {
        let store = SessionStore::new(2);
        let first = store.mount();
        sleep(Duration::from_millis(5));
        let second = store.mount();
        sleep(Duration::from_millis(5));

        // Touch the first session so the second becomes the oldest.
        store.ensure(Some(first));
        sleep(Duration::from_millis(5));
        let third = store.mount();

        assert_eq!(store.len(), 2);
        assert!(store.with_session(first, |_| ()).is_ok());
        assert!(store.with_session(third, |_| ()).is_ok());
        assert!(matches!(
            store.with_session(second, |_| ()),
            Err(PortalError::UninitializedContext)
        ));
    }

    #[test]
    fn test_zero_capacity_still_holds_one() {
        let store = SessionStore::new(0);
        let id = store.mount();
        assert_eq!(store.len(), 1);
        assert!(store.with_session(id, |_| ()).is_ok());
    }
}
