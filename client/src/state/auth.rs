//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The [`SessionStore`] is the source of truth; it is not `Send`, so it lives
//! in a local `StoredValue`. Route guards and user-aware components read the
//! reactive [`AuthState`] mirror, which every mutating call re-syncs.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::rc::Rc;

use leptos::prelude::*;
use session::{ApiError, KeyValueStore, RequestHelper, SessionStore, SignupForm, Transport, UserSummary};

use crate::net::transport::BrowserTransport;
use crate::util::config::api_config;
use crate::util::storage::BrowserStorage;

pub type BrowserSession = SessionStore<BrowserTransport, BrowserStorage>;

/// Reactive snapshot of the session store.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<UserSummary>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    pub fn snapshot<T: Transport, S: KeyValueStore>(store: &SessionStore<T, S>) -> Self {
        Self { user: store.user(), loading: store.is_loading() }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(UserSummary::is_admin)
    }
}

/// Copyable handle provided through context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: StoredValue<Rc<BrowserSession>, LocalStorage>,
    pub state: RwSignal<AuthState>,
}

impl SessionContext {
    pub fn new(store: BrowserSession) -> Self {
        let state = RwSignal::new(AuthState::snapshot(&store));
        Self { store: StoredValue::new_local(Rc::new(store)), state }
    }

    /// Store wired to the browser transport and `localStorage`.
    pub fn browser() -> Self {
        Self::new(SessionStore::new(RequestHelper::new(&api_config(), BrowserTransport), BrowserStorage))
    }

    pub fn store(&self) -> Rc<BrowserSession> {
        self.store.get_value()
    }

    pub fn base_url(&self) -> String {
        self.store.with_value(|s| s.http().base_url().to_owned())
    }

    fn sync(&self) {
        let snapshot = self.store.with_value(|s| AuthState::snapshot(s.as_ref()));
        self.state.set(snapshot);
    }

    pub fn restore(&self) {
        let status = self.store.with_value(|s| s.restore());
        log::debug!("session restored: {status:?}");
        self.sync();
    }

    pub async fn login(self, email: &str, password: &str) -> Result<UserSummary, ApiError> {
        let store = self.store();
        let result = store.login(email, password).await;
        self.sync();
        result
    }

    pub async fn signup(self, form: &SignupForm) -> Result<UserSummary, ApiError> {
        let store = self.store();
        let result = store.signup(form).await;
        self.sync();
        result
    }

    pub fn logout(&self) {
        self.store.with_value(|s| s.logout());
        self.sync();
    }
}
