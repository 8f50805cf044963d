//! Session store: who is signed in, mirrored to durable storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`SessionStore`] exists per process. Views read the current session
//! through its accessors and change it only through `login`, `signup`, and
//! `logout`. The store is the sole writer of the durable record.
//!
//! STATE MACHINE
//! =============
//! `Uninitialized -> Restoring -> {Anonymous | Authenticated}`, then
//! `Anonymous <-> Authenticated` via login/signup and logout for the rest of
//! the process lifetime. A failed authenticated request never logs out on its
//! own; that call belongs to the view.
//!
//! TRADE-OFFS
//! ==========
//! State lives in a `RefCell` because the portal is single-threaded and every
//! borrow ends before the next `.await`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::AUTH_STORAGE_KEY;
use crate::error::ApiError;
use crate::http::{RequestHelper, RequestOptions, Requester, Transport, decode};
use crate::storage::KeyValueStore;
use crate::types::{AuthResponse, LoginRequest, SignupForm, UserSummary};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const SIGNUP_PATH: &str = "/api/auth/signup";

/// An authenticated identity. Token and user are always present together.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: UserSummary,
}

/// Startup progress of the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Uninitialized,
    Restoring,
    /// Restore finished (or an auth action already ran).
    Ready,
}

/// Observable state of the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Uninitialized,
    Restoring,
    Anonymous,
    Authenticated,
}

#[derive(Debug, Default)]
struct SessionState {
    phase: SessionPhase,
    current: Option<AuthSession>,
}

pub struct SessionStore<T, S> {
    http: RequestHelper<T>,
    storage: S,
    state: RefCell<SessionState>,
}

impl<T: Transport, S: KeyValueStore> SessionStore<T, S> {
    pub fn new(http: RequestHelper<T>, storage: S) -> Self {
        Self { http, storage, state: RefCell::new(SessionState::default()) }
    }

    /// The plain (unauthenticated) request helper.
    pub fn http(&self) -> &RequestHelper<T> {
        &self.http
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.borrow().phase
    }

    pub fn status(&self) -> AuthStatus {
        let state = self.state.borrow();
        match (state.phase, state.current.is_some()) {
            (_, true) => AuthStatus::Authenticated,
            (SessionPhase::Uninitialized, false) => AuthStatus::Uninitialized,
            (SessionPhase::Restoring, false) => AuthStatus::Restoring,
            (SessionPhase::Ready, false) => AuthStatus::Anonymous,
        }
    }

    /// True until `restore` (or an auth action) has completed.
    pub fn is_loading(&self) -> bool {
        self.phase() != SessionPhase::Ready
    }

    pub fn session(&self) -> Option<AuthSession> {
        self.state.borrow().current.clone()
    }

    pub fn user(&self) -> Option<UserSummary> {
        self.state.borrow().current.as_ref().map(|s| s.user.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().current.as_ref().map(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().current.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.state
            .borrow()
            .current
            .as_ref()
            .is_some_and(|s| s.user.is_admin())
    }

    /// Load the durable record into memory.
    ///
    /// A missing record leaves the session anonymous. A record that does not
    /// decode is logged, purged, and treated as missing. Always ends in
    /// [`SessionPhase::Ready`].
    pub fn restore(&self) -> AuthStatus {
        self.state.borrow_mut().phase = SessionPhase::Restoring;

        let restored = self.storage.get(AUTH_STORAGE_KEY).and_then(|raw| match decode_record(&raw) {
            Ok(session) => Some(session),
            Err(reason) => {
                log::warn!("discarding malformed session record: {reason}");
                self.storage.remove(AUTH_STORAGE_KEY);
                None
            }
        });
        if let Some(session) = &restored {
            log::debug!("restored session for user {}", session.user.id);
        }

        {
            let mut state = self.state.borrow_mut();
            state.current = restored;
            state.phase = SessionPhase::Ready;
        }
        self.status()
    }

    /// Authenticate with email and password.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged (e.g. a 401 carrying
    /// `{"message": "Invalid credentials"}`), or [`ApiError::Decode`] when the
    /// success body lacks a token or user. The session is untouched on error.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserSummary, ApiError> {
        let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let response: AuthResponse = self
            .http
            .request_as(LOGIN_PATH, RequestOptions::post_json(&body)?)
            .await?;
        self.accept(response)
    }

    /// Register a new member and sign them in.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::login`].
    pub async fn signup(&self, form: &SignupForm) -> Result<UserSummary, ApiError> {
        let response: AuthResponse = self
            .http
            .request_as(SIGNUP_PATH, RequestOptions::post_json(&form.to_request())?)
            .await?;
        self.accept(response)
    }

    fn accept(&self, response: AuthResponse) -> Result<UserSummary, ApiError> {
        if response.token.trim().is_empty() {
            return Err(ApiError::Decode("auth response carried an empty token".to_owned()));
        }
        let user = response.user.clone();
        self.save_auth(response.token, response.user);
        Ok(user)
    }

    /// Replace the session with `token` + `user` in memory and on disk.
    ///
    /// A storage failure is logged; the in-memory session is still set.
    pub fn save_auth(&self, token: String, user: UserSummary) {
        let session = AuthSession { token, user };
        match serde_json::to_string(&session) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(AUTH_STORAGE_KEY, &raw) {
                    log::warn!("session not persisted: {e}");
                }
            }
            Err(e) => log::warn!("session not persisted: {e}"),
        }
        log::info!("signed in as user {}", session.user.id);

        let mut state = self.state.borrow_mut();
        state.current = Some(session);
        state.phase = SessionPhase::Ready;
    }

    /// Forget the session in memory and on disk. Idempotent.
    pub fn logout(&self) {
        self.storage.remove(AUTH_STORAGE_KEY);
        let mut state = self.state.borrow_mut();
        if state.current.take().is_some() {
            log::info!("signed out");
        }
        state.phase = SessionPhase::Ready;
    }

    /// Issue a request carrying `Authorization: Bearer <token>`.
    ///
    /// Caller headers are preserved; an `Authorization` override is replaced
    /// by the session token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] without touching the network
    /// when no session exists; otherwise whatever the request helper returns.
    pub async fn auth_fetch(&self, path: &str, opts: RequestOptions) -> Result<Value, ApiError> {
        let Some(token) = self.token() else {
            return Err(ApiError::NotAuthenticated);
        };
        let opts = opts.with_header("Authorization", format!("Bearer {token}"));
        self.http.request(path, opts).await
    }

    /// [`Self::auth_fetch`] decoded into `R`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::auth_fetch`], plus [`ApiError::Decode`].
    pub async fn auth_fetch_as<R: DeserializeOwned>(&self, path: &str, opts: RequestOptions) -> Result<R, ApiError> {
        decode(self.auth_fetch(path, opts).await?)
    }

    /// Authenticated view of this store for the typed endpoint calls.
    pub fn authed(&self) -> Authenticated<'_, T, S> {
        Authenticated { store: self }
    }
}

/// Request wrapper that attaches the session's bearer token.
pub struct Authenticated<'a, T, S> {
    store: &'a SessionStore<T, S>,
}

impl<T: Transport, S: KeyValueStore> Requester for Authenticated<'_, T, S> {
    async fn fetch(&self, path: &str, opts: RequestOptions) -> Result<Value, ApiError> {
        self.store.auth_fetch(path, opts).await
    }
}

fn decode_record(raw: &str) -> Result<AuthSession, String> {
    let session: AuthSession = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    if session.token.trim().is_empty() {
        return Err("empty token".to_owned());
    }
    Ok(session)
}
