use super::*;
use serde_json::json;
use session::{ApiConfig, MemoryStore};

fn store() -> SessionStore<BrowserTransport, MemoryStore> {
    SessionStore::new(RequestHelper::new(&ApiConfig::default(), BrowserTransport), MemoryStore::new())
}

fn user(role: &str) -> UserSummary {
    serde_json::from_value(json!({ "id": 7, "role": role, "firstName": "Sam" })).unwrap()
}

#[test]
fn default_state_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn snapshot_before_restore_is_loading_and_anonymous() {
    let state = AuthState::snapshot(&store());
    assert_eq!(state, AuthState { user: None, loading: true });
}

#[test]
fn snapshot_after_restore_without_record_is_anonymous() {
    let store = store();
    store.restore();
    let state = AuthState::snapshot(&store);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
    assert!(!state.is_admin());
}

#[test]
fn snapshot_tracks_saved_session_and_role() {
    let store = store();
    store.save_auth("tok".to_owned(), user("admin"));
    let state = AuthState::snapshot(&store);
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert!(state.is_admin());

    store.save_auth("tok".to_owned(), user("member"));
    assert!(!AuthState::snapshot(&store).is_admin());

    store.logout();
    assert!(!AuthState::snapshot(&store).is_authenticated());
}
