use super::*;
use crate::config::ApiConfig;
use crate::http::Method;
use crate::storage::MemoryStore;
use crate::test_support::ScriptedTransport;
use crate::types::{RecordId, Role};
use futures::executor::block_on;
use serde_json::json;

type TestStore = SessionStore<ScriptedTransport, MemoryStore>;

fn store_with(transport: ScriptedTransport, storage: MemoryStore) -> TestStore {
    SessionStore::new(RequestHelper::new(&ApiConfig::new("http://api.test"), transport), storage)
}

fn empty_store() -> TestStore {
    store_with(ScriptedTransport::new(), MemoryStore::new())
}

fn sample_user(id: i64, role: &str) -> UserSummary {
    serde_json::from_value(json!({ "id": id, "role": role, "firstName": "Test" })).unwrap()
}

fn stored_session(store: &TestStore) -> Option<AuthSession> {
    store
        .storage()
        .get(AUTH_STORAGE_KEY)
        .map(|raw| serde_json::from_str(&raw).expect("durable record decodes"))
}

// =============================================================
// restore
// =============================================================

#[test]
fn new_store_is_uninitialized_and_loading() {
    let store = empty_store();
    assert_eq!(store.status(), AuthStatus::Uninitialized);
    assert!(store.is_loading());
}

#[test]
fn restore_without_record_is_anonymous() {
    let store = empty_store();
    assert_eq!(store.restore(), AuthStatus::Anonymous);
    assert!(!store.is_loading());
    assert_eq!(store.session(), None);
}

#[test]
fn restore_with_valid_record_populates_session() {
    let raw = r#"{"token":"abc","user":{"id":1,"role":"member"}}"#;
    let store = store_with(ScriptedTransport::new(), MemoryStore::with_entry(AUTH_STORAGE_KEY, raw));

    assert_eq!(store.restore(), AuthStatus::Authenticated);
    let session = store.session().expect("session restored");
    assert_eq!(session.token, "abc");
    assert_eq!(session.user.id, RecordId::Number(1));
    assert_eq!(session.user.role, Role::Member);
    assert_eq!(stored_session(&store), Some(session));
}

#[test]
fn restore_with_non_json_record_purges_it() {
    let store = store_with(ScriptedTransport::new(), MemoryStore::with_entry(AUTH_STORAGE_KEY, "not json"));
    assert_eq!(store.restore(), AuthStatus::Anonymous);
    assert_eq!(store.storage().get(AUTH_STORAGE_KEY), None);
}

#[test]
fn restore_with_wrong_shape_purges_it() {
    for raw in [
        r#"{"token":"abc"}"#,
        r#"{"user":{"id":1,"role":"member"}}"#,
        r#"{"token":"","user":{"id":1,"role":"member"}}"#,
        r#"{"token":null,"user":null}"#,
        r#"["abc"]"#,
        "null",
    ] {
        let store = store_with(ScriptedTransport::new(), MemoryStore::with_entry(AUTH_STORAGE_KEY, raw));
        assert_eq!(store.restore(), AuthStatus::Anonymous, "record {raw}");
        assert!(store.storage().is_empty(), "record {raw} should be purged");
    }
}

#[test]
fn restore_leaves_unrelated_keys_alone() {
    let storage = MemoryStore::with_entry("theme", "dark");
    storage.set(AUTH_STORAGE_KEY, "{broken").unwrap();
    let store = store_with(ScriptedTransport::new(), storage);
    store.restore();
    assert_eq!(store.storage().get("theme").as_deref(), Some("dark"));
}

// =============================================================
// login / signup
// =============================================================

#[test]
fn login_success_authenticates_and_persists() {
    let transport = ScriptedTransport::new().respond(200, json!({
        "token": "xyz",
        "user": { "id": 2, "role": "admin" }
    }));
    let store = store_with(transport, MemoryStore::new());
    store.restore();

    let user = block_on(store.login("a@b.com", "secret")).unwrap();
    assert!(user.is_admin());
    assert_eq!(store.status(), AuthStatus::Authenticated);
    assert!(store.is_admin());
    assert_eq!(store.token().as_deref(), Some("xyz"));
    assert_eq!(stored_session(&store), store.session());

    let sent = store.http().transport().last_request();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.url, "http://api.test/api/auth/login");
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "email": "a@b.com", "password": "secret" }));
    assert_eq!(sent.header("Authorization"), None);
}

#[test]
fn login_accepts_user_without_role() {
    let transport = ScriptedTransport::new().respond(200, json!({ "token": "xyz", "user": { "id": 4 } }));
    let store = store_with(transport, MemoryStore::new());
    store.restore();

    let user = block_on(store.login("a@b.com", "secret")).unwrap();
    assert_eq!(user.role, Role::Member);
    assert_eq!(store.status(), AuthStatus::Authenticated);
    assert!(!store.is_admin());
}

#[test]
fn login_failure_surfaces_payload_and_keeps_session() {
    let transport = ScriptedTransport::new().respond(401, json!({ "message": "Invalid credentials" }));
    let store = store_with(transport, MemoryStore::new());
    store.restore();

    let err = block_on(store.login("a@b.com", "wrong")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(err.payload(), json!({ "message": "Invalid credentials" }));
    assert_eq!(store.status(), AuthStatus::Anonymous);
    assert!(store.storage().is_empty());
}

#[test]
fn failed_login_does_not_replace_existing_session() {
    let transport = ScriptedTransport::new().respond(401, json!({ "message": "Invalid credentials" }));
    let store = store_with(transport, MemoryStore::new());
    store.save_auth("old".to_owned(), sample_user(1, "member"));

    assert!(block_on(store.login("a@b.com", "wrong")).is_err());
    assert_eq!(store.token().as_deref(), Some("old"));
    assert_eq!(stored_session(&store).map(|s| s.token).as_deref(), Some("old"));
}

#[test]
fn login_with_incomplete_success_body_is_rejected_without_partial_state() {
    for body in [
        json!({ "token": "xyz" }),
        json!({ "user": { "id": 2, "role": "member" } }),
        json!({ "token": "", "user": { "id": 2, "role": "member" } }),
        json!({}),
    ] {
        let store = store_with(ScriptedTransport::new().respond(200, body.clone()), MemoryStore::new());
        store.restore();
        let err = block_on(store.login("a@b.com", "secret")).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)), "body {body}");
        assert_eq!(store.session(), None);
        assert_eq!(store.token(), None);
        assert_eq!(store.user(), None);
        assert!(store.storage().is_empty());
    }
}

#[test]
fn login_transport_failure_keeps_session_anonymous() {
    let store = store_with(ScriptedTransport::new().fail("offline"), MemoryStore::new());
    store.restore();
    let err = block_on(store.login("a@b.com", "secret")).unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert!(!store.is_authenticated());
}

#[test]
fn signup_sends_normalized_fields_and_saves_auth() {
    let transport = ScriptedTransport::new().respond(201, json!({
        "token": "new-token",
        "user": { "id": "u-3", "role": "member", "firstName": "Bat" }
    }));
    let store = store_with(transport, MemoryStore::new());
    store.restore();

    let form = SignupForm {
        email: None,
        edu_email: Some("  bat@school.edu ".to_owned()),
        personal_email: "bat@mail.com".to_owned(),
        password: "pw123456".to_owned(),
        first_name: "Bat".to_owned(),
        last_name: "Erdene".to_owned(),
    };
    let user = block_on(store.signup(&form)).unwrap();
    assert_eq!(user.id, RecordId::Text("u-3".to_owned()));
    assert_eq!(store.token().as_deref(), Some("new-token"));

    let sent = store.http().transport().last_request();
    assert_eq!(sent.url, "http://api.test/api/auth/signup");
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["email"], json!("bat@school.edu"));
    assert_eq!(body["personalEmail"], json!("bat@mail.com"));
    assert_eq!(body["firstName"], json!("Bat"));
}

#[test]
fn signup_validation_errors_are_surfaced() {
    let transport = ScriptedTransport::new().respond(400, json!({
        "errors": [{ "msg": "Email already registered" }]
    }));
    let store = store_with(transport, MemoryStore::new());
    let err = block_on(store.signup(&SignupForm::default())).unwrap_err();
    assert_eq!(err.user_message("Registration failed"), "Email already registered");
    assert!(!store.is_authenticated());
}

// =============================================================
// save_auth / logout
// =============================================================

#[test]
fn save_auth_round_trips_through_durable_record() {
    let store = empty_store();
    let user: UserSummary = serde_json::from_value(json!({
        "id": 9, "role": "member", "firstName": "Ana", "phone": "555-0100", "tags": ["a", "b"]
    }))
    .unwrap();
    store.save_auth("tok".to_owned(), user.clone());

    assert_eq!(stored_session(&store), Some(AuthSession { token: "tok".to_owned(), user }));
    assert_eq!(store.status(), AuthStatus::Authenticated);
}

#[test]
fn logout_clears_memory_and_storage() {
    let store = empty_store();
    store.save_auth("xyz".to_owned(), sample_user(2, "admin"));

    store.logout();
    assert_eq!(store.status(), AuthStatus::Anonymous);
    assert_eq!(store.storage().get(AUTH_STORAGE_KEY), None);

    store.logout();
    assert_eq!(store.status(), AuthStatus::Anonymous);
}

#[test]
fn logout_before_restore_still_purges_record() {
    let raw = r#"{"token":"abc","user":{"id":1,"role":"member"}}"#;
    let store = store_with(ScriptedTransport::new(), MemoryStore::with_entry(AUTH_STORAGE_KEY, raw));
    store.logout();
    assert_eq!(store.restore(), AuthStatus::Anonymous);
}

// =============================================================
// auth_fetch
// =============================================================

#[test]
fn auth_fetch_while_anonymous_rejects_locally() {
    let store = store_with(ScriptedTransport::new().respond(200, json!({})), MemoryStore::new());
    store.restore();

    for (path, opts) in [
        ("/api/profile", RequestOptions::get()),
        ("/api/blogs", RequestOptions::post_json(&json!({ "title": "x" })).unwrap()),
        ("/api/blogs/1", RequestOptions::delete().with_header("X-Extra", "1")),
    ] {
        let err = block_on(store.auth_fetch(path, opts)).unwrap_err();
        assert_eq!(err, ApiError::NotAuthenticated);
        assert_eq!(err.to_string(), "Not authenticated");
    }
    assert_eq!(store.http().transport().request_count(), 0);
}

#[test]
fn auth_fetch_after_logout_rejects_locally() {
    let store = store_with(ScriptedTransport::new().respond(200, json!({})), MemoryStore::new());
    store.save_auth("xyz".to_owned(), sample_user(2, "admin"));
    store.logout();

    let err = block_on(store.auth_fetch("/api/profile", RequestOptions::get())).unwrap_err();
    assert_eq!(err, ApiError::NotAuthenticated);
    assert_eq!(store.http().transport().request_count(), 0);
    assert_eq!(store.storage().get(AUTH_STORAGE_KEY), None);
}

#[test]
fn auth_fetch_adds_bearer_and_keeps_caller_headers() {
    let transport = ScriptedTransport::new().respond(200, json!({ "profile": { "id": 1 } }));
    let store = store_with(transport, MemoryStore::new());
    store.save_auth("xyz".to_owned(), sample_user(1, "member"));

    let opts = RequestOptions::get()
        .with_header("X-Request-Id", "r-1")
        .with_header("authorization", "Bearer forged");
    let body = block_on(store.auth_fetch("/api/profile", opts)).unwrap();
    assert_eq!(body, json!({ "profile": { "id": 1 } }));

    let sent = store.http().transport().last_request();
    assert_eq!(sent.header("Authorization"), Some("Bearer xyz"));
    assert_eq!(sent.header("X-Request-Id"), Some("r-1"));
    assert_eq!(sent.header("Content-Type"), Some("application/json"));
}

#[test]
fn auth_fetch_failure_does_not_log_out() {
    let transport = ScriptedTransport::new().respond(401, json!({ "message": "Token expired" }));
    let store = store_with(transport, MemoryStore::new());
    store.save_auth("stale".to_owned(), sample_user(1, "member"));

    let err = block_on(store.auth_fetch("/api/profile", RequestOptions::get())).unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(store.is_authenticated());
}

#[test]
fn authed_requester_routes_through_auth_fetch() {
    let store = store_with(ScriptedTransport::new().respond(200, json!({ "ok": true })), MemoryStore::new());
    store.save_auth("xyz".to_owned(), sample_user(1, "member"));

    let value = block_on(store.authed().fetch("/api/ping", RequestOptions::get())).unwrap();
    assert_eq!(value, json!({ "ok": true }));
    assert_eq!(store.http().transport().last_request().header("authorization"), Some("Bearer xyz"));
}
