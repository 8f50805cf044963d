use super::*;
use crate::config::ApiConfig;
use crate::http::RequestHelper;
use crate::storage::{KeyValueStore, MemoryStore};
use crate::store::SessionStore;
use crate::test_support::ScriptedTransport;
use futures::executor::block_on;
use serde_json::json;

fn plain(transport: ScriptedTransport) -> RequestHelper<ScriptedTransport> {
    RequestHelper::new(&ApiConfig::new("http://api.test"), transport)
}

fn signed_in(transport: ScriptedTransport) -> SessionStore<ScriptedTransport, MemoryStore> {
    let store = SessionStore::new(plain(transport), MemoryStore::new());
    let user = serde_json::from_value(json!({ "id": 1, "role": "admin" })).unwrap();
    store.save_auth("tok".to_owned(), user);
    store
}

#[test]
fn paths_format_ids() {
    assert_eq!(blog_path(&RecordId::Number(4)), "/api/blogs/4");
    assert_eq!(announcement_path(&RecordId::Text("a-1".to_owned())), "/api/announcements/a-1");
    assert_eq!(public_profile_path("17"), "/api/user/public-profile/17");
}

#[test]
fn list_blogs_unwraps_envelope() {
    let http = plain(ScriptedTransport::new().respond(200, json!({
        "blogs": [{ "id": 1, "title": "Welcome", "slug": "welcome", "content": "Hi" }]
    })));
    let blogs = block_on(list_blogs(&http)).unwrap();
    assert_eq!(blogs.len(), 1);
    assert_eq!(blogs[0].slug.as_deref(), Some("welcome"));
    assert_eq!(http.transport().last_request().header("authorization"), None);
}

#[test]
fn list_announcements_defaults_to_empty() {
    let http = plain(ScriptedTransport::new().respond(200, json!({})));
    assert!(block_on(list_announcements(&http)).unwrap().is_empty());
}

#[test]
fn admin_blog_crud_carries_bearer_token() {
    let transport = ScriptedTransport::new()
        .respond(201, json!({ "blog": { "id": 9 } }))
        .respond(200, json!({}))
        .respond(204, json!({}));
    let store = signed_in(transport);
    let draft = BlogDraft { title: "T".to_owned(), content: "C".to_owned(), cover_image_url: None };

    block_on(create_blog(&store.authed(), &draft)).unwrap();
    block_on(update_blog(&store.authed(), &RecordId::Number(9), &draft)).unwrap();
    block_on(delete_blog(&store.authed(), &RecordId::Number(9))).unwrap();

    let sent = store.http().transport().requests();
    let summary: Vec<(Method, &str)> = sent.iter().map(|r| (r.method, r.url.as_str())).collect();
    assert_eq!(
        summary,
        vec![
            (Method::Post, "http://api.test/api/blogs"),
            (Method::Put, "http://api.test/api/blogs/9"),
            (Method::Delete, "http://api.test/api/blogs/9"),
        ]
    );
    assert!(sent.iter().all(|r| r.header("Authorization") == Some("Bearer tok")));
}

#[test]
fn announcement_update_sends_title_and_body() {
    let store = signed_in(ScriptedTransport::new().respond(200, json!({})));
    let draft = AnnouncementDraft { title: "AGM".to_owned(), body: "Saturday".to_owned() };
    block_on(update_announcement(&store.authed(), &RecordId::Number(3), &draft)).unwrap();

    let sent = store.http().transport().last_request();
    let body: Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "title": "AGM", "body": "Saturday" }));
}

#[test]
fn authed_calls_fail_locally_when_signed_out() {
    let store = signed_in(ScriptedTransport::new());
    store.logout();
    let err = block_on(delete_announcement(&store.authed(), &RecordId::Number(1))).unwrap_err();
    assert_eq!(err, ApiError::NotAuthenticated);
    assert_eq!(store.http().transport().request_count(), 0);
}

#[test]
fn fetch_profile_requires_profile_field() {
    let store = signed_in(
        ScriptedTransport::new()
            .respond(200, json!({ "profile": { "id": 1, "firstName": "Ana" } }))
            .respond(200, json!({ "ok": true })),
    );
    let profile = block_on(fetch_profile(&store.authed())).unwrap();
    assert_eq!(profile.first_name.as_deref(), Some("Ana"));

    let err = block_on(fetch_profile(&store.authed())).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn update_profile_puts_full_record() {
    let store = signed_in(ScriptedTransport::new().respond(200, json!({
        "profile": { "id": 1, "firstName": "Ana", "city": "Boston" }
    })));
    let edited = Profile { first_name: Some("Ana".to_owned()), city: Some("Boston".to_owned()), ..Profile::default() };
    let saved = block_on(update_profile(&store.authed(), &edited)).unwrap();
    assert_eq!(saved.city.as_deref(), Some("Boston"));

    let sent = store.http().transport().last_request();
    assert_eq!(sent.method, Method::Put);
    let body: Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "firstName": "Ana", "city": "Boston" }));
}

#[test]
fn change_password_posts_camel_case_fields() {
    let store = signed_in(ScriptedTransport::new().respond(200, json!({ "message": "ok" })));
    let change = PasswordChange { current_password: "old".to_owned(), new_password: "new".to_owned() };
    block_on(change_password(&store.authed(), &change)).unwrap();

    let sent = store.http().transport().last_request();
    assert_eq!(sent.url, "http://api.test/api/profile/change-password");
    let body: Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "currentPassword": "old", "newPassword": "new" }));
}

#[test]
fn delete_account_issues_delete_on_profile() {
    let store = signed_in(ScriptedTransport::new().respond(200, json!({})));
    block_on(delete_account(&store.authed())).unwrap();
    let sent = store.http().transport().last_request();
    assert_eq!((sent.method, sent.url.as_str()), (Method::Delete, "http://api.test/api/profile"));
    assert!(store.storage().get(crate::AUTH_STORAGE_KEY).is_some());
}

#[test]
fn fetch_public_profile_reports_not_found_status() {
    let http = plain(ScriptedTransport::new().respond(404, json!({ "message": "User not found" })));
    let err = block_on(fetch_public_profile(&http, "42")).unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[test]
fn list_members_decodes_groups() {
    let http = plain(ScriptedTransport::new().respond(200, json!({
        "sb": [{ "name": "Chair", "UserId": 1, "User": { "firstName": "A" } }],
        "current_tuz": [],
        "tuz": { "2023": [{ "name": "President", "UserId": 2 }] }
    })));
    let directory = block_on(list_members(&http)).unwrap();
    assert_eq!(directory.sb[0].name, "Chair");
    assert_eq!(directory.tuz["2023"][0].user_id, Some(RecordId::Number(2)));
}
