use super::*;
use serde_json::json;

#[test]
fn describe_prefers_message() {
    let payload = ErrorPayload::from_value(&json!({
        "message": "Invalid credentials",
        "errors": [{ "msg": "ignored" }]
    }));
    assert_eq!(payload.describe().as_deref(), Some("Invalid credentials"));
}

#[test]
fn describe_joins_validation_errors() {
    let payload = ErrorPayload::from_value(&json!({
        "errors": [{ "msg": "Email is required" }, { "message": "Password too short" }]
    }));
    assert_eq!(payload.describe().as_deref(), Some("Email is required, Password too short"));
}

#[test]
fn describe_is_none_for_empty_or_foreign_payloads() {
    assert_eq!(ErrorPayload::from_value(&json!({})).describe(), None);
    assert_eq!(ErrorPayload::from_value(&json!({ "message": "" })).describe(), None);
    assert_eq!(ErrorPayload::from_value(&json!("plain text")).describe(), None);
    assert_eq!(ErrorPayload::from_value(&json!({ "message": 42 })).describe(), None);
}

#[test]
fn status_error_displays_api_message() {
    let err = ApiError::Status { status: 401, body: json!({ "message": "Invalid credentials" }) };
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.message().as_deref(), Some("Invalid credentials"));
}

#[test]
fn status_error_without_message_displays_status() {
    let err = ApiError::Status { status: 500, body: json!({}) };
    assert_eq!(err.to_string(), "request failed with status 500");
    assert_eq!(err.user_message("Failed to load data"), "Failed to load data");
}

#[test]
fn status_error_payload_is_passed_through_unchanged() {
    let body = json!({ "message": "nope", "code": "E_DENIED", "errors": [] });
    let err = ApiError::Status { status: 403, body: body.clone() };
    assert_eq!(err.payload(), body);
}

#[test]
fn not_authenticated_has_message_payload() {
    let err = ApiError::NotAuthenticated;
    assert_eq!(err.to_string(), "Not authenticated");
    assert_eq!(err.payload(), json!({ "message": "Not authenticated" }));
    assert_eq!(err.user_message("fallback"), "Not authenticated");
}

#[test]
fn transport_error_payload_is_empty_object() {
    let err = ApiError::from(TransportError("connection refused".to_owned()));
    assert_eq!(err.payload(), json!({}));
    assert_eq!(err.status(), None);
    assert_eq!(err.to_string(), "network request failed: connection refused");
}

#[test]
fn decode_error_uses_fallback_message() {
    let err = ApiError::Decode("missing field `token`".to_owned());
    assert_eq!(err.user_message("Login failed"), "Login failed");
}
