//! Error taxonomy shared by the request helper and the session store.
//!
//! ERROR HANDLING
//! ==============
//! Expected failures settle as `Err(ApiError)` values; nothing here panics.
//! Non-2xx responses keep the parsed API body untouched so callers can read
//! structured `message` / `errors` fields for display.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Failure of the underlying network call (no HTTP status available).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Failure writing to durable key/value storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No persistent storage exists in this environment.
    #[error("storage unavailable")]
    Unavailable,
    /// The backend refused the write (quota, permissions, I/O).
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Settled failure of an API call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// An authenticated call was attempted without a session token.
    #[error("Not authenticated")]
    NotAuthenticated,
    /// The request path did not start with `/`.
    #[error("request path must start with '/': {0}")]
    InvalidPath(String),
    /// The network call itself failed.
    #[error("network request failed: {0}")]
    Transport(#[from] TransportError),
    /// The API answered with a non-2xx status. `body` is the parsed JSON
    /// response (or `{}` when it was not JSON).
    #[error("{}", status_message(.status, .body))]
    Status { status: u16, body: Value },
    /// A 2xx body did not match the expected DTO shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),
    /// A request body could not be serialized.
    #[error("request body could not be encoded: {0}")]
    Encode(String),
}

impl ApiError {
    /// HTTP status for API-level failures.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The error payload as the caller would see it: the API body for status
    /// failures, `{message}` for local failures, `{}` for transport failures.
    #[must_use]
    pub fn payload(&self) -> Value {
        match self {
            Self::Status { body, .. } => body.clone(),
            Self::NotAuthenticated | Self::InvalidPath(_) => {
                serde_json::json!({ "message": self.to_string() })
            }
            Self::Transport(_) | Self::Decode(_) | Self::Encode(_) => Value::Object(serde_json::Map::new()),
        }
    }

    /// Human-readable message when one is available.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Status { body, .. } => ErrorPayload::from_value(body).describe(),
            Self::NotAuthenticated | Self::InvalidPath(_) | Self::Transport(_) => Some(self.to_string()),
            Self::Decode(_) | Self::Encode(_) => None,
        }
    }

    /// Message for inline display, falling back to `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.message().unwrap_or_else(|| fallback.to_owned())
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn status_message(status: &u16, body: &Value) -> String {
    ErrorPayload::from_value(body)
        .describe()
        .unwrap_or_else(|| format!("request failed with status {status}"))
}

/// Structured error body produced by the remote API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

/// One validation error; the API uses either `msg` or `message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl FieldError {
    fn text(&self) -> Option<&str> {
        self.msg
            .as_deref()
            .filter(|m| !m.is_empty())
            .or_else(|| self.message.as_deref().filter(|m| !m.is_empty()))
    }
}

impl ErrorPayload {
    /// Leniently read a payload; unrecognised shapes yield an empty payload.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// `message` if set, else the validation errors joined with `", "`.
    #[must_use]
    pub fn describe(&self) -> Option<String> {
        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            return Some(message.to_owned());
        }
        let parts: Vec<&str> = self.errors.iter().filter_map(FieldError::text).collect();
        if parts.is_empty() { None } else { Some(parts.join(", ")) }
    }
}
