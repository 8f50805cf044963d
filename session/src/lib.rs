//! Client-side session core for the association portal.
//!
//! This crate owns the pieces every front end shares: the JSON request helper,
//! the session store that mirrors the signed-in identity to durable storage,
//! the authenticated request wrapper, and the DTOs for the remote API. It has
//! no browser or runtime dependency; transports and storage are plugged in by
//! `client` (gloo-net + localStorage) and `cli` (reqwest + files).

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod storage;
pub mod store;
pub mod types;

pub use config::{ApiConfig, AUTH_STORAGE_KEY, DEFAULT_API_BASE_URL};
pub use error::{ApiError, ErrorPayload, StorageError, TransportError};
pub use http::{HttpRequest, HttpResponse, Method, RequestHelper, RequestOptions, Requester, Transport};
pub use storage::{KeyValueStore, MemoryStore};
pub use store::{AuthSession, AuthStatus, Authenticated, SessionPhase, SessionStore};
pub use types::{Role, SignupForm, UserId, UserSummary};

#[cfg(test)]
pub(crate) mod test_support;
