//! JSON request helper over a pluggable transport.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every API call in the portal goes through [`RequestHelper`]. It joins the
//! configured base address with a relative path, applies the JSON default
//! headers, and settles each call as either the parsed body or an
//! [`ApiError`]. The browser plugs in a `gloo-net` transport, the CLI a
//! `reqwest` one, and tests a scripted double.
//!
//! No retries, timeouts, or caching happen here; the transport's own
//! behavior applies.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::config::ApiConfig;
use crate::error::{ApiError, TransportError};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// HTTP verb for a request. Defaults to a read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-side options for a single request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
    /// Pre-serialized request body.
    pub body: Option<String>,
    /// Header overrides; these win over the defaults on a name conflict.
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn delete() -> Self {
        Self::with_method(Method::Delete)
    }

    #[must_use]
    pub fn with_method(method: Method) -> Self {
        Self { method, ..Self::default() }
    }

    /// Options for `method` carrying `body` serialized as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be serialized.
    pub fn json<B: Serialize>(method: Method, body: &B) -> Result<Self, ApiError> {
        let raw = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self::with_method(method).with_body(raw))
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be serialized.
    pub fn post_json<B: Serialize>(body: &B) -> Result<Self, ApiError> {
        Self::json(Method::Post, body)
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be serialized.
    pub fn put_json<B: Serialize>(body: &B) -> Result<Self, ApiError> {
        Self::json(Method::Put, body)
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// A fully resolved request as handed to a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response returned by a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs the actual network call.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Anything that can issue an API request and settle it as JSON.
///
/// Implemented by [`RequestHelper`] for public calls and by
/// [`crate::store::Authenticated`] for calls carrying the bearer token, so the
/// typed endpoint functions in [`crate::api`] work with either.
#[allow(async_fn_in_trait)]
pub trait Requester {
    async fn fetch(&self, path: &str, opts: RequestOptions) -> Result<Value, ApiError>;

    async fn fetch_as<R: DeserializeOwned>(&self, path: &str, opts: RequestOptions) -> Result<R, ApiError> {
        let value = self.fetch(path, opts).await?;
        decode(value)
    }
}

/// Decode a settled JSON body into a typed DTO.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the value does not match `R`.
pub fn decode<R: DeserializeOwned>(value: Value) -> Result<R, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Base-address-aware JSON request helper.
#[derive(Clone, Debug)]
pub struct RequestHelper<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> RequestHelper<T> {
    pub fn new(config: &ApiConfig, transport: T) -> Self {
        Self { base_url: config.base_url.clone(), transport }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute URL for `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidPath`] if `path` does not start with `/`.
    pub fn url(&self, path: &str) -> Result<String, ApiError> {
        if !path.starts_with('/') {
            return Err(ApiError::InvalidPath(path.to_owned()));
        }
        Ok(format!("{}{}", self.base_url, path))
    }

    /// Issue a request and settle it.
    ///
    /// The body is parsed as JSON regardless of status; an unparseable body
    /// becomes `{}`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidPath`] before any network activity for a bad path.
    /// - [`ApiError::Transport`] when the network call fails.
    /// - [`ApiError::Status`] for non-2xx responses, carrying the parsed body.
    pub async fn request(&self, path: &str, opts: RequestOptions) -> Result<Value, ApiError> {
        let url = self.url(path)?;
        let method = opts.method;
        let request = HttpRequest { method, url, headers: merge_headers(opts.headers), body: opts.body };

        log::debug!("{method} {path}");
        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("{method} {path} transport failure: {e}");
            ApiError::from(e)
        })?;

        let body = parse_body(&response.body);
        if !response.is_success() {
            log::warn!("{method} {path} failed with status {}", response.status);
            return Err(ApiError::Status { status: response.status, body });
        }
        Ok(body)
    }

    /// [`Self::request`] followed by decoding into `R`.
    ///
    /// # Errors
    ///
    /// Everything [`Self::request`] returns, plus [`ApiError::Decode`] when a
    /// successful body does not match `R`.
    pub async fn request_as<R: DeserializeOwned>(&self, path: &str, opts: RequestOptions) -> Result<R, ApiError> {
        decode(self.request(path, opts).await?)
    }
}

impl<T: Transport> Requester for RequestHelper<T> {
    async fn fetch(&self, path: &str, opts: RequestOptions) -> Result<Value, ApiError> {
        self.request(path, opts).await
    }
}

/// JSON default headers overlaid with caller overrides (case-insensitive).
pub(crate) fn merge_headers(overrides: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut headers = vec![(CONTENT_TYPE.to_owned(), APPLICATION_JSON.to_owned())];
    for (name, value) in overrides {
        match headers.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(&name)) {
            Some(slot) => *slot = (name, value),
            None => headers.push((name, value)),
        }
    }
    headers
}

fn parse_body(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::Object(Map::new()))
}
