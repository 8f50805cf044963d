//! API base address and durable-storage key.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";

/// Key under which the durable session record lives.
pub const AUTH_STORAGE_KEY: &str = "amsa_auth";

/// Name of the environment-style setting that overrides the base address.
pub const API_URL_SETTING: &str = "AMSA_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config from a raw base address, stripping trailing slashes.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    /// Build a config from an optional setting value.
    ///
    /// Missing or blank settings fall back to [`DEFAULT_API_BASE_URL`].
    #[must_use]
    pub fn from_setting(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(value) if !value.is_empty() => Self::new(value),
            _ => Self::new(DEFAULT_API_BASE_URL),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
