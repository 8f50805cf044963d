//! Build-time API configuration for the web client.

use session::ApiConfig;

/// Base URL baked in from `AMSA_API_URL` at compile time, else the default.
pub fn api_config() -> ApiConfig {
    ApiConfig::from_setting(option_env!("AMSA_API_URL"))
}
