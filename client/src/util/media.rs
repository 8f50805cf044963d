//! Image URL resolution for covers, avatars, and member cards.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

/// Shown whenever a record carries no image.
pub const FALLBACK_IMAGE: &str = "/assets/logo.png";

/// Absolute `http(s)` URLs pass through, relative upload paths are served by
/// the API host, and missing or blank values fall back to the logo.
pub fn resolve_image_url(base_url: &str, raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return FALLBACK_IMAGE.to_owned();
    };
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return raw.to_owned();
    }
    format!("{}/{}", base_url.trim_end_matches('/'), raw.trim_start_matches('/'))
}
