use super::*;

#[test]
fn absolute_urls_are_kept() {
    assert_eq!(
        resolve_image_url("http://api.test", Some("https://cdn.test/a.png")),
        "https://cdn.test/a.png"
    );
    assert_eq!(resolve_image_url("http://api.test", Some("http://x.test/b.jpg")), "http://x.test/b.jpg");
}

#[test]
fn relative_paths_are_served_by_api_host() {
    assert_eq!(
        resolve_image_url("http://api.test", Some("/uploads/a.png")),
        "http://api.test/uploads/a.png"
    );
    assert_eq!(
        resolve_image_url("http://api.test/", Some("uploads/a.png")),
        "http://api.test/uploads/a.png"
    );
}

#[test]
fn missing_or_blank_falls_back_to_logo() {
    assert_eq!(resolve_image_url("http://api.test", None), FALLBACK_IMAGE);
    assert_eq!(resolve_image_url("http://api.test", Some("   ")), FALLBACK_IMAGE);
}
