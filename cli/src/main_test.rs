use super::*;
use clap::CommandFactory;
use serde_json::json;

fn blog() -> Blog {
    serde_json::from_value(json!({
        "id": 3,
        "title": "Old",
        "content": "Body",
        "coverImageUrl": "/uploads/c.png"
    }))
    .unwrap()
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn record_ids_parse_from_arguments() {
    let cli = Cli::try_parse_from(["amsa", "blogs", "delete", "12"]).unwrap();
    match cli.command {
        Command::Blogs(BlogsCommand { command: BlogsSubcommand::Delete { id } }) => {
            assert_eq!(id, RecordId::Number(12));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn merge_blog_keeps_unspecified_fields() {
    let draft = merge_blog(&blog(), Some("New".to_owned()), None, None);
    assert_eq!(draft.title, "New");
    assert_eq!(draft.content, "Body");
    assert_eq!(draft.cover_image_url.as_deref(), Some("/uploads/c.png"));
}

#[test]
fn merge_blog_empty_cover_clears_it() {
    let draft = merge_blog(&blog(), None, None, Some(String::new()));
    assert_eq!(draft.cover_image_url, None);
}

#[test]
fn merge_announcement_overrides_given_fields() {
    let item: Announcement =
        serde_json::from_value(json!({ "id": 1, "title": "AGM", "body": "Saturday" })).unwrap();
    let draft = merge_announcement(&item, None, Some("Sunday".to_owned()));
    assert_eq!(draft, AnnouncementDraft { title: "AGM".to_owned(), body: "Sunday".to_owned() });
}

#[test]
fn merge_profile_overlays_patch_and_keeps_unknown_fields() {
    let profile: Profile = serde_json::from_value(json!({
        "id": 1,
        "firstName": "Ana",
        "city": "Boston",
        "favoriteColor": "blue"
    }))
    .unwrap();
    let merged = merge_profile(&profile, json!({ "city": "Denver", "graduationYear": 2026 })).unwrap();
    assert_eq!(merged.first_name.as_deref(), Some("Ana"));
    assert_eq!(merged.city.as_deref(), Some("Denver"));
    assert_eq!(merged.graduation_year.as_deref(), Some("2026"));
    assert_eq!(merged.extra.get("favoriteColor"), Some(&json!("blue")));
}

#[test]
fn merge_profile_rejects_non_objects() {
    assert!(matches!(merge_profile(&Profile::default(), json!([1, 2])), Err(CliError::NotAnObject)));
}
