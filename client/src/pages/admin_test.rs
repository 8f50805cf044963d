use super::*;

#[test]
fn blog_draft_requires_title_and_content() {
    assert_eq!(blog_draft_from("  ", "body", ""), Err("Blog title and content are required."));
    assert_eq!(blog_draft_from("Title", "\n", ""), Err("Blog title and content are required."));
}

#[test]
fn blog_draft_trims_and_omits_blank_cover() {
    let draft = blog_draft_from(" Title ", " Body ", "   ").unwrap();
    assert_eq!(
        draft,
        BlogDraft { title: "Title".to_owned(), content: "Body".to_owned(), cover_image_url: None }
    );

    let draft = blog_draft_from("T", "B", " /uploads/c.png ").unwrap();
    assert_eq!(draft.cover_image_url.as_deref(), Some("/uploads/c.png"));
}

#[test]
fn announcement_draft_requires_both_fields() {
    assert_eq!(announcement_draft_from("AGM", ""), Err("Announcement title and body are required."));
    assert_eq!(
        announcement_draft_from(" AGM ", " Saturday "),
        Ok(AnnouncementDraft { title: "AGM".to_owned(), body: "Saturday".to_owned() })
    );
}
