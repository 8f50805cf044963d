//! Typed calls for the association API endpoints.
//!
//! Each function is generic over [`Requester`], so the caller decides whether
//! a call goes out plainly (`store.http()`) or with the session's bearer token
//! (`store.authed()`). Responses are decoded into the DTOs in
//! [`crate::types`] before they reach a view.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use crate::error::ApiError;
use crate::http::{Method, RequestOptions, Requester};
use crate::types::{
    Announcement, AnnouncementDraft, AnnouncementList, Blog, BlogDraft, BlogList, MemberDirectory, PasswordChange,
    Profile, ProfileEnvelope, PublicProfile, RecordId,
};

pub const BLOGS_PATH: &str = "/api/blogs";
pub const ANNOUNCEMENTS_PATH: &str = "/api/announcements";
pub const PROFILE_PATH: &str = "/api/profile";
pub const CHANGE_PASSWORD_PATH: &str = "/api/profile/change-password";
pub const MEMBERS_PATH: &str = "/api/user/members";

pub(crate) fn blog_path(id: &RecordId) -> String {
    format!("{BLOGS_PATH}/{id}")
}

pub(crate) fn announcement_path(id: &RecordId) -> String {
    format!("{ANNOUNCEMENTS_PATH}/{id}")
}

pub(crate) fn public_profile_path(id: &str) -> String {
    format!("/api/user/public-profile/{id}")
}

/// # Errors
///
/// Propagates request and decode failures.
pub async fn list_blogs(api: &impl Requester) -> Result<Vec<Blog>, ApiError> {
    let list: BlogList = api.fetch_as(BLOGS_PATH, RequestOptions::get()).await?;
    Ok(list.blogs)
}

/// # Errors
///
/// Propagates request failures.
pub async fn create_blog(api: &impl Requester, draft: &BlogDraft) -> Result<Value, ApiError> {
    api.fetch(BLOGS_PATH, RequestOptions::post_json(draft)?).await
}

/// # Errors
///
/// Propagates request failures.
pub async fn update_blog(api: &impl Requester, id: &RecordId, draft: &BlogDraft) -> Result<Value, ApiError> {
    api.fetch(&blog_path(id), RequestOptions::put_json(draft)?).await
}

/// # Errors
///
/// Propagates request failures.
pub async fn delete_blog(api: &impl Requester, id: &RecordId) -> Result<(), ApiError> {
    api.fetch(&blog_path(id), RequestOptions::delete()).await.map(|_| ())
}

/// # Errors
///
/// Propagates request and decode failures.
pub async fn list_announcements(api: &impl Requester) -> Result<Vec<Announcement>, ApiError> {
    let list: AnnouncementList = api.fetch_as(ANNOUNCEMENTS_PATH, RequestOptions::get()).await?;
    Ok(list.announcements)
}

/// # Errors
///
/// Propagates request failures.
pub async fn create_announcement(api: &impl Requester, draft: &AnnouncementDraft) -> Result<Value, ApiError> {
    api.fetch(ANNOUNCEMENTS_PATH, RequestOptions::post_json(draft)?).await
}

/// # Errors
///
/// Propagates request failures.
pub async fn update_announcement(
    api: &impl Requester,
    id: &RecordId,
    draft: &AnnouncementDraft,
) -> Result<Value, ApiError> {
    api.fetch(&announcement_path(id), RequestOptions::put_json(draft)?).await
}

/// # Errors
///
/// Propagates request failures.
pub async fn delete_announcement(api: &impl Requester, id: &RecordId) -> Result<(), ApiError> {
    api.fetch(&announcement_path(id), RequestOptions::delete()).await.map(|_| ())
}

/// # Errors
///
/// Propagates request failures; [`ApiError::Decode`] if the body has no
/// `profile`.
pub async fn fetch_profile(api: &impl Requester) -> Result<Profile, ApiError> {
    let envelope: ProfileEnvelope = api.fetch_as(PROFILE_PATH, RequestOptions::get()).await?;
    envelope.profile.ok_or_else(|| ApiError::Decode("response has no profile".to_owned()))
}

/// Send the edited profile and return the server's copy.
///
/// # Errors
///
/// Propagates request failures; [`ApiError::Decode`] if the body has no
/// `profile`.
pub async fn update_profile(api: &impl Requester, profile: &Profile) -> Result<Profile, ApiError> {
    let envelope: ProfileEnvelope = api.fetch_as(PROFILE_PATH, RequestOptions::put_json(profile)?).await?;
    envelope.profile.ok_or_else(|| ApiError::Decode("response has no profile".to_owned()))
}

/// # Errors
///
/// Propagates request failures.
pub async fn change_password(api: &impl Requester, change: &PasswordChange) -> Result<(), ApiError> {
    api.fetch(CHANGE_PASSWORD_PATH, RequestOptions::json(Method::Post, change)?)
        .await
        .map(|_| ())
}

/// Permanently delete the signed-in account.
///
/// # Errors
///
/// Propagates request failures.
pub async fn delete_account(api: &impl Requester) -> Result<(), ApiError> {
    api.fetch(PROFILE_PATH, RequestOptions::delete()).await.map(|_| ())
}

/// # Errors
///
/// Propagates request and decode failures.
pub async fn list_members(api: &impl Requester) -> Result<MemberDirectory, ApiError> {
    api.fetch_as(MEMBERS_PATH, RequestOptions::get()).await
}

/// # Errors
///
/// Propagates request and decode failures; a missing profile is a
/// [`ApiError::Status`] with status 404.
pub async fn fetch_public_profile(api: &impl Requester, id: &str) -> Result<PublicProfile, ApiError> {
    api.fetch_as(&public_profile_path(id), RequestOptions::get()).await
}
