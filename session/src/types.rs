//! Request and response DTOs for the association API.
//!
//! DESIGN
//! ======
//! Each endpoint gets an explicit record shape, and JSON is decoded into it
//! right after the request helper settles. Records the portal only passes
//! through (the signed-in user, profiles) keep unknown fields in a flattened
//! `extra` map so they survive a decode/encode round trip unchanged.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Server-assigned identifier; the API uses numbers or strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

pub type UserId = RecordId;

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Integers parse as [`RecordId::Number`], anything else is kept as text.
impl FromStr for RecordId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(trimmed.parse().map_or_else(|_| Self::Text(trimmed.to_owned()), Self::Number))
    }
}

/// Account classification used to gate administrative views.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    #[default]
    Member,
    /// Any other role string, preserved verbatim.
    Other(String),
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "admin" => Self::Admin,
            "member" => Self::Member,
            _ => Self::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        match value {
            Role::Admin => "admin".to_owned(),
            Role::Member => "member".to_owned(),
            Role::Other(raw) => raw,
        }
    }
}

/// The signed-in user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: UserId,
    /// Missing or `null` reads as [`Role::Member`].
    #[serde(default, deserialize_with = "deserialize_role")]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Fields the portal does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserSummary {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// `"First Last"`, falling back to the email, then the id.
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = join_name(self.first_name.as_deref(), self.last_name.as_deref());
        if !name.is_empty() {
            return name;
        }
        self.email.clone().unwrap_or_else(|| self.id.to_string())
    }
}

pub(crate) fn join_name(first: Option<&str>, last: Option<&str>) -> String {
    format!("{} {}", first.unwrap_or_default(), last.unwrap_or_default())
        .trim()
        .to_owned()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub personal_email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Successful login/signup body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserSummary,
}

/// Signup input as collected by a form.
///
/// Either `email` (a combined institutional/personal address) or `edu_email`
/// identifies the account; see [`SignupForm::normalized_email`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: Option<String>,
    pub edu_email: Option<String>,
    pub personal_email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl SignupForm {
    /// First non-blank of `email` and `edu_email`, trimmed; empty if neither.
    #[must_use]
    pub fn normalized_email(&self) -> String {
        [self.email.as_deref(), self.edu_email.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|candidate| !candidate.is_empty())
            .unwrap_or_default()
            .to_owned()
    }

    #[must_use]
    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            email: self.normalized_email(),
            personal_email: self.personal_email.trim().to_owned(),
            password: self.password.clone(),
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
}

impl Blog {
    /// Content cut to `max_chars` characters with a trailing ellipsis.
    #[must_use]
    pub fn excerpt(&self, max_chars: usize) -> String {
        excerpt(&self.content, max_chars)
    }
}

pub(crate) fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

/// Create/update body for a blog post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDraft {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
}

impl From<&Blog> for BlogDraft {
    fn from(blog: &Blog) -> Self {
        Self {
            title: blog.title.clone(),
            content: blog.content.clone(),
            cover_image_url: blog.cover_image_url.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct BlogList {
    #[serde(default)]
    pub blogs: Vec<Blog>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AnnouncementDraft {
    pub title: String,
    pub body: String,
}

impl From<&Announcement> for AnnouncementDraft {
    fn from(announcement: &Announcement) -> Self {
        Self { title: announcement.title.clone(), body: announcement.body.clone() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AnnouncementList {
    #[serde(default)]
    pub announcements: Vec<Announcement>,
}

/// Member profile as served by `/api/profile` and the public-profile lookup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text", skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_state: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text", skip_serializing_if = "Option::is_none")]
    pub school_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree_level: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text", skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major2: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Public profiles share the member profile shape with private fields absent.
pub type PublicProfile = Profile;

impl Profile {
    #[must_use]
    pub fn display_name(&self) -> String {
        join_name(self.first_name.as_deref(), self.last_name.as_deref())
    }

    /// Avatar initial: first letter of the first name, else of the email.
    #[must_use]
    pub fn initial(&self) -> char {
        [self.first_name.as_deref(), self.email.as_deref()]
            .into_iter()
            .flatten()
            .find_map(|s| s.chars().next())
            .unwrap_or('?')
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProfileEnvelope {
    #[serde(default)]
    pub profile: Option<Profile>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

/// Leadership roster grouped the way `/api/user/members` returns it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDirectory {
    /// Strategy board.
    #[serde(default)]
    pub sb: Vec<Membership>,
    /// Executive team for the current year.
    #[serde(default)]
    pub current_tuz: Vec<Membership>,
    /// Executive teams keyed by year.
    #[serde(default)]
    pub tuz: BTreeMap<String, Vec<Membership>>,
}

impl MemberDirectory {
    /// Past executive-team years, newest first, excluding `current_year`.
    #[must_use]
    pub fn historical_years(&self, current_year: i32) -> Vec<String> {
        let mut years: Vec<(Option<i32>, &String)> = self
            .tuz
            .keys()
            .map(|key| (key.trim().parse::<i32>().ok(), key))
            .filter(|(parsed, _)| *parsed != Some(current_year))
            .collect();
        years.sort_by(|a, b| b.0.cmp(&a.0));
        years.into_iter().map(|(_, key)| key.clone()).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sb.is_empty() && self.current_tuz.is_empty() && self.tuz.values().all(Vec::is_empty)
    }
}

/// A position held by a user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// Position title.
    #[serde(default)]
    pub name: String,
    #[serde(rename = "UserId", default)]
    pub user_id: Option<RecordId>,
    #[serde(rename = "User", default)]
    pub user: Option<MemberUser>,
}

impl Membership {
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| join_name(u.first_name.as_deref(), u.last_name.as_deref()))
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUser {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub school_name: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

fn deserialize_role<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(Role::from).unwrap_or_default())
}

/// Accept a string or a number for text-ish fields (years, zip codes).
fn deserialize_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
