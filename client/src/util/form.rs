//! Field schemas for the signup and profile forms.
//!
//! A form is a slice of [`FieldSpec`]s plus a name→value map. Views render
//! from the schema; validation and conversion to DTOs happen here so they can
//! be tested without a browser.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use session::SignupForm;
use session::types::Profile;

pub type FormValues = BTreeMap<&'static str, String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Tel,
    Date,
    Url,
}

impl FieldKind {
    /// HTML `<input type>`.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Tel => "tel",
            Self::Date => "date",
            Self::Url => "url",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: &'static str,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> FieldSpec {
    FieldSpec { name, label, kind, required, default: "" }
}

pub const SIGNUP_FIELDS: &[FieldSpec] = &[
    field("eduEmail", "Edu email / AMSA email", FieldKind::Email, true),
    field("password", "Password", FieldKind::Password, true),
    field("firstName", "First Name", FieldKind::Text, true),
    field("lastName", "Last Name", FieldKind::Text, true),
    field("personalEmail", "Personal Email", FieldKind::Email, true),
];

pub const PERSONAL_FIELDS: &[FieldSpec] = &[
    field("firstName", "First Name", FieldKind::Text, true),
    field("lastName", "Last Name", FieldKind::Text, true),
    field("personalEmail", "Personal Email", FieldKind::Email, false),
    field("phoneNumber", "Phone Number", FieldKind::Tel, false),
    field("birthday", "Birthday", FieldKind::Date, false),
    field("address1", "Address Line 1", FieldKind::Text, false),
    field("address2", "Address Line 2", FieldKind::Text, false),
    field("city", "City", FieldKind::Text, false),
    field("state", "State", FieldKind::Text, false),
    field("zipCode", "Zip Code", FieldKind::Text, false),
];

pub const SCHOOL_FIELDS: &[FieldSpec] = &[
    field("schoolName", "School Name", FieldKind::Text, false),
    field("schoolCity", "School City", FieldKind::Text, false),
    field("schoolState", "School State", FieldKind::Text, false),
    field("schoolYear", "School Year", FieldKind::Text, false),
    field("degreeLevel", "Degree Level", FieldKind::Text, false),
    field("graduationYear", "Graduation Year", FieldKind::Text, false),
    field("major", "Major", FieldKind::Text, false),
    field("major2", "Second Major", FieldKind::Text, false),
];

pub const SOCIAL_FIELDS: &[FieldSpec] = &[
    field("facebook", "Facebook", FieldKind::Url, false),
    field("instagram", "Instagram", FieldKind::Url, false),
    field("linkedin", "LinkedIn", FieldKind::Url, false),
];

pub fn initial_values(fields: &[FieldSpec]) -> FormValues {
    fields.iter().map(|f| (f.name, f.default.to_owned())).collect()
}

/// Labels of required fields that are blank, in schema order.
pub fn missing_required(fields: &[FieldSpec], values: &FormValues) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|f| f.required && values.get(f.name).is_none_or(|v| v.trim().is_empty()))
        .map(|f| f.label)
        .collect()
}

pub fn validate(fields: &[FieldSpec], values: &FormValues) -> Result<(), String> {
    let missing = missing_required(fields, values);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!("Please fill in: {}", missing.join(", ")))
    }
}

fn value(values: &FormValues, name: &str) -> String {
    values.get(name).map(|v| v.trim().to_owned()).unwrap_or_default()
}

/// Signup DTO from [`SIGNUP_FIELDS`] values. The password is not trimmed.
pub fn signup_form_from(values: &FormValues) -> SignupForm {
    let edu_email = value(values, "eduEmail");
    SignupForm {
        email: None,
        edu_email: (!edu_email.is_empty()).then_some(edu_email),
        personal_email: value(values, "personalEmail"),
        password: values.get("password").cloned().unwrap_or_default(),
        first_name: value(values, "firstName"),
        last_name: value(values, "lastName"),
    }
}

macro_rules! profile_slots {
    ($($name:literal => $field:ident),* $(,)?) => {
        fn profile_slot<'a>(profile: &'a Profile, name: &str) -> Option<&'a Option<String>> {
            match name {
                $($name => Some(&profile.$field),)*
                _ => None,
            }
        }

        fn profile_slot_mut<'a>(profile: &'a mut Profile, name: &str) -> Option<&'a mut Option<String>> {
            match name {
                $($name => Some(&mut profile.$field),)*
                _ => None,
            }
        }
    };
}

profile_slots! {
    "firstName" => first_name,
    "lastName" => last_name,
    "personalEmail" => personal_email,
    "phoneNumber" => phone_number,
    "birthday" => birthday,
    "address1" => address1,
    "address2" => address2,
    "city" => city,
    "state" => state,
    "zipCode" => zip_code,
    "schoolName" => school_name,
    "schoolCity" => school_city,
    "schoolState" => school_state,
    "schoolYear" => school_year,
    "degreeLevel" => degree_level,
    "graduationYear" => graduation_year,
    "major" => major,
    "major2" => major2,
    "facebook" => facebook,
    "instagram" => instagram,
    "linkedin" => linkedin,
}

/// Current text of a profile field; empty when unset or unknown.
pub fn profile_value(profile: &Profile, name: &str) -> String {
    profile_slot(profile, name).and_then(Clone::clone).unwrap_or_default()
}

/// Blank input clears the field. Unknown names are ignored.
pub fn set_profile_value(profile: &mut Profile, name: &str, value: &str) {
    if let Some(slot) = profile_slot_mut(profile, name) {
        let trimmed = value.trim();
        *slot = (!trimmed.is_empty()).then(|| trimmed.to_owned());
    }
}

/// Form values for `fields`, read from `profile`.
pub fn profile_values(profile: &Profile, fields: &[FieldSpec]) -> FormValues {
    fields.iter().map(|f| (f.name, profile_value(profile, f.name))).collect()
}

/// Copy every edited value back onto `profile`.
pub fn apply_values(profile: &mut Profile, values: &FormValues) {
    for (name, value) in values {
        set_profile_value(profile, name, value);
    }
}
