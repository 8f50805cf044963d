//! Signed-in member's own profile: view, edit, password, account deletion.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated on [`member_gate`]; the profile is fetched once the restored session
//! is known to be authenticated. Every call goes through the authenticated
//! wrapper, so a session lost mid-visit surfaces as "Not authenticated".

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::types::{PasswordChange, Profile};

use crate::components::field_inputs::FieldInputs;
use crate::state::auth::SessionContext;
use crate::util::form::{
    FieldSpec, FormValues, PERSONAL_FIELDS, SCHOOL_FIELDS, SOCIAL_FIELDS, apply_values, profile_value, profile_values,
    validate,
};
use crate::util::guard::{Gate, install_gate, member_gate};
use crate::util::media::resolve_image_url;

pub const PASSWORD_MISMATCH: &str = "New passwords do not match";
pub const PROFILE_NOT_LOADED: &str = "Profile is not loaded yet. Reload the page and try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    View,
    Edit,
    Password,
    Delete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Personal,
    School,
    Social,
}

impl Section {
    const ALL: [Self; 3] = [Self::Personal, Self::School, Self::Social];

    fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Personal => PERSONAL_FIELDS,
            Self::School => SCHOOL_FIELDS,
            Self::Social => SOCIAL_FIELDS,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::School => "School",
            Self::Social => "Social",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Flash {
    error: bool,
    text: String,
}

impl Flash {
    fn ok(text: &str) -> Option<Self> {
        Some(Self { error: false, text: text.to_owned() })
    }

    fn err(text: impl Into<String>) -> Option<Self> {
        Some(Self { error: true, text: text.into() })
    }
}

/// Editor state for every section at once.
fn editor_values(profile: &Profile) -> FormValues {
    Section::ALL
        .iter()
        .flat_map(|section| profile_values(profile, section.fields()))
        .collect()
}

/// Edits applied over the loaded profile; nothing is saved until one is loaded.
fn profile_draft(loaded: Option<Profile>, edited: &FormValues) -> Result<Profile, String> {
    let Some(mut draft) = loaded else {
        return Err(PROFILE_NOT_LOADED.to_owned());
    };
    validate(PERSONAL_FIELDS, edited)?;
    apply_values(&mut draft, edited);
    Ok(draft)
}

/// Confirmation must match before anything is sent.
fn password_change_from(current: &str, new: &str, confirm: &str) -> Result<PasswordChange, &'static str> {
    if new != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    if current.is_empty() || new.is_empty() {
        return Err("Enter your current and new password.");
    }
    Ok(PasswordChange { current_password: current.to_owned(), new_password: new.to_owned() })
}

/// Clear a success message after a few seconds.
fn clear_later(flash: RwSignal<Option<Flash>>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(3)).await;
        flash.update(|f| {
            if f.as_ref().is_some_and(|f| !f.error) {
                *f = None;
            }
        });
    });
    #[cfg(not(feature = "csr"))]
    let _ = flash;
}

#[component]
#[allow(clippy::too_many_lines)]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let auth = session.state;
    install_gate(auth, member_gate, use_navigate());

    let base_url = session.base_url();
    let profile = RwSignal::new(None::<Profile>);
    let loading = RwSignal::new(true);
    let requested = RwSignal::new(false);
    let flash = RwSignal::new(None::<Flash>);
    let tab = RwSignal::new(Tab::View);
    let section = RwSignal::new(Section::Personal);
    let values = RwSignal::new(FormValues::new());

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let confirm_delete = RwSignal::new(false);

    Effect::new(move || {
        if requested.get() || auth.with(member_gate) != Gate::Allow {
            return;
        }
        requested.set(true);
        #[cfg(feature = "csr")]
        {
            let store = session.store();
            leptos::task::spawn_local(async move {
                match session::api::fetch_profile(&store.authed()).await {
                    Ok(loaded) => {
                        values.set(editor_values(&loaded));
                        profile.set(Some(loaded));
                    }
                    Err(e) => flash.set(Flash::err(e.user_message("Failed to load profile"))),
                }
                loading.set(false);
            });
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = match profile_draft(profile.get(), &values.get()) {
            Ok(draft) => draft,
            Err(message) => {
                flash.set(Flash::err(message));
                return;
            }
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let store = session.store();
            match session::api::update_profile(&store.authed(), &draft).await {
                Ok(saved) => {
                    values.set(editor_values(&saved));
                    profile.set(Some(saved));
                    flash.set(Flash::ok("Profile updated successfully!"));
                    clear_later(flash);
                }
                Err(e) => flash.set(Flash::err(e.user_message("Failed to update profile"))),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = draft;
    };

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let change =
            match password_change_from(&current_password.get(), &new_password.get(), &confirm_password.get()) {
                Ok(change) => change,
                Err(message) => {
                    flash.set(Flash::err(message));
                    return;
                }
            };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let store = session.store();
            match session::api::change_password(&store.authed(), &change).await {
                Ok(()) => {
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                    flash.set(Flash::ok("Password changed successfully!"));
                    clear_later(flash);
                }
                Err(e) => flash.set(Flash::err(e.user_message("Failed to change password"))),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = change;
    };

    let on_delete = move |_| {
        if !confirm_delete.get() {
            confirm_delete.set(true);
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let store = session.store();
            match session::api::delete_account(&store.authed()).await {
                Ok(()) => {
                    session.logout();
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(e) => {
                    confirm_delete.set(false);
                    flash.set(Flash::err(e.user_message("Failed to delete account")));
                }
            }
        });
    };

    let tab_button = move |target: Tab, label: &'static str| {
        view! {
            <button
                class="tab"
                class:tab-active=move || tab.get() == target
                on:click=move |_| {
                    flash.set(None);
                    tab.set(target);
                }
            >
                {label}
            </button>
        }
    };

    let section_tabs = move || {
        Section::ALL
            .into_iter()
            .map(|s| {
                view! {
                    <button
                        class="subtab"
                        class:subtab-active=move || section.get() == s
                        on:click=move |_| section.set(s)
                    >
                        {s.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="profile-page">
            <Show
                when=move || !loading.get() || profile.get().is_some()
                fallback=|| view! { <p class="muted">"Loading..."</p> }
            >
                <aside class="profile-page__sidebar">
                    {
                        let base_url = base_url.clone();
                        move || {
                            profile.get().map(|p| {
                                let avatar = resolve_image_url(&base_url, p.profile_pic.as_deref());
                                view! {
                                    <img class="profile-card__avatar" src=avatar alt=p.initial().to_string()/>
                                    <h2>{p.display_name()}</h2>
                                    <p class="muted">{p.email.clone().unwrap_or_default()}</p>
                                }
                            })
                        }
                    }
                    {tab_button(Tab::View, "View Profile")}
                    {tab_button(Tab::Edit, "Edit Profile")}
                    {tab_button(Tab::Password, "Change Password")}
                    {tab_button(Tab::Delete, "Delete Account")}
                </aside>

                <main class="profile-page__content">
                    {move || {
                        flash.get().map(|f| {
                            let class = if f.error { "flash flash--error" } else { "flash flash--ok" };
                            view! { <p class=class>{f.text}</p> }
                        })
                    }}

                    <Show when=move || tab.get() == Tab::View>
                        <nav class="subtabs">{section_tabs}</nav>
                        <dl class="profile-details">
                            {move || {
                                let current = profile.get().unwrap_or_default();
                                section
                                    .get()
                                    .fields()
                                    .iter()
                                    .map(|field| {
                                        let value = profile_value(&current, field.name);
                                        let shown = if value.is_empty() { "Not provided".to_owned() } else { value };
                                        view! { <dt>{field.label}</dt><dd>{shown}</dd> }
                                    })
                                    .collect_view()
                            }}
                        </dl>
                    </Show>

                    <Show when=move || tab.get() == Tab::Edit>
                        <form class="profile-form" on:submit=on_save>
                            {Section::ALL
                                .into_iter()
                                .map(|s| {
                                    view! {
                                        <fieldset>
                                            <legend>{s.label()}</legend>
                                            <FieldInputs fields=s.fields() values=values/>
                                        </fieldset>
                                    }
                                })
                                .collect_view()}
                            <button class="btn btn--primary" type="submit" disabled=move || profile.with(Option::is_none)>
                                "Save Changes"
                            </button>
                        </form>
                    </Show>

                    <Show when=move || tab.get() == Tab::Password>
                        <form class="profile-form" on:submit=on_change_password>
                            <label class="field">
                                <span class="field__label">"Current Password"</span>
                                <input
                                    class="input"
                                    type="password"
                                    required
                                    prop:value=move || current_password.get()
                                    on:input=move |ev| current_password.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="field">
                                <span class="field__label">"New Password"</span>
                                <input
                                    class="input"
                                    type="password"
                                    required
                                    prop:value=move || new_password.get()
                                    on:input=move |ev| new_password.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="field">
                                <span class="field__label">"Confirm New Password"</span>
                                <input
                                    class="input"
                                    type="password"
                                    required
                                    prop:value=move || confirm_password.get()
                                    on:input=move |ev| confirm_password.set(event_target_value(&ev))
                                />
                            </label>
                            <button class="btn btn--primary" type="submit">"Change Password"</button>
                        </form>
                    </Show>

                    <Show when=move || tab.get() == Tab::Delete>
                        <div class="danger-zone">
                            <p>"Deleting your account removes your profile and memberships permanently."</p>
                            <button class="btn btn--danger" on:click=on_delete>
                                {move || {
                                    if confirm_delete.get() { "Yes, delete my account" } else { "Delete my account" }
                                }}
                            </button>
                            <Show when=move || confirm_delete.get()>
                                <button class="btn" on:click=move |_| confirm_delete.set(false)>"Cancel"</button>
                            </Show>
                        </div>
                    </Show>
                </main>
            </Show>
        </div>
    }
}
