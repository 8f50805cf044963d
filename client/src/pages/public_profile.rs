//! Read-only member profile, reachable from team cards.

#[cfg(test)]
#[path = "public_profile_test.rs"]
mod public_profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use session::ApiError;
use session::types::PublicProfile;

use crate::state::auth::SessionContext;
use crate::util::media::resolve_image_url;

pub const PROFILE_NOT_FOUND: &str = "Profile not found";

fn load_error_text(err: &ApiError) -> String {
    if err.status() == Some(404) {
        PROFILE_NOT_FOUND.to_owned()
    } else {
        err.user_message("Failed to load profile")
    }
}

/// Label/value rows for the non-empty public fields.
fn detail_rows(profile: &PublicProfile) -> Vec<(&'static str, String)> {
    [
        ("Email", &profile.email),
        ("School", &profile.school_name),
        ("Degree", &profile.degree_level),
        ("Major", &profile.major),
        ("Second Major", &profile.major2),
        ("Graduation Year", &profile.graduation_year),
        ("City", &profile.city),
        ("State", &profile.state),
        ("LinkedIn", &profile.linkedin),
        ("Instagram", &profile.instagram),
        ("Facebook", &profile.facebook),
    ]
    .into_iter()
    .filter_map(|(label, value)| {
        value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(|v| (label, v.to_owned()))
    })
    .collect()
}

#[component]
pub fn PublicProfilePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let base_url = session.base_url();
    let params = use_params_map();
    let profile = RwSignal::new(None::<PublicProfile>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(id) = params.with(|p| p.get("id")) else {
            error.set(Some(PROFILE_NOT_FOUND.to_owned()));
            loading.set(false);
            return;
        };
        loading.set(true);
        #[cfg(feature = "csr")]
        {
            let store = session.store();
            leptos::task::spawn_local(async move {
                match session::api::fetch_public_profile(store.http(), &id).await {
                    Ok(found) => {
                        profile.set(Some(found));
                        error.set(None);
                    }
                    Err(e) => error.set(Some(load_error_text(&e))),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (id, session);
    });

    view! {
        <div class="profile-page">
            <Show when=move || loading.get()>
                <p class="muted">"Loading profile..."</p>
            </Show>
            <Show when=move || !loading.get() && error.get().is_some()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
                <a href="/team" class="btn">"Back to Team"</a>
            </Show>
            {move || {
                let base_url = base_url.clone();
                profile
                    .get()
                    .filter(|_| !loading.get() && error.get().is_none())
                    .map(|p| {
                        let avatar = resolve_image_url(&base_url, p.profile_pic.as_deref());
                        let rows = detail_rows(&p);
                        view! {
                            <div class="profile-card">
                                <img class="profile-card__avatar" src=avatar alt=p.display_name()/>
                                <h2>{p.display_name()}</h2>
                                <dl class="profile-card__details">
                                    {rows
                                        .into_iter()
                                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                        .collect_view()}
                                </dl>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
