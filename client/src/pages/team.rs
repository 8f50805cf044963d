//! Leadership roster: strategy board, current executive team, past years.

#[cfg(test)]
#[path = "team_test.rs"]
mod team_test;

use leptos::prelude::*;
use session::types::{MemberDirectory, Membership};

use crate::components::user_card::UserCard;
use crate::state::auth::SessionContext;

const LOAD_FAILED: &str = "Failed to load team members. Please try again later.";

/// Calendar year on the viewer's clock.
pub(crate) fn current_year() -> i32 {
    #[cfg(feature = "csr")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(i32::MAX)
    }
    #[cfg(not(feature = "csr"))]
    {
        const SECONDS_PER_YEAR: u64 = 31_556_952;
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        1970 + i32::try_from(secs / SECONDS_PER_YEAR).unwrap_or_default()
    }
}

/// Members of a past year, or nothing when no year is selected.
fn members_for_year(directory: &MemberDirectory, year: Option<&str>) -> Vec<Membership> {
    year.and_then(|y| directory.tuz.get(y)).cloned().unwrap_or_default()
}

fn cards(members: Vec<Membership>) -> impl IntoView {
    view! {
        <div class="team-grid">
            {members.into_iter().map(|membership| view! { <UserCard membership=membership/> }).collect_view()}
        </div>
    }
}

#[component]
pub fn TeamPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let directory = RwSignal::new(MemberDirectory::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let selected_year = RwSignal::new(None::<String>);
    let this_year = current_year();

    #[cfg(feature = "csr")]
    {
        let store = session.store();
        leptos::task::spawn_local(async move {
            match session::api::list_members(store.http()).await {
                Ok(members) => directory.set(members),
                Err(e) => {
                    log::warn!("member directory load failed: {e}");
                    error.set(Some(LOAD_FAILED.to_owned()));
                }
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = session;

    let years = move || directory.with(|d| d.historical_years(this_year));

    view! {
        <div class="team-page">
            <Show when=move || loading.get()>
                <p class="muted">"Loading team members..."</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || directory.with(|d| !d.sb.is_empty())>
                <section>
                    <h2>"Strategy Board"</h2>
                    {move || cards(directory.get().sb)}
                </section>
            </Show>
            <Show when=move || directory.with(|d| !d.current_tuz.is_empty())>
                <section>
                    <h2>"Executive Team " {this_year}</h2>
                    {move || cards(directory.get().current_tuz)}
                </section>
            </Show>
            <Show when=move || !years().is_empty()>
                <section>
                    <h2>"Historical Executive Teams"</h2>
                    <label for="year-select">"Select a year to view past Executive Team members:"</label>
                    <select
                        id="year-select"
                        prop:value=move || selected_year.get().unwrap_or_default()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            selected_year.set((!value.is_empty()).then_some(value));
                        }
                    >
                        <option value="">"-- Select a year --"</option>
                        {move || {
                            years()
                                .into_iter()
                                .map(|year| view! { <option value=year.clone()>{year.clone()}</option> })
                                .collect_view()
                        }}
                    </select>
                    {move || {
                        let year = selected_year.get();
                        let members = directory.with(|d| members_for_year(d, year.as_deref()));
                        cards(members)
                    }}
                </section>
            </Show>
            <Show when=move || !loading.get() && error.get().is_none() && directory.with(MemberDirectory::is_empty)>
                <p class="muted">"No team members yet."</p>
            </Show>
        </div>
    }
}
