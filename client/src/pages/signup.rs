//! Member registration.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::field_inputs::FieldInputs;
use crate::state::auth::SessionContext;
use crate::util::form::{SIGNUP_FIELDS, initial_values, signup_form_from, validate};

pub const REGISTRATION_FAILED: &str = "Registration failed";

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let values = RwSignal::new(initial_values(SIGNUP_FIELDS));
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current = values.get();
        if let Err(message) = validate(SIGNUP_FIELDS, &current) {
            error.set(Some(message));
            return;
        }
        let form = signup_form_from(&current);
        error.set(None);
        busy.set(true);

        let navigate = navigate.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match session.signup(&form).await {
                Ok(_) => navigate("/welcome", leptos_router::NavigateOptions::default()),
                Err(e) => error.set(Some(e.user_message(REGISTRATION_FAILED))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        let _ = (session, navigate, form);
    };

    view! {
        <div class="auth-page auth-page--wide">
            <h2>"Become a Member"</h2>
            <Show when=move || error.get().is_some()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <form class="auth-form" on:submit=on_submit>
                <FieldInputs fields=SIGNUP_FIELDS values=values/>
                <p class="muted">"School, address, and social details can be added from your profile."</p>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Join AMSA" }}
                </button>
            </form>
        </div>
    }
}
