//! Email + password login.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::SessionContext;

pub const LOGIN_FAILED: &str = "Login failed";

/// Trim the email; the password is sent as typed.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(input) => input,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        let navigate = navigate.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match session.login(&email_value, &password_value).await {
                Ok(user) => {
                    let target = crate::util::guard::landing_route(&user);
                    navigate(target, leptos_router::NavigateOptions::default());
                }
                Err(e) => error.set(Some(e.user_message(LOGIN_FAILED))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        let _ = (session, navigate, email_value, password_value);
    };

    view! {
        <div class="auth-page">
            <h2>"Login"</h2>
            <form class="auth-form" on:submit=on_submit>
                <Show when=move || error.get().is_some()>
                    <p class="error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <label class="field">
                    <span class="field__label">"Email"</span>
                    <input
                        class="input"
                        type="email"
                        placeholder="your@amsa.com"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Password"</span>
                    <input
                        class="input"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
