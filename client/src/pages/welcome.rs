//! Post-signup landing page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::SessionContext;
use crate::util::guard::{install_gate, welcome_gate};

#[component]
pub fn WelcomePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let auth = session.state;
    install_gate(auth, welcome_gate, use_navigate());

    let name = move || auth.get().user.map(|u| u.display_name()).unwrap_or_default();

    view! {
        <Show when=move || auth.get().is_authenticated()>
            <div class="welcome-page">
                <h2>"Welcome, " {name}</h2>
                <p>"You are now an official AMSA member."</p>
                <img src="/assets/Hero-alt2.png" alt="AMSA community"/>
                <div class="welcome-page__actions">
                    <a href="/" class="btn btn--primary">"Go to Home"</a>
                    <a href="/profile" class="btn">"Complete your profile"</a>
                </div>
            </div>
        </Show>
    }
}
