//! Site header with session-aware actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::SessionContext;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let auth = session.state;
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <header class="navbar">
            <a href="/" class="navbar__brand">
                <img src="/assets/logo.png" alt="AMSA Logo" class="navbar__logo"/>
                <span>"Association of Mongolian Students in America"</span>
            </a>
            <nav class="navbar__links">
                <a href="/">"Home"</a>
                <a href="/programs">"Programs"</a>
                <a href="/team">"Team"</a>
                <a href="/blog">"Blog"</a>
            </nav>
            <div class="navbar__actions">
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <a href="/signup/member" class="btn btn--primary">"Become a Member"</a>
                            <a href="/login" class="btn">"Login"</a>
                        }
                    }
                >
                    <a href="/profile" class="btn">"Profile"</a>
                    <Show when=move || auth.get().is_admin()>
                        <a href="/admin" class="btn">"Admin"</a>
                    </Show>
                    <button class="btn" on:click=on_logout.clone()>"Logout"</button>
                </Show>
            </div>
        </header>
    }
}
