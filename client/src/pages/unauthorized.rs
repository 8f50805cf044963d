use leptos::prelude::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <h2>"Unauthorized"</h2>
            <p>"You do not have permission to view this page."</p>
            <a href="/" class="btn btn--primary">"Go Home"</a>
            <a href="/login" class="btn">"Login"</a>
        </div>
    }
}
