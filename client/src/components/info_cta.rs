//! "Are you a Mongolian student in the US?" links.

use leptos::prelude::*;

use crate::util::programs::CALLS_TO_ACTION;

#[component]
pub fn InfoCtaSection() -> impl IntoView {
    view! {
        <section class="info-cta">
            <h2>"Are you a " <span class="tag">"Mongolian"</span> " student in " <span class="tag">"US"</span> "?"</h2>
            <div class="info-cta__list">
                {CALLS_TO_ACTION
                    .iter()
                    .map(|(label, action, href)| {
                        view! {
                            <a href=*href class="info-cta__item">
                                <span class="info-cta__label">{*label}</span>
                                <span class="info-cta__action">{format!("{action} →")}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
