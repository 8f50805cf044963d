//! Program highlight cards on the home page.

use leptos::prelude::*;

use crate::util::programs::{HIGHLIGHTS, find_program};

#[component]
pub fn ProgramsSection() -> impl IntoView {
    view! {
        <section class="programs-section">
            <h2>"Our Programs"</h2>
            <div class="programs-section__grid">
                {HIGHLIGHTS
                    .iter()
                    .map(|(short, blurb, image)| {
                        let title = find_program(short).map_or(*short, |p| p.title);
                        view! {
                            <div class="program-card" style=format!("background-image: url({image})")>
                                <h3>{title}</h3>
                                <p>{*blurb}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <a href="/programs" class="btn">"Explore All Programs"</a>
        </section>
    }
}
