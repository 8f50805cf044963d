//! Program catalogue.

use leptos::prelude::*;

use crate::util::programs::{CORE_PROGRAMS, PROGRAMS};

#[component]
pub fn ProgramsPage() -> impl IntoView {
    let core = CORE_PROGRAMS.join(", ");

    view! {
        <section class="programs">
            <h2>
                "Since 2011, we've contributed to many impactful projects. Our core initiatives include "
                <span class="highlight">{core}</span>
                "."
            </h2>
            <div class="programs__list">
                {PROGRAMS
                    .iter()
                    .map(|program| {
                        view! {
                            <article class="program">
                                <img src=program.image alt=program.title class="program__image"/>
                                <div class="program__body">
                                    <h3>{program.title}</h3>
                                    <hr/>
                                    <p>{program.description}</p>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
