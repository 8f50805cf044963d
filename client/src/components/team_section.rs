use leptos::prelude::*;

use crate::util::media::FALLBACK_IMAGE;
use crate::util::programs::{FEATURED_TEAM, FEATURED_TEAM_YEAR};

#[component]
pub fn TeamSection() -> impl IntoView {
    view! {
        <section class="team-section">
            <h2>{format!("Meet Our Executive Team {FEATURED_TEAM_YEAR}")}</h2>
            <p>"Our dedicated students driving AMSA's mission across U.S. universities."</p>
            <div class="team-section__grid">
                {FEATURED_TEAM
                    .iter()
                    .map(|leader| {
                        view! {
                            <div class="leader-card">
                                <img src=FALLBACK_IMAGE alt=leader.name class="leader-card__photo"/>
                                <h3>{leader.name}</h3>
                                <p class="leader-card__role">{leader.role}</p>
                                <p>{leader.school}</p>
                                <p>{format!("Class of {}", leader.graduation)}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <a href="/team" class="btn">"See the full team"</a>
        </section>
    }
}
