//! Landing page.

use leptos::prelude::*;

use crate::components::announcement_section::AnnouncementSection;
use crate::components::blog_preview::BlogPreview;
use crate::components::info_cta::InfoCtaSection;
use crate::components::programs_section::ProgramsSection;
use crate::components::team_section::TeamSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Association of Mongolian Students in America"</h1>
            <p>"Connecting Mongolian students across the United States."</p>
            <a href="/signup/member" class="btn btn--primary">"Become a Member"</a>
        </section>
        <AnnouncementSection/>
        <ProgramsSection/>
        <TeamSection/>
        <InfoCtaSection/>
        <BlogPreview/>
    }
}
