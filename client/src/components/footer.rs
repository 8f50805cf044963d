//! Site-wide footer with contact links.

use leptos::prelude::*;

use crate::pages::team::current_year;

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Instagram", "https://instagram.com"),
    ("Facebook", "https://facebook.com"),
    ("LinkedIn", "https://linkedin.com"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="footer" id="contact">
            <div class="footer__intro">
                <h2>"Association of Mongolian Students in America will always be here for you"</h2>
                <p>"Feel free to reach out. Our Instagram is always online and is often the fastest way to reach us."</p>
                <div class="footer__links">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a href=*href target="_blank" rel="noreferrer">
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <p class="footer__copyright">{format!("© {year} AMSA. All rights reserved.")}</p>
        </footer>
    }
}
