//! Latest announcements on the home page.

use leptos::prelude::*;
use session::types::Announcement;

use crate::state::auth::SessionContext;
use crate::util::media::resolve_image_url;

/// Cards shown on the home page.
pub const HOME_ANNOUNCEMENT_COUNT: usize = 3;

#[component]
pub fn AnnouncementSection() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let base_url = session.base_url();
    let items = RwSignal::new(Vec::<Announcement>::new());
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    {
        let store = session.store();
        leptos::task::spawn_local(async move {
            match session::api::list_announcements(store.http()).await {
                Ok(list) => items.set(list.into_iter().take(HOME_ANNOUNCEMENT_COUNT).collect()),
                Err(e) => error.set(Some(e.user_message("Failed to load announcements"))),
            }
        });
    }

    view! {
        <section class="announcements">
            <h2>"Announcements"</h2>
            <Show when=move || error.get().is_some()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="announcements__grid">
                {move || {
                    let base_url = base_url.clone();
                    items
                        .get()
                        .into_iter()
                        .map(|item| {
                            let cover = resolve_image_url(&base_url, item.cover_image_url.as_deref());
                            view! {
                                <div class="announcement" style=format!("background-image: url({cover})")>
                                    <h3>{item.title}</h3>
                                    <p>{item.body}</p>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                <Show when=move || items.get().is_empty() && error.get().is_none()>
                    <p class="muted">"No announcements yet."</p>
                </Show>
            </div>
        </section>
    }
}
