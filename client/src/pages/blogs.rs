//! Full blog listing with per-post expand/collapse.

use leptos::prelude::*;
use session::types::Blog;

use crate::state::auth::SessionContext;
use crate::util::media::resolve_image_url;

const COLLAPSED_CHARS: usize = 180;

#[component]
pub fn BlogsPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let base_url = session.base_url();
    let blogs = RwSignal::new(Vec::<Blog>::new());
    let expanded = RwSignal::new(None::<usize>);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    {
        let store = session.store();
        leptos::task::spawn_local(async move {
            match session::api::list_blogs(store.http()).await {
                Ok(list) => blogs.set(list),
                Err(e) => error.set(Some(e.user_message("Failed to load blogs"))),
            }
        });
    }

    view! {
        <section class="blogs-page">
            <h2>"Podcast and Blog"</h2>
            <Show when=move || error.get().is_some()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                let base_url = base_url.clone();
                blogs
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, blog)| {
                        let cover = resolve_image_url(&base_url, blog.cover_image_url.as_deref());
                        let full = blog.content.clone();
                        let short = blog.excerpt(COLLAPSED_CHARS);
                        let alt = blog.title.clone();
                        let is_open = move || expanded.get() == Some(index);
                        view! {
                            <article class="blog-post">
                                <img src=cover alt=alt/>
                                <h3>{blog.title}</h3>
                                <p>{move || if is_open() { full.clone() } else { short.clone() }}</p>
                                <button
                                    class="btn"
                                    on:click=move |_| {
                                        expanded.update(|e| *e = if *e == Some(index) { None } else { Some(index) });
                                    }
                                >
                                    {move || if is_open() { "Show Less" } else { "Read More" }}
                                </button>
                            </article>
                        }
                    })
                    .collect_view()
            }}
            <Show when=move || blogs.get().is_empty() && error.get().is_none()>
                <p class="muted">"No posts yet."</p>
            </Show>
        </section>
    }
}
