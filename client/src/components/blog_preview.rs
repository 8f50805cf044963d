//! Three most recent posts with a link to the full blog.

use leptos::prelude::*;
use session::types::Blog;

use crate::state::auth::SessionContext;
use crate::util::media::resolve_image_url;

const PREVIEW_COUNT: usize = 3;
const PREVIEW_CHARS: usize = 120;

#[component]
pub fn BlogPreview() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let base_url = session.base_url();
    let blogs = RwSignal::new(Vec::<Blog>::new());
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    {
        let store = session.store();
        leptos::task::spawn_local(async move {
            match session::api::list_blogs(store.http()).await {
                Ok(list) => blogs.set(list.into_iter().take(PREVIEW_COUNT).collect()),
                Err(e) => error.set(Some(e.user_message("Failed to load blogs"))),
            }
        });
    }

    view! {
        <section class="blog-preview">
            <h2>"Podcast and Blog"</h2>
            <Show when=move || error.get().is_some()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="blog-preview__grid">
                {move || {
                    let base_url = base_url.clone();
                    blogs
                        .get()
                        .into_iter()
                        .map(|post| {
                            let cover = resolve_image_url(&base_url, post.cover_image_url.as_deref());
                            let excerpt = post.excerpt(PREVIEW_CHARS);
                            let alt = post.title.clone();
                            view! {
                                <article class="blog-card">
                                    <img src=cover alt=alt/>
                                    <h3>{post.title}</h3>
                                    <p>{excerpt}</p>
                                    <a href="/blog">"Read More"</a>
                                </article>
                            }
                        })
                        .collect_view()
                }}
                <Show when=move || blogs.get().is_empty() && error.get().is_none()>
                    <p class="muted">"No posts yet."</p>
                </Show>
            </div>
        </section>
    }
}
