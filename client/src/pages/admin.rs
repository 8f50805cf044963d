//! Admin dashboard: blog and announcement management.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anonymous visitors go to `/login` and members to `/unauthorized`. Both
//! lists load concurrently through the authenticated wrapper; each create,
//! update, or delete reloads them.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::types::{Announcement, AnnouncementDraft, Blog, BlogDraft, RecordId};

use crate::state::auth::SessionContext;
use crate::util::guard::{Gate, admin_gate, install_gate};

/// Title and content are required; a blank cover URL is omitted.
fn blog_draft_from(title: &str, content: &str, cover: &str) -> Result<BlogDraft, &'static str> {
    let (title, content, cover) = (title.trim(), content.trim(), cover.trim());
    if title.is_empty() || content.is_empty() {
        return Err("Blog title and content are required.");
    }
    Ok(BlogDraft {
        title: title.to_owned(),
        content: content.to_owned(),
        cover_image_url: (!cover.is_empty()).then(|| cover.to_owned()),
    })
}

fn announcement_draft_from(title: &str, body: &str) -> Result<AnnouncementDraft, &'static str> {
    let (title, body) = (title.trim(), body.trim());
    if title.is_empty() || body.is_empty() {
        return Err("Announcement title and body are required.");
    }
    Ok(AnnouncementDraft { title: title.to_owned(), body: body.to_owned() })
}

#[derive(Clone, Copy)]
struct BlogForm {
    editing: RwSignal<Option<RecordId>>,
    title: RwSignal<String>,
    content: RwSignal<String>,
    cover: RwSignal<String>,
}

impl BlogForm {
    fn new() -> Self {
        Self {
            editing: RwSignal::new(None),
            title: RwSignal::new(String::new()),
            content: RwSignal::new(String::new()),
            cover: RwSignal::new(String::new()),
        }
    }

    fn load(&self, blog: &Blog) {
        let draft = BlogDraft::from(blog);
        self.editing.set(Some(blog.id.clone()));
        self.title.set(draft.title);
        self.content.set(draft.content);
        self.cover.set(draft.cover_image_url.unwrap_or_default());
    }

    fn reset(&self) {
        self.editing.set(None);
        self.title.set(String::new());
        self.content.set(String::new());
        self.cover.set(String::new());
    }
}

#[derive(Clone, Copy)]
struct AnnouncementForm {
    editing: RwSignal<Option<RecordId>>,
    title: RwSignal<String>,
    body: RwSignal<String>,
}

impl AnnouncementForm {
    fn new() -> Self {
        Self {
            editing: RwSignal::new(None),
            title: RwSignal::new(String::new()),
            body: RwSignal::new(String::new()),
        }
    }

    fn load(&self, item: &Announcement) {
        let draft = AnnouncementDraft::from(item);
        self.editing.set(Some(item.id.clone()));
        self.title.set(draft.title);
        self.body.set(draft.body);
    }

    fn reset(&self) {
        self.editing.set(None);
        self.title.set(String::new());
        self.body.set(String::new());
    }
}

#[derive(Clone, Copy)]
struct AdminData {
    session: SessionContext,
    blogs: RwSignal<Vec<Blog>>,
    announcements: RwSignal<Vec<Announcement>>,
    error: RwSignal<Option<String>>,
    busy: RwSignal<bool>,
}

impl AdminData {
    /// Fetch both lists at once.
    fn reload(self) {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let store = self.session.store();
            let authed = store.authed();
            let (blogs, announcements) = futures::join!(
                session::api::list_blogs(&authed),
                session::api::list_announcements(&authed)
            );
            match (blogs, announcements) {
                (Ok(blogs), Ok(announcements)) => {
                    self.blogs.set(blogs);
                    self.announcements.set(announcements);
                    self.error.set(None);
                }
                (Err(e), _) | (_, Err(e)) => self.error.set(Some(e.user_message("Failed to load data"))),
            }
        });
    }

    fn save_blog(self, form: BlogForm) {
        let draft = match blog_draft_from(&form.title.get(), &form.content.get(), &form.cover.get()) {
            Ok(draft) => draft,
            Err(message) => {
                self.error.set(Some(message.to_owned()));
                return;
            }
        };
        let editing = form.editing.get();
        self.busy.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let store = self.session.store();
            let result = match &editing {
                Some(id) => session::api::update_blog(&store.authed(), id, &draft).await,
                None => session::api::create_blog(&store.authed(), &draft).await,
            };
            match result {
                Ok(_) => {
                    form.reset();
                    self.reload();
                }
                Err(e) => {
                    let fallback = if editing.is_some() { "Failed to update blog" } else { "Failed to create blog" };
                    self.error.set(Some(e.user_message(fallback)));
                }
            }
            self.busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        let _ = (draft, editing);
    }

    fn delete_blog(self, id: RecordId) {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let store = self.session.store();
            match session::api::delete_blog(&store.authed(), &id).await {
                Ok(()) => self.blogs.update(|list| list.retain(|b| b.id != id)),
                Err(e) => self.error.set(Some(e.user_message("Failed to delete blog"))),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = id;
    }

    fn save_announcement(self, form: AnnouncementForm) {
        let draft = match announcement_draft_from(&form.title.get(), &form.body.get()) {
            Ok(draft) => draft,
            Err(message) => {
                self.error.set(Some(message.to_owned()));
                return;
            }
        };
        let editing = form.editing.get();
        self.busy.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let store = self.session.store();
            let result = match &editing {
                Some(id) => session::api::update_announcement(&store.authed(), id, &draft).await,
                None => session::api::create_announcement(&store.authed(), &draft).await,
            };
            match result {
                Ok(_) => {
                    form.reset();
                    self.reload();
                }
                Err(e) => {
                    let fallback = if editing.is_some() {
                        "Failed to update announcement"
                    } else {
                        "Failed to create announcement"
                    };
                    self.error.set(Some(e.user_message(fallback)));
                }
            }
            self.busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        let _ = (draft, editing);
    }

    fn delete_announcement(self, id: RecordId) {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let store = self.session.store();
            match session::api::delete_announcement(&store.authed(), &id).await {
                Ok(()) => self.announcements.update(|list| list.retain(|a| a.id != id)),
                Err(e) => self.error.set(Some(e.user_message("Failed to delete announcement"))),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = id;
    }
}

#[component]
#[allow(clippy::too_many_lines)]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let auth = session.state;
    install_gate(auth, admin_gate, use_navigate());

    let data = AdminData {
        session,
        blogs: RwSignal::new(Vec::new()),
        announcements: RwSignal::new(Vec::new()),
        error: RwSignal::new(None),
        busy: RwSignal::new(false),
    };
    let blog_form = BlogForm::new();
    let announcement_form = AnnouncementForm::new();

    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if !loaded.get() && auth.with(admin_gate) == Gate::Allow {
            loaded.set(true);
            data.reload();
        }
    });

    let greeting = move || auth.get().user.map(|u| u.display_name()).unwrap_or_default();

    view! {
        <Show when=move || auth.with(admin_gate) == Gate::Allow>
            <div class="admin-page">
                <header class="admin-page__header">
                    <div>
                        <h1>"Admin Dashboard"</h1>
                        <p>"Welcome, " {greeting}</p>
                    </div>
                    <a href="/">"Back to site"</a>
                </header>
                <Show when=move || data.error.get().is_some()>
                    <p class="error">{move || data.error.get().unwrap_or_default()}</p>
                </Show>

                <div class="admin-page__columns">
                    <section>
                        <h2>"Blogs"</h2>
                        <form
                            class="admin-form"
                            on:submit=move |ev: leptos::ev::SubmitEvent| {
                                ev.prevent_default();
                                data.save_blog(blog_form);
                            }
                        >
                            <input
                                class="input"
                                placeholder="Title"
                                prop:value=move || blog_form.title.get()
                                on:input=move |ev| blog_form.title.set(event_target_value(&ev))
                            />
                            <input
                                class="input"
                                placeholder="Cover Image URL (optional)"
                                prop:value=move || blog_form.cover.get()
                                on:input=move |ev| blog_form.cover.set(event_target_value(&ev))
                            />
                            <textarea
                                class="input"
                                placeholder="Content"
                                prop:value=move || blog_form.content.get()
                                on:input=move |ev| blog_form.content.set(event_target_value(&ev))
                            ></textarea>
                            <button class="btn btn--primary" type="submit" disabled=move || data.busy.get()>
                                {move || match (data.busy.get(), blog_form.editing.get().is_some()) {
                                    (true, _) => "Saving...",
                                    (false, true) => "Update Blog",
                                    (false, false) => "Create Blog",
                                }}
                            </button>
                            <Show when=move || blog_form.editing.get().is_some()>
                                <button class="btn" type="button" on:click=move |_| blog_form.reset()>
                                    "Cancel"
                                </button>
                            </Show>
                        </form>
                        <ul class="admin-list">
                            {move || {
                                data.blogs
                                    .get()
                                    .into_iter()
                                    .map(|blog| {
                                        let id = blog.id.clone();
                                        let title = blog.title.clone();
                                        let excerpt = blog.excerpt(80);
                                        view! {
                                            <li class="admin-list__item">
                                                <strong>{title}</strong>
                                                <p>{excerpt}</p>
                                                <button class="btn" on:click=move |_| blog_form.load(&blog)>"Edit"</button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| data.delete_blog(id.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </section>

                    <section>
                        <h2>"Announcements"</h2>
                        <form
                            class="admin-form"
                            on:submit=move |ev: leptos::ev::SubmitEvent| {
                                ev.prevent_default();
                                data.save_announcement(announcement_form);
                            }
                        >
                            <input
                                class="input"
                                placeholder="Title"
                                prop:value=move || announcement_form.title.get()
                                on:input=move |ev| announcement_form.title.set(event_target_value(&ev))
                            />
                            <textarea
                                class="input"
                                placeholder="Body"
                                prop:value=move || announcement_form.body.get()
                                on:input=move |ev| announcement_form.body.set(event_target_value(&ev))
                            ></textarea>
                            <button class="btn btn--primary" type="submit" disabled=move || data.busy.get()>
                                {move || match (data.busy.get(), announcement_form.editing.get().is_some()) {
                                    (true, _) => "Saving...",
                                    (false, true) => "Update Announcement",
                                    (false, false) => "Create Announcement",
                                }}
                            </button>
                            <Show when=move || announcement_form.editing.get().is_some()>
                                <button class="btn" type="button" on:click=move |_| announcement_form.reset()>
                                    "Cancel"
                                </button>
                            </Show>
                        </form>
                        <ul class="admin-list">
                            {move || {
                                data.announcements
                                    .get()
                                    .into_iter()
                                    .map(|item| {
                                        let id = item.id.clone();
                                        let title = item.title.clone();
                                        let body = item.body.clone();
                                        view! {
                                            <li class="admin-list__item">
                                                <strong>{title}</strong>
                                                <p>{body}</p>
                                                <button class="btn" on:click=move |_| announcement_form.load(&item)>
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| data.delete_announcement(id.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </section>
                </div>
            </div>
        </Show>
    }
}
