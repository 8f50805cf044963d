//! Leadership card linking to the member's profile.

use leptos::prelude::*;
use session::types::Membership;

use crate::state::auth::SessionContext;
use crate::util::guard::profile_link;
use crate::util::media::resolve_image_url;

#[component]
pub fn UserCard(membership: Membership) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let auth = session.state;

    let name = membership.display_name();
    let position = membership.name.clone();
    let user = membership.user.unwrap_or_default();
    let image = resolve_image_url(&session.base_url(), user.profile_pic.as_deref());
    let user_id = membership.user_id;
    let href = move || {
        user_id
            .as_ref()
            .map(|id| profile_link(id, auth.get().is_authenticated()))
            .unwrap_or_else(|| "/team".to_owned())
    };
    let label = format!("View profile of {name}, {position}");
    let alt = format!("{name}, {position}");

    view! {
        <a href=href class="user-card" aria-label=label>
            <h3 class="user-card__name">{name}</h3>
            <p class="user-card__position">{position}</p>
            <img class="user-card__avatar" src=image alt=alt loading="lazy"/>
            {user.email.map(|email| view! { <div class="user-card__line">{email}</div> })}
            {user.school_name.map(|school| view! { <div class="user-card__line">{school}</div> })}
        </a>
    }
}
