//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::{
    admin::AdminPage, blogs::BlogsPage, home::HomePage, login::LoginPage, profile::ProfilePage, programs::ProgramsPage,
    public_profile::PublicProfilePage, signup::SignupPage, team::TeamPage, unauthorized::UnauthorizedPage,
    welcome::WelcomePage,
};
use crate::state::auth::SessionContext;

/// Root application component.
///
/// Restores the durable session before any route renders, so guards see the
/// restored state rather than a transient anonymous one.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::browser();
    session.restore();
    provide_context(session);

    view! {
        <Title text="AMSA"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("blog") view=BlogsPage/>
                    <Route path=StaticSegment("team") view=TeamPage/>
                    <Route path=StaticSegment("programs") view=ProgramsPage/>
                    <Route path=(StaticSegment("signup"), StaticSegment("member")) view=SignupPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("welcome") view=WelcomePage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                    <Route path=(StaticSegment("public-profile"), ParamSegment("id")) view=PublicProfilePage/>
                    <Route
                        path=(StaticSegment("profile"), StaticSegment("user"), ParamSegment("id"))
                        view=PublicProfilePage
                    />
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
