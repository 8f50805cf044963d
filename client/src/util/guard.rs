//! Route gating and post-auth navigation targets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages must not decide anything while the session is still
//! restoring, otherwise a returning member would bounce to `/login` on every
//! reload. The decisions are plain functions over [`AuthState`]; the Leptos
//! wiring is a single effect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::{UserId, UserSummary};

use crate::state::auth::AuthState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Session still restoring.
    Wait,
    Allow,
    Redirect(&'static str),
}

/// Any signed-in user.
pub fn member_gate(state: &AuthState) -> Gate {
    if state.loading {
        Gate::Wait
    } else if state.user.is_none() {
        Gate::Redirect("/login")
    } else {
        Gate::Allow
    }
}

/// Signed-in admins only.
pub fn admin_gate(state: &AuthState) -> Gate {
    match member_gate(state) {
        Gate::Allow if !state.is_admin() => Gate::Redirect("/unauthorized"),
        gate => gate,
    }
}

/// The welcome page sends anonymous visitors home instead of to login.
pub fn welcome_gate(state: &AuthState) -> Gate {
    match member_gate(state) {
        Gate::Redirect(_) => Gate::Redirect("/"),
        gate => gate,
    }
}

/// Where a fresh login lands.
pub fn landing_route(user: &UserSummary) -> &'static str {
    if user.is_admin() { "/admin" } else { "/welcome" }
}

/// Member cards open the full profile for signed-in viewers.
pub fn profile_link(id: &UserId, signed_in: bool) -> String {
    if signed_in {
        format!("/profile/user/{id}")
    } else {
        format!("/public-profile/{id}")
    }
}

/// Navigate away whenever `gate` resolves to a redirect.
pub fn install_gate<F>(auth: RwSignal<AuthState>, gate: fn(&AuthState) -> Gate, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Gate::Redirect(target) = auth.with(gate) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
