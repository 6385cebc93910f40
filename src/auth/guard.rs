//! Pre-navigation authorization checks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components wrap their content in [`Guarded`] so every navigation
//! attempt re-evaluates the same two checkpoints: authentication first
//! (deny → login view), then the route's required-role set with OR
//! semantics (deny → the authenticated landing page, since the user is
//! merely under-privileged). Nothing is cached between navigations.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::session::{Session, SessionState};

/// Login view used when checkpoint 1 denies.
pub const LOGIN_PATH: &str = "/auth/login";
/// Safe default view used when checkpoint 2 denies.
pub const OVERVIEW_PATH: &str = "/dashboard";

/// Outcome of evaluating a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectToLogin,
    RedirectToOverview,
}

/// Pure guard decision for a session and a route's required roles.
///
/// An empty `required_roles` list means the route only needs
/// authentication.
pub fn evaluate(state: &SessionState, required_roles: &[&str]) -> GuardOutcome {
    if !state.is_authenticated() {
        return GuardOutcome::RedirectToLogin;
    }
    if !required_roles.is_empty() && !required_roles.iter().any(|role| state.has_role(role)) {
        return GuardOutcome::RedirectToOverview;
    }
    GuardOutcome::Allow
}

/// Wrapper that renders its children only while the guard allows them,
/// performing the deny-path redirects as side effects.
#[component]
pub fn Guarded(
    /// Roles accepted for this view; any single match suffices.
    #[prop(optional)]
    roles: &'static [&'static str],
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    Effect::new(move || match evaluate(&session.get(), roles) {
        GuardOutcome::Allow => {}
        GuardOutcome::RedirectToLogin => navigate(LOGIN_PATH, NavigateOptions::default()),
        GuardOutcome::RedirectToOverview => navigate(OVERVIEW_PATH, NavigateOptions::default()),
    });

    view! {
        <Show when=move || {
            matches!(evaluate(&session.get(), roles), GuardOutcome::Allow)
        }>{children()}</Show>
    }
}
