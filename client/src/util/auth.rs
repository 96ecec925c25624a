//! Shared auth redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior once the
//! session has settled: private pages bounce anonymous visitors to `/login`,
//! the login and register pages bounce signed-in visitors to `/dashboard`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::{Route, SessionState};

/// Whether a private page should redirect to login.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    state.is_anonymous()
}

/// Whether a public auth page should redirect to the dashboard.
pub fn should_redirect_authed(state: &SessionState) -> bool {
    state.is_authenticated()
}

/// Redirect to `/login` whenever the session settles as anonymous.
pub fn install_unauth_redirect<F>(state: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if state.with(should_redirect_unauth) {
            navigate(Route::Login.path(), NavigateOptions::default());
        }
    });
}

/// Redirect to `/dashboard` whenever a user is signed in.
pub fn install_authed_redirect<F>(state: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if state.with(should_redirect_authed) {
            navigate(Route::Dashboard.path(), NavigateOptions::default());
        }
    });
}
