//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior. Protected pages send
//! signed-out users to `/login`; guest pages (login, register) send signed-in
//! users to `/`. No decision is made until the session check has settled.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// What a protected page renders for a given auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateView {
    /// Session check still running: neutral placeholder, no redirect yet.
    Loading,
    /// Settled without a session: render nothing while the redirect happens.
    Hidden,
    /// Settled with a session.
    Content,
}

pub fn protected_view(state: &AuthState) -> GateView {
    match state {
        AuthState::Uninitialized | AuthState::Checking => GateView::Loading,
        AuthState::Unauthenticated => GateView::Hidden,
        AuthState::Authenticated(_) => GateView::Content,
    }
}

/// Protected pages leave once the check settled without a user.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.is_ready() && !state.is_authenticated()
}

/// Guest pages leave once a user is signed in.
pub fn should_redirect_authed(state: &AuthState) -> bool {
    state.is_authenticated()
}

/// Redirect to `/login` whenever auth has settled and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Redirect to `/` whenever a user is signed in.
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_authed(&auth.get()) {
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });
}
