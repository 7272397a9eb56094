//! Session guard: the single owner of "who is signed in".
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one [`Session`] at startup, provides it as context, and runs
//! [`SessionGuard::initialize`] once in the browser. Pages never write the
//! auth state themselves; they call `login`/`logout` here and observe the
//! published [`AuthState`] through the store.
//!
//! DESIGN
//! ======
//! The guard is generic over the backend seam ([`SalonApi`]) and over where
//! states are published ([`SessionStore`]). In the app the store is an
//! `RwSignal<AuthState>`, so every reactive consumer re-renders in publish
//! order; tests use a recording store instead.
//!
//! Transitions are not reentrant-safe. Forms disable their submit button
//! while a call is in flight, and a call's result is applied even if the page
//! that started it has gone away.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;

use leptos::logging::{log, warn};
use leptos::prelude::*;

use super::auth::AuthState;
use crate::net::api::{ApiError, HttpApi, SalonApi};
use crate::net::types::{Credentials, User};

/// Result of a login attempt: the verified profile, or why it failed.
pub type AuthOutcome = Result<User, ApiError>;

/// The guard as wired into the app: browser transport, signal-backed state.
pub type Session = SessionGuard<HttpApi, RwSignal<AuthState>>;

/// Destination for published auth states.
pub trait SessionStore {
    /// Current state, read without subscribing.
    fn snapshot(&self) -> AuthState;

    /// Replace the current state and notify observers.
    fn publish(&self, state: AuthState);
}

impl SessionStore for RwSignal<AuthState> {
    fn snapshot(&self) -> AuthState {
        self.get_untracked()
    }

    fn publish(&self, state: AuthState) {
        self.set(state);
    }
}

/// Owns the auth state and serializes the transitions that change it.
#[derive(Clone, Debug)]
pub struct SessionGuard<A, S> {
    api: A,
    store: S,
}

impl<A, S> SessionGuard<A, S>
where
    A: SalonApi,
    S: SessionStore,
{
    /// Create a guard whose store should still hold `AuthState::Uninitialized`.
    pub fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    /// Backend used for protected calls; wrap them in [`Self::authorized`].
    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn state(&self) -> AuthState {
        self.store.snapshot()
    }

    pub fn is_ready(&self) -> bool {
        self.state().is_ready()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    pub fn user(&self) -> Option<User> {
        self.state().user().cloned()
    }

    /// Run the startup profile check.
    ///
    /// Every failure (401, network, bad body) settles to `Unauthenticated`
    /// and is only logged. Calls after the first are ignored, and the result is
    /// discarded if `login` or `logout` settled the state in the meantime.
    pub async fn initialize(&self) {
        if self.store.snapshot() != AuthState::Uninitialized {
            return;
        }
        self.store.publish(AuthState::Checking);

        let profile = match self.api.profile().await {
            Ok(user) => Some(user),
            Err(e) => {
                log!("session check: not signed in ({e})");
                None
            }
        };
        // A login that finished while the check was in flight wins.
        if self.store.snapshot() == AuthState::Checking {
            self.store.publish(AuthState::from_profile(profile));
        }
    }

    /// Sign in, then confirm the session with a profile fetch.
    ///
    /// # Errors
    ///
    /// Returns the login error unchanged (session untouched), or the profile
    /// error when the backend accepted the credentials but the session could
    /// not be verified (session left empty).
    pub async fn login(&self, credentials: &Credentials) -> AuthOutcome {
        self.api.login(credentials).await?;

        match self.api.profile().await {
            Ok(user) => {
                log!("signed in as {}", user.username);
                self.store.publish(AuthState::Authenticated(user.clone()));
                Ok(user)
            }
            Err(e) => {
                warn!("login accepted but profile check failed: {e}");
                self.drop_session();
                Err(e)
            }
        }
    }

    /// Sign out. The local session is cleared whatever the backend answers.
    pub async fn logout(&self) {
        if let Err(e) = self.api.logout().await {
            warn!("logout request failed: {e}");
        }
        self.store.publish(AuthState::Unauthenticated);
    }

    /// Drop a session the backend no longer honours.
    pub fn expire(&self) {
        if self.store.snapshot().is_authenticated() {
            warn!("session rejected by backend; signing out locally");
            self.store.publish(AuthState::Unauthenticated);
        }
    }

    /// Await a protected backend call, expiring the session on 401.
    ///
    /// # Errors
    ///
    /// Returns the call's error unchanged.
    pub async fn authorized<T, F>(&self, call: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let result = call.await;
        if let Err(e) = &result {
            if e.is_unauthorized() {
                self.expire();
            }
        }
        result
    }

    fn drop_session(&self) {
        if self.store.snapshot().is_authenticated() {
            self.store.publish(AuthState::Unauthenticated);
        }
    }
}
