//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by the session guard (`state::session`); read by route gates
//! and user-aware components to decide between loading, redirect, and
//! content.
//!
//! The user lives inside the `Authenticated` variant, so "authenticated" and
//! "has a session" cannot disagree.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Where the guard is in its lifecycle.
///
/// `Uninitialized -> Checking -> {Unauthenticated, Authenticated}`; the two
/// settled states then move between each other through login, logout, and
/// expiry. Nothing returns to `Checking`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    /// The profile check has not started.
    #[default]
    Uninitialized,
    /// The startup profile check is in flight.
    Checking,
    /// Settled with no session.
    Unauthenticated,
    /// Settled with a verified profile.
    Authenticated(User),
}

impl AuthState {
    /// Settled state for the outcome of a profile fetch.
    pub fn from_profile(profile: Option<User>) -> Self {
        profile.map_or(Self::Unauthenticated, Self::Authenticated)
    }

    /// Whether the startup check has finished.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Unauthenticated | Self::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        !self.is_ready()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}
