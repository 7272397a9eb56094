//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `members`, `sales`) so individual pages
//! can depend on small focused models. `session` owns the only writer of the
//! auth state.

pub mod auth;
pub mod members;
pub mod notice;
pub mod sales;
pub mod session;
