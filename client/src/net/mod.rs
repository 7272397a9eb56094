//! Networking modules for the salon backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the REST transport and its error type, and `types` defines the
//! wire schema shared by pages and the session guard.

pub mod api;
pub mod types;
