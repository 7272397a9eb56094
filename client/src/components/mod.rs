//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared page chrome (auth gating, banners, record tables)
//! while reading shared state from Leptos context providers.

pub mod alert_banner;
pub mod auth_gate;
pub mod visit_table;
