//! # client
//!
//! Leptos + WASM front-end for the Rose Hair salon's staff CRM.
//!
//! Pages sit behind a single [`state::session::SessionGuard`] that tracks
//! whether the browser holds a valid backend session. Every backend call goes
//! through [`net::api::SalonApi`]; the browser build talks to the REST backend
//! with cookie credentials, other builds get an inert transport.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
