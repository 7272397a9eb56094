//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host server only renders the Leptos app and serves its compiled assets.
//! All salon data lives in the separate backend the browser calls directly.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Routes that do not depend on the Leptos build.
pub fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Load site options from `[package.metadata.leptos]` (or `LEPTOS_*` env).
///
/// # Errors
///
/// Returns [`ServerError::Leptos`] when the configuration is missing or
/// malformed.
pub fn leptos_options() -> Result<LeptosOptions, ServerError> {
    get_configuration(None)
        .map(|conf| conf.leptos_options)
        .map_err(|e| ServerError::Leptos(e.to_string()))
}

/// Full application: health check, SSR pages, and `/pkg` assets.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
