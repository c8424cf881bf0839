//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Leptos SSR app, its `/pkg` assets and a health probe. Auth and
//! post APIs belong to the backend services and are reached through the
//! same origin by the deployment's reverse proxy, not by this binary.

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

use crate::config::{ConfigError, ServerConfig};

/// Routes that do not depend on Leptos configuration.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application router: base routes + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(parking_client::app::App);
    tracing::debug!(count = routes.len(), "leptos routes generated");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || parking_client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(parking_client::app::shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http());

    Ok(if config.compression { router.layer(CompressionLayer::new()) } else { router })
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
