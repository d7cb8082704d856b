//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page paths are not registered with Axum. Everything except the health and
//! API endpoints falls through to `pages::serve`, which asks the page router
//! for a match and otherwise hands the request to the static file layer.

pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/routes", get(pages::list_routes))
        .fallback(pages::serve)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
