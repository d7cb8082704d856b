//! Page rendering and static fallback.
//!
//! Request order:
//! 1. A path the route table knows renders that view.
//! 2. SPA mode: files other than HTML come from the entry directory, every
//!    other path gets the entry `index.html`.
//! 3. Otherwise any file under the site root is served as-is.
//! 4. A missing file with an extension is a 404. Anything else is a page
//!    navigation with no view and renders an empty page.

use std::path::Path;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Json, Response};
use serde::Serialize;
use tower_http::services::ServeDir;

use crate::pages::{NOT_FOUND_HTML, View, document};
use crate::router::Router;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RouteSummary {
    pub path: &'static str,
    pub view: View,
    pub heading: &'static str,
}

/// `GET /api/routes` — the route table in registration order.
pub async fn list_routes(State(state): State<AppState>) -> Json<Vec<RouteSummary>> {
    let routes = state
        .routes
        .routes()
        .iter()
        .map(|route| RouteSummary { path: route.path, view: route.view, heading: route.view.heading() })
        .collect();
    Json(routes)
}

/// Fallback handler for every path not claimed by an API route.
pub async fn serve(State(state): State<AppState>, mut req: Request) -> Response {
    if !matches!(*req.method(), Method::GET | Method::HEAD) {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let path = req.uri().path().to_string();
    let mut router = Router::new(Arc::clone(&state.routes));
    let fragment = router.navigate(path.as_str());
    tracing::debug!(state = ?router.state(), "page navigation");

    if let Some(fragment) = fragment {
        return Html(document(Some(&fragment))).into_response();
    }

    if let Some(entry) = state.spa_entry.as_deref() {
        if is_asset_path(&path) && !is_html_path(&path) {
            return find_file(entry, req).await.unwrap_or_else(|| not_found(&path));
        }
        *req.uri_mut() = Uri::from_static("/index.html");
        return find_file(entry, req)
            .await
            .unwrap_or_else(|| not_found("/index.html"));
    }

    if let Some(root) = state.site_root.as_deref() {
        if let Some(res) = find_file(root, req).await {
            return res;
        }
    }

    if is_asset_path(&path) {
        return not_found(&path);
    }

    Html(document(None)).into_response()
}

/// Serve `req` from `root`. `None` when there is no file for the path.
async fn find_file(root: &Path, req: Request) -> Option<Response> {
    let path = req.uri().path().to_string();
    let mut dir = ServeDir::new(root);
    match dir.try_call(req).await {
        Ok(res) if res.status() == StatusCode::NOT_FOUND => None,
        Ok(res) => Some(res.into_response()),
        Err(e) => {
            tracing::error!(error = %e, %path, "static file read failed");
            Some(StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
    }
}

fn not_found(path: &str) -> Response {
    tracing::warn!(%path, "not found");
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_HTML)).into_response()
}

/// True when the last path segment has a file extension.
pub(crate) fn is_asset_path(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .is_some_and(|segment| Path::new(segment).extension().is_some())
}

/// HTML documents are page navigations in SPA mode.
pub(crate) fn is_html_path(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}
