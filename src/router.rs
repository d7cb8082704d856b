//! Path-to-view routing.
//!
//! DESIGN
//! ======
//! `RouteTable` is built once at startup and shared behind an `Arc`; it is
//! never mutated. A `Router` holds a handle to that table and tracks which
//! path it last resolved. Matching is exact string equality in registration
//! order.
//!
//! An unmatched path is not an error. `navigate` records it like any other
//! path and yields no fragment, which callers render as an empty page.

use std::sync::Arc;

use crate::pages::{Fragment, View};

// =============================================================================
// ROUTE TABLE
// =============================================================================

/// Exact-match association between a path and the view it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: View,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    #[must_use]
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// The site's three pages.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            Route { path: "/", view: View::Home },
            Route { path: "/sth", view: View::Sth },
            Route { path: "/about", view: View::About },
        ])
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<View> {
        self.routes.iter().find(|route| route.path == path).map(|route| route.view)
    }
}

// =============================================================================
// ROUTER
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Matched(View),
    NoMatch,
}

impl Resolution {
    #[must_use]
    pub fn render(self) -> Option<Fragment> {
        match self {
            Self::Matched(view) => Some(view.render()),
            Self::NoMatch => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterState {
    /// Nothing navigated yet.
    Idle,
    Resolved(String),
}

pub struct Router {
    table: Arc<RouteTable>,
    state: RouterState,
}

impl Router {
    #[must_use]
    pub fn new(table: Arc<RouteTable>) -> Self {
        Self { table, state: RouterState::Idle }
    }

    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution {
        match self.table.lookup(path) {
            Some(view) => Resolution::Matched(view),
            None => Resolution::NoMatch,
        }
    }

    /// Move to `path` and return what should now be on screen.
    pub fn navigate(&mut self, path: impl Into<String>) -> Option<Fragment> {
        let path = path.into();
        let resolution = self.resolve(&path);
        if resolution == Resolution::NoMatch {
            tracing::debug!(%path, "no route matched");
        }
        self.state = RouterState::Resolved(path);
        resolution.render()
    }

    #[must_use]
    pub fn state(&self) -> &RouterState {
        &self.state
    }
}

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;
