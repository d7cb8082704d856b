//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the immutable route table and the directories used when a request
//! does not hit a page route. Cloning is cheap: the table sits behind an `Arc`.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::router::RouteTable;

#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub site_root: Option<PathBuf>,
    pub spa_entry: Option<PathBuf>,
}

impl AppState {
    #[must_use]
    pub fn new(routes: RouteTable, config: &ServerConfig) -> Self {
        Self {
            routes: Arc::new(routes),
            site_root: config.site_root.clone(),
            spa_entry: config.spa_entry.clone(),
        }
    }
}
