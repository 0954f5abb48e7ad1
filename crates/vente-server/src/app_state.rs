// ABOUTME: Shared application state for the vente HTTP server.
// ABOUTME: Owns the Store behind an async mutex so handlers can share one connection.

use std::sync::Arc;

use tokio::sync::Mutex;
use vente_store::Store;

/// Shared application state accessible by all Axum handlers.
pub struct AppState {
    pub store: Mutex<Store>,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Wrap an opened store for use by the router.
    pub fn new(store: Store) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Give the store back, typically to close it on shutdown.
    pub fn into_store(self) -> Store {
        self.store.into_inner()
    }
}
