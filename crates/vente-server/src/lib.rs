// ABOUTME: HTTP server for vente, exposing CRUD endpoints over the SQLite store.
// ABOUTME: Uses Axum with a shared, explicitly constructed store injected as router state.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod routes;

#[cfg(test)]
pub(crate) mod testing;

pub use app_state::{AppState, SharedState};
pub use config::{ConfigError, VenteConfig};
pub use error::ApiError;
pub use routes::create_router;
