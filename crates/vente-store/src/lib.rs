// ABOUTME: Persistence layer for vente, backed by a single SQLite database.
// ABOUTME: Provides schema creation and CRUD for categories, articles, orders and order lines.

pub mod article;
pub mod article_commande;
pub mod categorie;
pub mod commande;
pub mod store;

pub use store::{Store, StoreError};
