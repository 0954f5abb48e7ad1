// ABOUTME: Route table for the vente HTTP API.
// ABOUTME: Assembles every resource's CRUD routes into a single Axum Router with shared state.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::api::{article_commandes, articles, categories, commandes};
use crate::app_state::SharedState;

/// Build the complete Axum router with all routes and shared state.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/categorie",
            get(categories::list_categories).post(categories::create_categorie),
        )
        .route(
            "/categorie/{id}",
            get(categories::get_categorie)
                .put(categories::update_categorie)
                .delete(categories::delete_categorie),
        )
        .route(
            "/article",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/article/recherche", get(articles::search_articles))
        .route(
            "/article/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/commande",
            get(commandes::list_commandes).post(commandes::create_commande),
        )
        .route(
            "/commande/{id}",
            get(commandes::get_commande)
                .put(commandes::update_commande)
                .delete(commandes::delete_commande),
        )
        .route(
            "/articleCommande",
            get(article_commandes::list_article_commandes)
                .post(article_commandes::create_article_commande),
        )
        .route(
            "/articleCommande/{id}",
            get(article_commandes::get_article_commande)
                .put(article_commandes::update_article_commande)
                .delete(article_commandes::delete_article_commande),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler. Returns 200 OK with a simple JSON body.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
