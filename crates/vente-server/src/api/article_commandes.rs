// ABOUTME: Order line CRUD handlers for /articleCommande and /articleCommande/{id}.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use vente_core::params::parse_number;
use vente_core::{ArticleCommande, ArticleCommandeFields, ParamError};

use crate::api::parse_id;
use crate::app_state::SharedState;
use crate::error::ApiError;

const NOT_FOUND: &str = "La ligne de Commande n'a pas été trouvée.";

/// Query parameters accepted by POST and PUT.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleCommandeParams {
    pub article_id: Option<String>,
    pub commande_id: Option<String>,
}

impl TryFrom<ArticleCommandeParams> for ArticleCommandeFields {
    type Error = ParamError;

    fn try_from(params: ArticleCommandeParams) -> Result<Self, Self::Error> {
        Ok(Self {
            article_id: parse_number("article_id", params.article_id.as_deref())?,
            commande_id: parse_number("commande_id", params.commande_id.as_deref())?,
        })
    }
}

fn not_found() -> ApiError {
    ApiError::NotFound(NOT_FOUND.to_string())
}

/// POST /articleCommande - Link an article to an order.
pub async fn create_article_commande(
    State(state): State<SharedState>,
    params: Result<Query<ArticleCommandeParams>, QueryRejection>,
) -> Result<Json<ArticleCommande>, ApiError> {
    let Query(params) = params?;
    let fields = ArticleCommandeFields::try_from(params)?;
    let store = state.store.lock().await;
    let id = store.create_article_commande(&fields)?;
    let ligne = store.get_article_commande(id)?.ok_or_else(not_found)?;
    Ok(Json(ligne))
}

/// GET /articleCommande - List every order line.
pub async fn list_article_commandes(
    State(state): State<SharedState>,
) -> Result<Json<Vec<ArticleCommande>>, ApiError> {
    let lignes = state.store.lock().await.list_article_commandes()?;
    Ok(Json(lignes))
}

/// GET /articleCommande/{id} - Fetch one order line.
pub async fn get_article_commande(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<ArticleCommande>, ApiError> {
    let id = parse_id(&id, NOT_FOUND)?;
    let ligne = state
        .store
        .lock()
        .await
        .get_article_commande(id)?
        .ok_or_else(not_found)?;
    Ok(Json(ligne))
}

/// PUT /articleCommande/{id} - Overwrite both links of an order line.
pub async fn update_article_commande(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    params: Result<Query<ArticleCommandeParams>, QueryRejection>,
) -> Result<Json<ArticleCommande>, ApiError> {
    let Query(params) = params?;
    let id = parse_id(&id, NOT_FOUND)?;
    let fields = ArticleCommandeFields::try_from(params)?;
    let ligne = state
        .store
        .lock()
        .await
        .update_article_commande(id, &fields)?
        .ok_or_else(not_found)?;
    Ok(Json(ligne))
}

/// DELETE /articleCommande/{id} - Delete an order line and return it.
pub async fn delete_article_commande(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<ArticleCommande>, ApiError> {
    let id = parse_id(&id, NOT_FOUND)?;
    let ligne = state
        .store
        .lock()
        .await
        .delete_article_commande(id)?
        .ok_or_else(not_found)?;
    Ok(Json(ligne))
}
