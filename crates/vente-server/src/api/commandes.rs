// ABOUTME: Order CRUD handlers for /commande and /commande/{id}.
// ABOUTME: Responses embed the order's articles; an optional `article` parameter adds an order line.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use vente_core::params::{parse_datetime, parse_number};
use vente_core::{Commande, CommandeFields, ParamError};

use crate::api::parse_id;
use crate::app_state::SharedState;
use crate::error::ApiError;

const NOT_FOUND: &str = "La commande n'a pas été trouvée.";

/// Query parameters accepted by POST and PUT.
#[derive(Debug, Default, Deserialize)]
pub struct CommandeParams {
    pub date: Option<String>,
    pub client: Option<String>,
    pub article: Option<String>,
}

impl TryFrom<CommandeParams> for CommandeFields {
    type Error = ParamError;

    fn try_from(params: CommandeParams) -> Result<Self, Self::Error> {
        Ok(Self {
            date: parse_datetime("date", params.date.as_deref())?,
            article: parse_number("article", params.article.as_deref())?,
            client: params.client,
        })
    }
}

fn not_found() -> ApiError {
    ApiError::NotFound(NOT_FOUND.to_string())
}

/// POST /commande - Create an order, optionally linked to one article.
pub async fn create_commande(
    State(state): State<SharedState>,
    params: Result<Query<CommandeParams>, QueryRejection>,
) -> Result<Json<Commande>, ApiError> {
    let Query(params) = params?;
    let fields = CommandeFields::try_from(params)?;
    let store = state.store.lock().await;
    let id = store.create_commande(&fields)?;
    let commande = store.get_commande(id)?.ok_or_else(not_found)?;
    Ok(Json(commande))
}

/// GET /commande - List every order with its articles.
pub async fn list_commandes(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Commande>>, ApiError> {
    let commandes = state.store.lock().await.list_commandes()?;
    Ok(Json(commandes))
}

/// GET /commande/{id} - Fetch one order with its articles.
pub async fn get_commande(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Commande>, ApiError> {
    let id = parse_id(&id, NOT_FOUND)?;
    let commande = state
        .store
        .lock()
        .await
        .get_commande(id)?
        .ok_or_else(not_found)?;
    Ok(Json(commande))
}

/// PUT /commande/{id} - Overwrite date and client, optionally linking one more article.
pub async fn update_commande(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    params: Result<Query<CommandeParams>, QueryRejection>,
) -> Result<Json<Commande>, ApiError> {
    let Query(params) = params?;
    let id = parse_id(&id, NOT_FOUND)?;
    let fields = CommandeFields::try_from(params)?;
    let commande = state
        .store
        .lock()
        .await
        .update_commande(id, &fields)?
        .ok_or_else(not_found)?;
    Ok(Json(commande))
}

/// DELETE /commande/{id} - Delete an order with its lines and return it as it was.
pub async fn delete_commande(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Commande>, ApiError> {
    let id = parse_id(&id, NOT_FOUND)?;
    let commande = state
        .store
        .lock()
        .await
        .delete_commande(id)?
        .ok_or_else(not_found)?;
    Ok(Json(commande))
}
