// ABOUTME: Category CRUD handlers for /categorie and /categorie/{id}.
// ABOUTME: Fields are read tolerantly from the query string; missing ones are passed on as absent.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use vente_core::{Categorie, CategorieFields};

use crate::api::parse_id;
use crate::app_state::SharedState;
use crate::error::ApiError;

const NOT_FOUND: &str = "La catégorie n'a pas été trouvée.";

/// Query parameters accepted by POST and PUT.
#[derive(Debug, Default, Deserialize)]
pub struct CategorieParams {
    pub nom: Option<String>,
    pub description: Option<String>,
}

impl From<CategorieParams> for CategorieFields {
    fn from(params: CategorieParams) -> Self {
        Self {
            nom: params.nom,
            description: params.description,
        }
    }
}

fn not_found() -> ApiError {
    ApiError::NotFound(NOT_FOUND.to_string())
}

/// POST /categorie - Create a category.
pub async fn create_categorie(
    State(state): State<SharedState>,
    params: Result<Query<CategorieParams>, QueryRejection>,
) -> Result<Json<Categorie>, ApiError> {
    let Query(params) = params?;
    let fields = CategorieFields::from(params);
    let store = state.store.lock().await;
    let id = store.create_categorie(&fields)?;
    let categorie = store.get_categorie(id)?.ok_or_else(not_found)?;
    Ok(Json(categorie))
}

/// GET /categorie - List every category.
pub async fn list_categories(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Categorie>>, ApiError> {
    let categories = state.store.lock().await.list_categories()?;
    Ok(Json(categories))
}

/// GET /categorie/{id} - Fetch one category.
pub async fn get_categorie(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Categorie>, ApiError> {
    let id = parse_id(&id, NOT_FOUND)?;
    let categorie = state
        .store
        .lock()
        .await
        .get_categorie(id)?
        .ok_or_else(not_found)?;
    Ok(Json(categorie))
}

/// PUT /categorie/{id} - Overwrite every field of a category.
pub async fn update_categorie(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    params: Result<Query<CategorieParams>, QueryRejection>,
) -> Result<Json<Categorie>, ApiError> {
    let Query(params) = params?;
    let id = parse_id(&id, NOT_FOUND)?;
    let fields = CategorieFields::from(params);
    let categorie = state
        .store
        .lock()
        .await
        .update_categorie(id, &fields)?
        .ok_or_else(not_found)?;
    Ok(Json(categorie))
}

/// DELETE /categorie/{id} - Delete a category and return it.
pub async fn delete_categorie(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Categorie>, ApiError> {
    let id = parse_id(&id, NOT_FOUND)?;
    let categorie = state
        .store
        .lock()
        .await
        .delete_categorie(id)?
        .ok_or_else(not_found)?;
    Ok(Json(categorie))
}
