// ABOUTME: Article CRUD handlers for /article and /article/{id}, plus name search at /article/recherche.
// ABOUTME: Numeric fields are parsed from the query string; malformed values surface as server errors.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use vente_core::params::{parse_finite, parse_number};
use vente_core::{Article, ArticleFields, ParamError};

use crate::api::parse_id;
use crate::app_state::SharedState;
use crate::error::ApiError;

const NOT_FOUND: &str = "L'article n'a pas été trouvé.";
const MISSING_KEYWORD: &str = "Veuillez fournir un mot-clé pour effectuer la recherche.";
const NO_MATCH: &str = "Aucun article n'a été trouvé pour ce mot-clé.";

/// Query parameters accepted by POST and PUT.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleParams {
    pub nom: Option<String>,
    pub description: Option<String>,
    pub prix: Option<String>,
    pub quantite: Option<String>,
    pub categorie_id: Option<String>,
}

impl TryFrom<ArticleParams> for ArticleFields {
    type Error = ParamError;

    fn try_from(params: ArticleParams) -> Result<Self, Self::Error> {
        Ok(Self {
            prix: parse_finite("prix", params.prix.as_deref())?,
            quantite: parse_number("quantite", params.quantite.as_deref())?,
            categorie_id: parse_number("categorie_id", params.categorie_id.as_deref())?,
            nom: params.nom,
            description: params.description,
        })
    }
}

/// Query parameters for the name search.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub keyword: Option<String>,
}

fn not_found() -> ApiError {
    ApiError::NotFound(NOT_FOUND.to_string())
}

/// POST /article - Create an article.
pub async fn create_article(
    State(state): State<SharedState>,
    params: Result<Query<ArticleParams>, QueryRejection>,
) -> Result<Json<Article>, ApiError> {
    let Query(params) = params?;
    let fields = ArticleFields::try_from(params)?;
    let store = state.store.lock().await;
    let id = store.create_article(&fields)?;
    let article = store.get_article(id)?.ok_or_else(not_found)?;
    Ok(Json(article))
}

/// GET /article - List every article.
pub async fn list_articles(State(state): State<SharedState>) -> Result<Json<Vec<Article>>, ApiError> {
    let articles = state.store.lock().await.list_articles()?;
    Ok(Json(articles))
}

/// GET /article/recherche?keyword=... - Articles whose name contains the keyword, ignoring case.
pub async fn search_articles(
    State(state): State<SharedState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Article>>, ApiError> {
    let Query(params) = params?;
    let keyword = params
        .keyword
        .filter(|k| !k.is_empty())
        .ok_or_else(|| ApiError::BadRequest(MISSING_KEYWORD.to_string()))?;

    let articles = state.store.lock().await.search_articles(&keyword)?;
    if articles.is_empty() {
        return Err(ApiError::NotFound(NO_MATCH.to_string()));
    }
    Ok(Json(articles))
}

/// GET /article/{id} - Fetch one article.
pub async fn get_article(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Article>, ApiError> {
    let id = parse_id(&id, NOT_FOUND)?;
    let article = state
        .store
        .lock()
        .await
        .get_article(id)?
        .ok_or_else(not_found)?;
    Ok(Json(article))
}

/// PUT /article/{id} - Overwrite every field of an article.
pub async fn update_article(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    params: Result<Query<ArticleParams>, QueryRejection>,
) -> Result<Json<Article>, ApiError> {
    let Query(params) = params?;
    let id = parse_id(&id, NOT_FOUND)?;
    let fields = ArticleFields::try_from(params)?;
    let article = state
        .store
        .lock()
        .await
        .update_article(id, &fields)?
        .ok_or_else(not_found)?;
    Ok(Json(article))
}

/// DELETE /article/{id} - Delete an article and return it.
pub async fn delete_article(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Article>, ApiError> {
    let id = parse_id(&id, NOT_FOUND)?;
    let article = state
        .store
        .lock()
        .await
        .delete_article(id)?
        .ok_or_else(not_found)?;
    Ok(Json(article))
}

#[cfg(test)]
mod tests {
    use crate::testing::{create_article, create_categorie, send, test_state};
    use axum::http::{Method, StatusCode};

    #[tokio::test]
    async fn create_returns_every_field() {
        let state = test_state();
        let categorie_id = create_categorie(&state, "Epicerie").await;

        let uri = format!(
            "/article?nom=Riz&description=Basmati&prix=3.75&quantite=20&categorie_id={categorie_id}"
        );
        let (status, json) = send(&state, Method::POST, &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["nom"], "Riz");
        assert_eq!(json["description"], "Basmati");
        assert_eq!(json["prix"], 3.75);
        assert_eq!(json["quantite"], 20);
        assert_eq!(json["categorie_id"], categorie_id);
        assert_eq!(json.as_object().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn list_returns_n_articles() {
        let state = test_state();
        let categorie_id = create_categorie(&state, "Epicerie").await;
        for nom in ["Pates", "Huile", "Vinaigre", "Moutarde"] {
            create_article(&state, nom, categorie_id).await;
        }

        let (status, json) = send(&state, Method::GET, "/article").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn omitted_field_does_not_crash_post() {
        let state = test_state();
        let categorie_id = create_categorie(&state, "Epicerie").await;

        let uri = format!("/article?nom=Sans%20prix&quantite=1&categorie_id={categorie_id}");
        let (status, json) = send(&state, Method::POST, &uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["message"].is_string());
    }

    #[tokio::test]
    async fn malformed_number_is_server_error() {
        let state = test_state();
        let categorie_id = create_categorie(&state, "Epicerie").await;

        let uri = format!("/article?nom=Sel&prix=gratuit&quantite=1&categorie_id={categorie_id}");
        let (status, json) = send(&state, Method::POST, &uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["message"].as_str().unwrap().contains("prix"));
    }

    #[tokio::test]
    async fn unknown_categorie_is_server_error() {
        let state = test_state();
        let (status, _) = send(
            &state,
            Method::POST,
            "/article?nom=Perdu&prix=1&quantite=1&categorie_id=404",
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn delete_unknown_id_is_404() {
        let state = test_state();
        let (status, json) = send(&state, Method::DELETE, "/article/31").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "L'article n'a pas été trouvé.");
    }

    #[tokio::test]
    async fn put_overwrites_and_unknown_id_is_404() {
        let state = test_state();
        let categorie_id = create_categorie(&state, "Frais").await;
        let id = create_article(&state, "Beurre", categorie_id).await;

        let uri = format!(
            "/article/{id}?nom=Beurre%20doux&prix=2.1&quantite=6&categorie_id={categorie_id}"
        );
        let (status, json) = send(&state, Method::PUT, &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["nom"], "Beurre doux");
        assert_eq!(json["quantite"], 6);
        assert!(json["description"].is_null());

        let uri = format!("/article/999?nom=X&prix=1&quantite=1&categorie_id={categorie_id}");
        let (status, _) = send(&state, Method::PUT, &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn search_finds_case_insensitive_match() {
        let state = test_state();
        let categorie_id = create_categorie(&state, "Epicerie").await;
        let id = create_article(&state, "Biscuits%20Fourres", categorie_id).await;
        create_article(&state, "Chocolat", categorie_id).await;

        let (status, json) = send(&state, Method::GET, "/article/recherche?keyword=fourr").await;
        assert_eq!(status, StatusCode::OK);
        let found = json.as_array().unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0]["id"], id);
        assert_eq!(found[0]["nom"], "Biscuits Fourres");
    }

    #[tokio::test]
    async fn search_without_match_is_404() {
        let state = test_state();
        let categorie_id = create_categorie(&state, "Epicerie").await;
        create_article(&state, "Chocolat", categorie_id).await;

        let (status, json) = send(&state, Method::GET, "/article/recherche?keyword=foo").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Aucun article n'a été trouvé pour ce mot-clé.");
    }

    #[tokio::test]
    async fn repeated_query_key_is_json_400() {
        let state = test_state();
        let (status, json) =
            send(&state, Method::GET, "/article/recherche?keyword=a&keyword=b").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["message"].is_string());

        let (status, json) = send(&state, Method::POST, "/article?nom=A&nom=B").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["message"].is_string());
    }

    #[tokio::test]
    async fn infinite_prix_is_rejected() {
        let state = test_state();
        let categorie_id = create_categorie(&state, "Epicerie").await;

        let uri = format!("/article?nom=Luxe&prix=inf&quantite=1&categorie_id={categorie_id}");
        let (status, json) = send(&state, Method::POST, &uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["message"].as_str().unwrap().contains("prix"));

        let (_, list) = send(&state, Method::GET, "/article").await;
        assert!(list.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_without_keyword_is_400() {
        let state = test_state();
        for uri in ["/article/recherche", "/article/recherche?keyword="] {
            let (status, json) = send(&state, Method::GET, uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(
                json["message"],
                "Veuillez fournir un mot-clé pour effectuer la recherche."
            );
        }
    }
}
