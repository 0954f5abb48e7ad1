// ABOUTME: Test helpers for driving the router against an in-memory store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, StatusCode};
use http::Request;
use tower::ServiceExt;
use vente_store::Store;

use crate::app_state::{AppState, SharedState};
use crate::routes::create_router;

pub(crate) fn test_state() -> SharedState {
    Arc::new(AppState::new(Store::open_in_memory().unwrap()))
}

/// Send a bodiless request and return the status with the parsed JSON body.
pub(crate) async fn send(state: &SharedState, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
    let app = create_router(Arc::clone(state));
    let resp = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

/// POST a category and return its id.
pub(crate) async fn create_categorie(state: &SharedState, nom: &str) -> i64 {
    let (status, json) = send(state, Method::POST, &format!("/categorie?nom={nom}")).await;
    assert_eq!(status, StatusCode::OK, "create categorie failed: {json}");
    json["id"].as_i64().unwrap()
}

/// POST an article in the given category and return its id.
pub(crate) async fn create_article(state: &SharedState, nom: &str, categorie_id: i64) -> i64 {
    let uri = format!("/article?nom={nom}&prix=2.5&quantite=10&categorie_id={categorie_id}");
    let (status, json) = send(state, Method::POST, &uri).await;
    assert_eq!(status, StatusCode::OK, "create article failed: {json}");
    json["id"].as_i64().unwrap()
}

/// POST an order with no lines and return its id.
pub(crate) async fn create_commande(state: &SharedState, client: &str) -> i64 {
    let uri = format!("/commande?date=2024-04-02T11:00:00&client={client}");
    let (status, json) = send(state, Method::POST, &uri).await;
    assert_eq!(status, StatusCode::OK, "create commande failed: {json}");
    json["id"].as_i64().unwrap()
}
