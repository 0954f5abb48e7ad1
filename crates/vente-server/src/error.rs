// ABOUTME: API error type mapping bad input, missing records and storage failures to HTTP responses.
// ABOUTME: Every error renders as a JSON body of the form {"message": ...}.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use vente_core::ParamError;
use vente_store::StoreError;

/// Errors returned by route handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request parameter is missing.
    #[error("{0}")]
    BadRequest(String),

    /// The query string could not be read into the handler's parameters.
    #[error("{}", .0.body_text())]
    Query(#[from] QueryRejection),

    /// No record matches the request.
    #[error("{0}")]
    NotFound(String),

    /// A parameter was present but could not be read as its field type.
    #[error(transparent)]
    InvalidParam(#[from] ParamError),

    /// The store rejected or failed the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Query(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidParam(_) | ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(ErrorBody {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}
