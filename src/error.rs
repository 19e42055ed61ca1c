use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors a request can end with. Upstream failures are never retried or
/// softened; they abort the request and surface here.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail.clone()),
            ApiError::Upstream(err) => (StatusCode::BAD_GATEWAY, format!("{err:#}")),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
