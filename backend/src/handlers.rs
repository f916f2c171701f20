use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use portfolio_shared::Collection;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct MuseQuery {
    #[serde(default)]
    pub topic: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MuseResponse {
    pub text: String,
}

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    fn internal(context: &str, err: impl std::fmt::Display) -> Self {
        tracing::error!("{context}: {err}");
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(ErrorResponse {
            error,
        }))
            .into_response()
    }
}

/// `GET /api/:collection`: the stored JSON array, or `[]` when nothing is
/// stored yet.
pub async fn get_collection(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let collection: Collection = name.parse().map_err(|_| ApiError::NotFound)?;

    let stored = state
        .store()
        .get(collection.key())
        .await
        .map_err(|err| ApiError::internal("Failed to read collection", err))?;

    let body = match stored {
        None | Some(Value::Null) => Value::Array(Vec::new()),
        Some(value) => value,
    };
    Ok(Json(body))
}

/// `GET /api/muse?topic=...`
pub async fn muse(
    State(state): State<AppState>,
    Query(query): Query<MuseQuery>,
) -> Result<Json<MuseResponse>, ApiError> {
    let topic = query.topic.as_deref().map(str::trim).unwrap_or_default();
    if topic.is_empty() {
        return Err(ApiError::BadRequest("`topic` must not be empty".to_string()));
    }

    let text = state.muse().inspire(topic).await;
    Ok(Json(MuseResponse {
        text,
    }))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
