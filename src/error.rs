use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors a handler can return to the client. Every variant renders as
/// the `{"error": "..."}` envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No data provided")]
    MissingBody,
    #[error("No image provided")]
    MissingImage,
    #[error("Text and target language are required")]
    MissingFields,
    #[error("{0}")]
    Provider(String),
}

impl ApiError {
    pub fn provider(err: impl std::fmt::Display) -> Self {
        Self::Provider(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
