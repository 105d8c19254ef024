use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::prospects::search::SearchError;
use crate::prospects::validation::ResponseFormatError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Transport error: {0}")]
    Transport(#[from] LlmError),

    #[error("Response format error: {0}")]
    ResponseFormat(#[from] ResponseFormatError),
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Configuration(msg) => AppError::Configuration(msg),
            SearchError::InvalidInput(msg) => AppError::Validation(msg),
            SearchError::Transport(e) => AppError::Transport(e),
            SearchError::ResponseFormat(e) => AppError::ResponseFormat(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "CONFIGURATION_ERROR",
                    "The prospect search service is not configured".to_string(),
                )
            }
            AppError::Transport(e) => {
                tracing::error!("Transport error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "TRANSPORT_ERROR",
                    "An error occurred while fetching prospect data.".to_string(),
                )
            }
            AppError::ResponseFormat(e) => {
                tracing::error!("Response format error: {e}");
                let message = if e.is_schema_violation() {
                    format!("The AI's response did not match the prospect schema: {e}")
                } else {
                    "Failed to parse the AI's response. The format was invalid.".to_string()
                };
                (StatusCode::BAD_GATEWAY, "RESPONSE_FORMAT_ERROR", message)
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
