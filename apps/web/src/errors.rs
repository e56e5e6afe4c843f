use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::generation::input::ValidationError;
use crate::generation::GenerateError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Carries the message meant for the end user (provider text or fallback).
    #[error("LLM error: {0}")]
    Llm(String),
}

impl From<GenerateError> for AppError {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::Validation(e) => AppError::Validation(e),
            provider @ GenerateError::Provider(_) => AppError::Llm(provider.user_message()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            AppError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                e.to_string(),
                Some(json!({ "missing": e.missing })),
            ),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (StatusCode::BAD_GATEWAY, "LLM_ERROR", msg.clone(), None)
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let (Some(details), Value::Object(map)) = (details, &mut error) {
            map.insert("details".to_string(), details);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
