use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::export::BundleError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),

    #[error("Bundle error: {0}")]
    Bundle(#[from] BundleError),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Parse(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Unexpected(_) | AppError::Bundle(_) | AppError::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match &self {
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::Parse(msg) => ("PARSE_ERROR", msg.clone()),
            AppError::PayloadTooLarge(msg) => ("PAYLOAD_TOO_LARGE", msg.clone()),
            AppError::Unexpected(msg) => {
                tracing::error!("Unexpected error: {msg}");
                ("UNEXPECTED_ERROR", msg.clone())
            }
            AppError::Bundle(e) => {
                tracing::error!("Bundle error: {e}");
                (
                    "BUNDLE_ERROR",
                    "The portfolio archive could not be built".to_string(),
                )
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                (
                    "TEMPLATE_ERROR",
                    "The preview page could not be rendered".to_string(),
                )
            }
        };

        // `error` stays a plain string so the generator UI can show it as-is.
        let body = Json(json!({
            "error": message,
            "code": code,
        }));

        (status, body).into_response()
    }
}
