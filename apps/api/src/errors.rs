use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// This is the only place errors are translated into HTTP status codes.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Extracted text is empty")]
    EmptyExtractedText,

    #[error("Failed to extract text from file: {0}")]
    Extraction(String),

    #[error("{0} is required")]
    MissingRequiredField(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM returned empty output")]
    LlmEmptyOutput,

    #[error("LLM output is not valid JSON: {0}")]
    InvalidLlmOutput(String),

    #[error("Upstream API failure: {0}")]
    UpstreamApiFailure(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn missing(field: &str) -> Self {
        AppError::MissingRequiredField(field.to_string())
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::EmptyContent => AppError::LlmEmptyOutput,
            other => AppError::UpstreamApiFailure(other.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::UnsupportedFileType(_) => (
                StatusCode::BAD_REQUEST,
                "UNSUPPORTED_FILE_TYPE",
                self.to_string(),
            ),
            AppError::EmptyExtractedText => (
                StatusCode::BAD_REQUEST,
                "EMPTY_EXTRACTED_TEXT",
                self.to_string(),
            ),
            AppError::Extraction(_) => {
                (StatusCode::BAD_REQUEST, "EXTRACTION_FAILED", self.to_string())
            }
            AppError::MissingRequiredField(_) => (
                StatusCode::BAD_REQUEST,
                "MISSING_REQUIRED_FIELD",
                self.to_string(),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::LlmEmptyOutput => {
                tracing::error!("LLM returned empty output");
                (StatusCode::BAD_GATEWAY, "LLM_EMPTY_OUTPUT", self.to_string())
            }
            AppError::InvalidLlmOutput(msg) => {
                tracing::error!("Invalid LLM output: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "INVALID_LLM_OUTPUT",
                    "Failed to parse LLM output as JSON".to_string(),
                )
            }
            AppError::UpstreamApiFailure(msg) => {
                tracing::error!("Upstream API failure: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "An upstream AI service error occurred".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "detail": message,
            "code": code,
        }));

        (status, body).into_response()
    }
}
