use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant ends the current submission; nothing is retried.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upload exceeds {0} bytes")]
    UploadTooLarge(usize),

    #[error("Could not read document: {0}")]
    DocumentParse(String),

    #[error("Model invocation failed: {0}")]
    ModelInvocation(String),

    #[error("Model output did not match schema: {0}")]
    SchemaValidation(String),

    #[error("Evaluator did not finish within {0} iterations")]
    IterationLimit(usize),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status, stable error code and the message safe to show to a user.
    pub fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UploadTooLarge(limit) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                format!("The upload exceeds the {limit}-byte limit. Please submit a smaller PDF."),
            ),
            AppError::DocumentParse(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "DOCUMENT_PARSE_ERROR",
                format!("The uploaded PDF could not be read: {msg}"),
            ),
            AppError::ModelInvocation(msg) => {
                tracing::error!("Model invocation error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MODEL_INVOCATION_ERROR",
                    "The language model could not be reached. Please resubmit.".to_string(),
                )
            }
            AppError::SchemaValidation(msg) => {
                tracing::error!("Schema validation error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SCHEMA_VALIDATION_ERROR",
                    "The language model returned data in an unexpected shape. Please resubmit."
                        .to_string(),
                )
            }
            AppError::IterationLimit(limit) => {
                tracing::error!("Evaluator exceeded {limit} iterations");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ITERATION_LIMIT",
                    "The evaluation did not converge. Please resubmit.".to_string(),
                )
            }
            AppError::Render(msg) => {
                tracing::error!("Render error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    "The page could not be rendered".to_string(),
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
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
