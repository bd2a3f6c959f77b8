use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The two import variants stay distinct on purpose: a payload that is not
/// JSON at all and a payload that is JSON of the wrong shape produce different
/// codes, so a client can tell the user which kind of file they picked.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Import payload is not valid JSON: {0}")]
    ImportSyntax(String),

    #[error("Import payload has an invalid format: {0}")]
    ImportFormat(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::ImportSyntax(msg) => (
                StatusCode::BAD_REQUEST,
                "IMPORT_MALFORMED_JSON",
                format!("The import file is not valid JSON: {msg}"),
            ),
            AppError::ImportFormat(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "IMPORT_INVALID_FORMAT",
                format!("The import file is valid JSON but not an export payload: {msg}"),
            ),
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "A storage error occurred".to_string(),
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
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_import_failures_map_to_distinct_statuses() {
        assert_eq!(
            status_of(AppError::ImportSyntax("unexpected end".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::ImportFormat("missing version".into())),
            StatusCode::UNPROCESSABLE_ENTITY,
            "wrong shape and broken JSON must stay distinguishable"
        );
    }

    #[test]
    fn test_client_errors_keep_their_message() {
        let response = AppError::NotFound("category references".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_errors_are_internal() {
        assert_eq!(
            status_of(AppError::Storage("disk full".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
