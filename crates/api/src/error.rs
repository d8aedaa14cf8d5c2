use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::error::{CoreError, FieldError};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce the JSON error
/// envelope (`success: false`, a message, and a per-field `errors`
/// list for validation failures).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `folio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, field_errors): (StatusCode, String, Option<&[FieldError]>) =
            match &self {
                AppError::Core(core) => match core {
                    CoreError::NotFound { entity, id } => (
                        StatusCode::NOT_FOUND,
                        format!("{entity} with id {id} not found"),
                        None,
                    ),
                    CoreError::Validation(errors) => (
                        StatusCode::BAD_REQUEST,
                        "Validation failed".to_string(),
                        Some(errors),
                    ),
                    CoreError::Unauthorized(msg) => {
                        (StatusCode::UNAUTHORIZED, msg.clone(), None)
                    }
                    CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone(), None),
                    CoreError::Internal(msg) => {
                        tracing::error!(error = %msg, "Internal core error");
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "An internal error occurred".to_string(),
                            None,
                        )
                    }
                },

                AppError::Database(err) => {
                    tracing::error!(error = %err, "Database error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                        None,
                    )
                }

                AppError::InternalError(msg) => {
                    tracing::error!(error = %msg, "Internal error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                        None,
                    )
                }
            };

        let mut body = json!({
            "success": false,
            "message": message,
        });
        if let Some(errors) = field_errors {
            body["errors"] = json!(errors);
        }

        (status, axum::Json(body)).into_response()
    }
}
