use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Errors surfaced by the upload route.
///
/// Validation failures carry the missing column names so callers can check
/// them programmatically; everything else collapses to a generic failure with
/// the detail kept in the server log.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Validation { missing_columns: Vec<String> },
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            AppError::Validation { missing_columns } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "missing required columns",
                    "missing_columns": missing_columns,
                })),
            )
                .into_response(),
            AppError::Internal(error) => {
                tracing::error!("internal server error: {error:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "an unexpected error occurred" })),
                )
                    .into_response()
            }
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}
