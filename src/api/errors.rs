use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid command")]
    InvalidCommand,

    /// Missing or malformed ingest query parameter. Maps to 500, not
    /// 400: the deployed firmware treats any non-200 as the same
    /// retry-later failure, and changing the code would break it.
    #[error("{0}")]
    InvalidReading(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Control body that could not be read as JSON at all.
    #[error("{0}")]
    BadRequestBody(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidCommand => StatusCode::BAD_REQUEST,
            AppError::InvalidReading(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database(ref e) => {
                tracing::error!(error = %e, "Database error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::BadRequestBody(ref msg) => {
                tracing::error!(error = %msg, "Unreadable request body");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
