use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server misconfigured: {0}")]
    Misconfigured(String),

    #[error("Token signing error: {0}")]
    TokenSigning(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Misconfigured(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server misconfigured".to_string(),
            ),
            AppError::TokenSigning(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate token".to_string(),
            ),
            AppError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": error_message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::TokenSigning(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
