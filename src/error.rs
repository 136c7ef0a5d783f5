use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Every failure a handler can surface, mapped to an HTTP status in one
/// place so the service layer never touches transport types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("User already exists")]
    DuplicateEmail,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User account is inactive")]
    InactiveAccount,

    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("User not found")]
    NotFound,

    /// Any persistence failure; the driver message passes through verbatim.
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// Hashing or token-signing failure.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::DuplicateEmail | ApiError::InvalidCredentials => StatusCode::BAD_REQUEST,
            ApiError::InactiveAccount | ApiError::InvalidToken => StatusCode::FORBIDDEN,
            ApiError::MissingToken => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        match self {
            ApiError::Database(e) => {
                tracing::error!(error = %e, "database error");
            }
            ApiError::Internal(msg) => {
                tracing::error!(message = %msg, "internal error");
            }
            ApiError::InvalidCredentials
            | ApiError::InactiveAccount
            | ApiError::MissingToken
            | ApiError::InvalidToken => {
                tracing::warn!(error = %self, "request rejected");
            }
            _ => {
                tracing::debug!(error = %self, "request failed");
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        let body = Json(json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}
