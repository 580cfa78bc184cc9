//! Application Error Types
//!
//! Centralized error handling with Axum integration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Message returned for missing, invalid or expired session tokens
pub const UNAUTHORIZED_ACCESS: &str = "UNAUTHORIZED ACCESS";

/// Message returned when the token identity does not match the requested scope
pub const FORBIDDEN_ACCESS: &str = "FORBIDDEN ACCESS";

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// 401 with the standard rejection message
    pub fn unauthorized() -> Self {
        AppError::Unauthorized(UNAUTHORIZED_ACCESS.into())
    }

    /// 403 with the standard rejection message
    pub fn forbidden() -> Self {
        AppError::Forbidden(FORBIDDEN_ACCESS.into())
    }

    /// Stable machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::BadRequest(_) => "bad_request",
            AppError::InvalidId(_) => "invalid_id",
            AppError::Unauthorized(_) => "unauthorized",
            AppError::Forbidden(_) => "forbidden",
            AppError::Internal(_) => "internal",
            AppError::Database(_) => "database",
            AppError::Validation(_) => "validation",
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub kind: &'static str,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidId(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database unavailable".into())
            }
        };

        let body = ErrorResponse {
            code: status.as_u16(),
            kind: self.kind(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
