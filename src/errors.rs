//! Centralized error handling.
//!
//! Every failed operation is answered with the `"FALHA"` sentinel; the
//! differentiated kind travels in the status code and the error-code header.

use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::config::{ERROR_CODE_HEADER, RESPONSE_FAILURE};

/// Application error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    // Resource errors
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} already exists")]
    AlreadyExists(String),

    // Validation
    #[error("Email must contain '@'")]
    InvalidEmail,

    #[error("Password is too short")]
    InvalidPassword,

    #[error("Price must be a non-negative number")]
    InvalidPrice,

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::AlreadyExists(_) => "ALREADY_EXISTS",
            AppError::InvalidEmail => "INVALID_EMAIL",
            AppError::InvalidPassword => "INVALID_PASSWORD",
            AppError::InvalidPrice => "INVALID_PRICE",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyExists(_) => StatusCode::CONFLICT,
            AppError::InvalidEmail
            | AppError::InvalidPassword
            | AppError::InvalidPrice
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            other => tracing::debug!(code = other.code(), "Request failed: {}", other),
        }

        (
            self.status(),
            [(
                HeaderName::from_static(ERROR_CODE_HEADER),
                HeaderValue::from_static(self.code()),
            )],
            Json(RESPONSE_FAILURE),
        )
            .into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, entity: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::not_found(entity))
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(entity: impl Into<String>) -> Self {
        AppError::NotFound(entity.into())
    }

    pub fn already_exists(entity: impl Into<String>) -> Self {
        AppError::AlreadyExists(entity.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::not_found("User").status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::already_exists("User").status(), StatusCode::CONFLICT);
        assert_eq!(AppError::InvalidEmail.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidPassword.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::internal("boom").status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_response_carries_code_header() {
        let response = AppError::InvalidPassword.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(ERROR_CODE_HEADER).unwrap(),
            "INVALID_PASSWORD"
        );
    }

    #[test]
    fn test_option_ext() {
        let missing: Option<i32> = None;
        assert_eq!(missing.ok_or_not_found("Cart"), Err(AppError::not_found("Cart")));
        assert_eq!(Some(3).ok_or_not_found("Cart"), Ok(3));
    }
}
