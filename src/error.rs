//! Application error taxonomy and its mapping onto HTTP responses.
//!
//! Every failure a handler can produce ends up here. Classification into a
//! status code and an [`ErrorResponse`] body happens in exactly one place,
//! [`AppError::classify`], so all endpoints share the same error shape.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

use crate::api::response::ErrorResponse;

/// Message reported when a template (or any other record) does not exist.
pub const RECORD_NOT_FOUND: &str = "record not found";

/// Message reported for every ownership or identity failure.
pub const NOT_AUTHORIZED: &str = "not authorized";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The requested record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The caller may not touch the record. The detail is logged, never sent.
    #[error("not authorized: {0}")]
    NotAuthorized(String),

    /// Malformed input: bad id, unknown category, undecodable body.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Database(sqlx::Error),

    /// Any other service failure.
    #[error("{0}")]
    Unclassified(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn record_not_found() -> Self {
        Self::NotFound(RECORD_NOT_FOUND.to_string())
    }

    pub fn not_authorized(detail: impl Into<String>) -> Self {
        Self::NotAuthorized(detail.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn unclassified(message: impl Into<String>) -> Self {
        Self::Unclassified(message.into())
    }

    /// Maps the error onto a status code and response body.
    ///
    /// - `NotFound` → 404 with the error message
    /// - `NotAuthorized` → 403 with the fixed `"not authorized"` message
    /// - everything else → 400 with the error message
    pub fn classify(&self) -> (StatusCode, ErrorResponse) {
        match self {
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, ErrorResponse::new(message.clone()))
            }
            AppError::NotAuthorized(_) => {
                (StatusCode::FORBIDDEN, ErrorResponse::new(NOT_AUTHORIZED))
            }
            other => (StatusCode::BAD_REQUEST, ErrorResponse::new(other.to_string())),
        }
    }

    /// Returns true for errors that are logged before responding.
    fn is_logged(&self) -> bool {
        !matches!(self, AppError::NotFound(_) | AppError::NotAuthorized(_))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::record_not_found(),
            other => AppError::Database(other),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_logged() {
            tracing::error!(error = %self, "dashboard template request failed");
        } else {
            tracing::debug!(error = %self, "dashboard template request rejected");
        }

        let (status, body) = self.classify();
        (status, Json(body)).into_response()
    }
}
