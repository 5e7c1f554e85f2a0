/**
 * API Error Types
 *
 * This module defines the error taxonomy for the HTTP surface. Every
 * fallible handler and repository operation returns `ApiError`, which is
 * converted to an HTTP response in `error::conversion`.
 *
 * # Error Categories
 *
 * - `Validation` - Missing or malformed required input (400)
 * - `Unauthorized` - Missing or invalid admin session (401)
 * - `NotFound` - No matching row for the requested resource (404)
 * - `Conflict` - Unique-constraint violation, e.g. duplicate slug or
 *   duplicate signup email (409)
 * - `Database` / `Internal` - Store or transport failure (500); details are
 *   logged server-side and never leaked to the caller
 */

use axum::http::StatusCode;
use thiserror::Error;

/// API error taxonomy
///
/// Validation and authorization errors are raised before any store mutation.
/// Store-level unique-constraint violations are reclassified as `Conflict`
/// via [`crate::error::conflict_on_unique`]; all other store errors surface
/// as `Database` and render as a generic 500.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed required input
    #[error("{0}")]
    Validation(String),

    /// Missing or invalid admin session
    #[error("Unauthorized")]
    Unauthorized,

    /// No matching row
    #[error("{0}")]
    NotFound(String),

    /// Unique-constraint violation
    #[error("{0}")]
    Conflict(String),

    /// Underlying store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Any other internal failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Conflict` - 409 Conflict
    /// - `Database` / `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::validation("missing title").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::not_found("Blog not found").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::conflict("duplicate slug").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_messages() {
        let err = ApiError::validation("Title, content, and published_date are required");
        assert_eq!(
            err.to_string(),
            "Title, content, and published_date are required"
        );

        let err = ApiError::Unauthorized;
        assert_eq!(err.to_string(), "Unauthorized");
    }
}
