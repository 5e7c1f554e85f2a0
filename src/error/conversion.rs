/**
 * Error Response Conversions
 *
 * This module converts `ApiError` values into Axum HTTP responses, and
 * reclassifies store-level unique-constraint violations as `Conflict`.
 *
 * # Response Shape
 *
 * Every error renders as a JSON body of the form `{"error": "<message>"}`
 * with the status code from `ApiError::status_code`. Internal errors are
 * logged with their full detail server-side and replaced by a generic
 * message in the response.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            ApiError::Database(err) => {
                // Log detailed error server-side, return generic message
                tracing::error!(error = %err, "Database error");
                "Internal server error".to_string()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

/// Reclassify a unique-constraint violation as `Conflict`
///
/// The store reports duplicate slugs and duplicate signup emails as database
/// errors; callers that insert or rename rows pass those errors through this
/// function to surface them as 409 with a user-facing message. Any other
/// database error is passed along unchanged.
pub fn conflict_on_unique(err: sqlx::Error, message: &str) -> ApiError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            ApiError::Conflict(message.to_string())
        }
        _ => ApiError::Database(err),
    }
}
