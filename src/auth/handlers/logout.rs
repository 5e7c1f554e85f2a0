/**
 * Logout Handler
 *
 * This module implements the logout handler for POST /api/auth/logout.
 * The session row (if any) is deleted and the cookie is cleared. Logout is
 * idempotent: calling it without a session still succeeds.
 */

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{AppendHeaders, IntoResponse, Response},
    Json,
};

use crate::auth::handlers::types::SuccessResponse;
use crate::auth::sessions;
use crate::error::ApiError;
use crate::middleware::auth::{clear_session_cookie, session_token};
use crate::server::state::AppState;

/// Logout handler
///
/// Deletes the session row matching the caller's cookie, if present, and
/// clears the cookie either way.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    if let Some(token) = session_token(&headers) {
        sessions::delete_session(&state.pool, &token).await?;
        tracing::info!("Admin logged out");
    }

    Ok((
        AppendHeaders([(header::SET_COOKIE, clear_session_cookie())]),
        Json(SuccessResponse { success: true }),
    )
        .into_response())
}
