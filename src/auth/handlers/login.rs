/**
 * Login Handler
 *
 * This module implements the admin authentication handler for
 * POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Compare the supplied email against the configured admin identity
 * 2. Verify the password against the configured bcrypt hash
 * 3. Create a session row and return its token in the `admin_session`
 *    cookie
 *
 * # Security Notes
 *
 * - Invalid credentials return 401 with no indication of which credential
 *   was wrong
 * - The cookie is HttpOnly with a 7-day Max-Age matching the session expiry
 * - Passwords are never logged or returned in responses
 */

use axum::{
    extract::State,
    http::header,
    response::{AppendHeaders, IntoResponse, Response},
    Json,
};

use crate::auth::handlers::types::{LoginRequest, SuccessResponse};
use crate::auth::sessions;
use crate::error::ApiError;
use crate::middleware::auth::session_cookie;
use crate::server::state::AppState;

/// Login handler
///
/// Verifies the admin credentials and, on success, issues a session token
/// carried back to the client in the `admin_session` cookie.
///
/// # Errors
///
/// * `401 Unauthorized` - Credential mismatch
/// * `500 Internal Server Error` - Session insert failed
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    tracing::info!("Login request for: {}", request.email);

    let token = sessions::login(&state.pool, &state.config, &request.email, &request.password)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    let cookie = session_cookie(&token, state.config.session_ttl_days);

    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Json(SuccessResponse { success: true }),
    )
        .into_response())
}
