/**
 * Session Check Handler
 *
 * This module implements GET /api/auth/check, which the admin frontend
 * polls to decide whether to show the login form. A live session yields
 * `{"authenticated": true}`; anything else yields 401 with
 * `{"authenticated": false}`.
 */

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::auth::handlers::types::CheckResponse;
use crate::auth::sessions;
use crate::error::ApiError;
use crate::middleware::auth::session_token;
use crate::server::state::AppState;

/// Session check handler
///
/// Fails closed: a missing cookie, unknown token, or expired session all
/// report unauthenticated.
pub async fn check(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, ApiError> {
    let token = session_token(&headers);
    let authenticated = sessions::validate_session(&state.pool, token.as_deref()).await?;

    if authenticated {
        Ok(Json(CheckResponse { authenticated: true }).into_response())
    } else {
        Ok((
            StatusCode::UNAUTHORIZED,
            Json(CheckResponse {
                authenticated: false,
            }),
        )
            .into_response())
    }
}
