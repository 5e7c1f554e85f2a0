/**
 * Authentication Middleware
 *
 * This module protects routes that require an admin session. The session is
 * carried as an opaque token in the `admin_session` cookie; protected
 * handlers take an `AdminSession` extractor argument, which validates the
 * token against the `admin_sessions` relation and rejects the request with
 * 401 before the handler body runs.
 *
 * Returns 401 Unauthorized if the cookie is missing, the token is unknown,
 * or the session has expired.
 */

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

use crate::auth::sessions;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Name of the session cookie issued on login
pub const SESSION_COOKIE: &str = "admin_session";

/// Extract the session token from the `Cookie` header
///
/// Fails closed: a missing header, unparseable value, or empty token all
/// yield `None`.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
    })
}

/// Build the `Set-Cookie` value issued on successful login
pub fn session_cookie(token: &str, ttl_days: i64) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        token,
        ttl_days * 24 * 60 * 60
    )
}

/// Build the `Set-Cookie` value that clears the session cookie on logout
pub fn clear_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE)
}

/// Validated admin session for protected handlers
///
/// Handlers for mutating endpoints take this extractor as an argument; the
/// request is rejected with 401 before the handler runs when no valid
/// session accompanies it.
#[derive(Clone, Debug)]
pub struct AdminSession {
    /// The validated session token
    pub token: String,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = session_token(&parts.headers) else {
            tracing::warn!("Missing session cookie on protected route");
            return Err(ApiError::Unauthorized);
        };

        if sessions::validate_session(&state.pool, Some(&token)).await? {
            Ok(AdminSession { token })
        } else {
            tracing::warn!("Invalid or expired session token");
            Err(ApiError::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_session_token_present() {
        let headers = headers_with_cookie("admin_session=abc123");
        assert_eq!(session_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_session_token_among_other_cookies() {
        let headers = headers_with_cookie("theme=dark; admin_session=abc123; lang=en");
        assert_eq!(session_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_session_token_missing() {
        let headers = headers_with_cookie("theme=dark");
        assert_eq!(session_token(&headers), None);
        assert_eq!(session_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_session_token_empty_value() {
        let headers = headers_with_cookie("admin_session=");
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn test_session_cookie_format() {
        let cookie = session_cookie("tok", 7);
        assert!(cookie.starts_with("admin_session=tok;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Max-Age=604800"));
    }

    #[test]
    fn test_clear_session_cookie_expires_immediately() {
        let cookie = clear_session_cookie();
        assert!(cookie.contains("Max-Age=0"));
    }
}
