/**
 * Session Management
 *
 * This module manages admin sessions as opaque bearer tokens persisted in
 * the `admin_sessions` relation.
 *
 * # Session Lifecycle
 *
 * - `create_session` inserts `(token, expires_at)` with expiry `now + TTL`
 * - `validate_session` checks for a matching, non-expired row
 * - `delete_session` removes the row (logout); deleting an absent token is
 *   a no-op
 * - `delete_expired` reaps rows whose expiry has passed (expired rows are
 *   already invisible to validation, so the sweep is purely hygiene)
 *
 * A session moves through three states: Active (row present, expiry in the
 * future), Expired (row present, expiry passed, validation returns false),
 * Deleted (row absent).
 *
 * # Security
 *
 * - Tokens carry 256 bits of randomness, hex-encoded
 * - The admin password is verified with bcrypt against a configured hash;
 *   no plaintext credential lives in code or configuration
 * - Login failure carries no detail about which credential was wrong
 */

use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::server::config::AppConfig;

/// Generate an opaque session token
///
/// Two version-4 UUIDs concatenated in simple (dashless) form: 64 hex
/// characters, 256 bits of randomness.
pub fn generate_token() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

/// Create a new session and return its token
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `ttl_days` - Session lifetime in days
pub async fn create_session(pool: &PgPool, ttl_days: i64) -> Result<String, sqlx::Error> {
    let token = generate_token();
    let expires_at = Utc::now() + Duration::days(ttl_days);

    sqlx::query("INSERT INTO admin_sessions (token, expires_at) VALUES ($1, $2)")
        .bind(&token)
        .bind(expires_at)
        .execute(pool)
        .await?;

    Ok(token)
}

/// Check whether a token belongs to a live session
///
/// Fails closed: an absent or empty token validates to `false` without
/// touching the store. Otherwise returns whether a matching row with expiry
/// strictly in the future exists.
pub async fn validate_session(pool: &PgPool, token: Option<&str>) -> Result<bool, sqlx::Error> {
    let Some(token) = token else {
        return Ok(false);
    };
    if token.is_empty() {
        return Ok(false);
    }

    let found: Option<i32> =
        sqlx::query_scalar("SELECT id FROM admin_sessions WHERE token = $1 AND expires_at > NOW()")
            .bind(token)
            .fetch_optional(pool)
            .await?;

    Ok(found.is_some())
}

/// Delete the session with the given token
///
/// Idempotent: deleting a token with no matching row is a no-op.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM admin_sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

/// Delete all sessions whose expiry has passed
///
/// Returns the number of rows removed. Run periodically from the server's
/// sweep task.
pub async fn delete_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM admin_sessions WHERE expires_at <= NOW()")
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Verify admin credentials and issue a session on success
///
/// The supplied email is compared against the configured admin identity and
/// the password is verified against the configured bcrypt hash. Both checks
/// always run, and a mismatch of either yields the same `None` result.
///
/// # Returns
///
/// `Some(token)` on success, `None` on credential mismatch.
pub async fn login(
    pool: &PgPool,
    config: &AppConfig,
    email: &str,
    password: &str,
) -> Result<Option<String>, ApiError> {
    let email_ok = email == config.admin_email;
    let password_ok = bcrypt::verify(password, &config.admin_password_hash).unwrap_or(false);

    if email_ok && password_ok {
        let token = create_session(pool, config.session_ttl_days).await?;
        tracing::info!("Admin logged in");
        Ok(Some(token))
    } else {
        tracing::warn!("Failed admin login attempt");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_token_shape() {
        let token = generate_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_token_unique() {
        let a = generate_token();
        let b = generate_token();
        assert_ne!(a, b);
    }
}
