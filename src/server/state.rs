/**
 * Application State Management
 *
 * This module defines the application state structure and the `FromRef`
 * implementation for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container for the application,
 * holding:
 * - The PostgreSQL connection pool (the only shared resource)
 * - The loaded configuration
 * - The optional SMTP mailer
 *
 * Each request is handled independently; no other state crosses requests.
 *
 * # State Extraction
 *
 * The `FromRef` implementation lets read-only handlers extract just the
 * `PgPool` instead of the whole `AppState`, following Axum's recommended
 * pattern for substate extraction.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::email::mailer::Mailer;
use crate::server::config::AppConfig;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,

    /// Loaded server configuration
    pub config: Arc<AppConfig>,

    /// SMTP mailer; `None` when SMTP is not configured, in which case
    /// notification sends are skipped with a log line
    pub mailer: Option<Arc<Mailer>>,
}

/// Allow handlers that only read the store to extract the pool directly
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}
