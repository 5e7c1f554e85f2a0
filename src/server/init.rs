/**
 * Server Initialization
 *
 * This module assembles the Axum application: database pool, schema
 * creation, mailer, shared state, router, and the background session sweep.
 *
 * # Initialization Process
 *
 * 1. Connect the PostgreSQL pool
 * 2. Create the schema idempotently
 * 3. Build the SMTP mailer if configured
 * 4. Assemble `AppState` and the router
 * 5. Spawn the periodic expired-session sweep
 *
 * # Error Handling
 *
 * The database is required: a failed connection or schema creation aborts
 * startup. A missing or invalid SMTP configuration only disables the mailer.
 */

use std::sync::Arc;

use axum::Router;
use sqlx::postgres::PgPoolOptions;

use crate::auth::sessions;
use crate::email::mailer::Mailer;
use crate::routes::router::create_router;
use crate::server::config::AppConfig;
use crate::server::schema::init_database;
use crate::server::state::AppState;

/// How often the expired-session sweep runs
const SESSION_SWEEP_INTERVAL_SECS: u64 = 3600;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Loaded server configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Returns the underlying `sqlx::Error` if the pool cannot be created or
/// schema creation fails.
pub async fn create_app(config: AppConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing GI-Site backend server");

    // Step 1: Connect the database pool
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    tracing::info!("Database connection pool created");

    // Step 2: Create the schema if it does not exist yet
    init_database(&pool).await?;

    // Step 3: Build the mailer if SMTP is configured
    let mailer = Mailer::from_config(&config).map(Arc::new);
    if mailer.is_some() {
        tracing::info!("SMTP mailer configured");
    }

    // Step 4: Assemble shared state and the router
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config),
        mailer,
    };
    let app = create_router(state);

    // Step 5: Periodically reap expired admin sessions. Expired rows are
    // already invisible to validation; the sweep just keeps the table from
    // accumulating dead rows.
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(std::time::Duration::from_secs(SESSION_SWEEP_INTERVAL_SECS));
        loop {
            interval.tick().await;
            match sessions::delete_expired(&pool).await {
                Ok(0) => {}
                Ok(n) => tracing::debug!("Reaped {} expired admin sessions", n),
                Err(e) => tracing::warn!("Expired-session sweep failed: {:?}", e),
            }
        }
    });

    tracing::info!("Router configured with session sweep task");

    Ok(app)
}
