/**
 * Router Configuration
 *
 * This module assembles the application router:
 *
 * 1. API routes (`/api/...`)
 * 2. Static file serving (the marketing frontend build under `static/`)
 * 3. Fallback handler for unknown routes
 *
 * A request body limit is applied globally so CV uploads on the signup form
 * stay bounded.
 */

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::services::ServeDir;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Upper bound on request bodies; generous enough for a CV upload
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Shared application state (pool, config, mailer)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router {
    let router = configure_api_routes(Router::new());

    // Static files (marketing pages, logo, uploaded assets)
    let router = router.nest_service("/static", ServeDir::new("static"));

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    router
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(app_state)
}
