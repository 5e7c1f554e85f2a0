/**
 * API Route Handlers
 *
 * This module wires the API endpoints to their handlers.
 *
 * # Routes
 *
 * ## Blogs
 * - `GET /api/blogs` - Paginated listing (public)
 * - `POST /api/blogs` - Create (admin)
 * - `GET /api/blogs/{slug}` - Single post (public)
 * - `PUT /api/blogs/{slug}` - Partial update (admin)
 * - `DELETE /api/blogs/{slug}` - Delete (admin)
 *
 * ## Authentication
 * - `POST /api/auth/login` - Verify credentials, set session cookie
 * - `GET /api/auth/check` - Session check
 * - `POST /api/auth/logout` - Revoke session, clear cookie
 *
 * ## Forms
 * - `POST /api/signup` - Student signup (multipart, public)
 * - `POST /api/contact` - Contact form (public)
 *
 * ## Admin Tooling
 * - `POST /api/seed-blogs` - Destructive demo seed (admin)
 * - `POST /api/fix-blog-images` - Bulk image backfill (admin)
 *
 * # Authentication
 *
 * Admin-only handlers take the `AdminSession` extractor, so the session
 * check runs before any handler body. Public routes perform no session
 * handling.
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers::{check, login, logout};
use crate::blog::handlers::{create_blog, delete_blog, get_blog, list_blogs, update_blog};
use crate::blog::seed::{fix_blog_images_handler, seed_blogs_handler};
use crate::contact::submit_contact;
use crate::server::state::AppState;
use crate::signup::handlers::submit_signup;

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Blog endpoints
        .route("/api/blogs", get(list_blogs).post(create_blog))
        .route(
            "/api/blogs/{slug}",
            get(get_blog).put(update_blog).delete(delete_blog),
        )
        // Authentication endpoints
        .route("/api/auth/login", post(login))
        .route("/api/auth/check", get(check))
        .route("/api/auth/logout", post(logout))
        // Public forms
        .route("/api/signup", post(submit_signup))
        .route("/api/contact", post(submit_contact))
        // Admin tooling
        .route("/api/seed-blogs", post(seed_blogs_handler))
        .route("/api/fix-blog-images", post(fix_blog_images_handler))
}
