/**
 * Blog Handlers
 *
 * HTTP handlers for the blog endpoints. Reads are public; every mutation
 * takes the `AdminSession` extractor and is rejected with 401 before the
 * handler body runs when no valid session accompanies the request.
 *
 * # Routes
 *
 * - `GET /api/blogs` - Paginated listing (public)
 * - `GET /api/blogs/{slug}` - Single post lookup (public)
 * - `POST /api/blogs` - Create (admin)
 * - `PUT /api/blogs/{slug}` - Partial update (admin)
 * - `DELETE /api/blogs/{slug}` - Delete (admin)
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sqlx::PgPool;

use crate::auth::handlers::types::SuccessResponse;
use crate::blog::models::{
    BlogListResponse, BlogPatch, BlogResponse, CreateBlogRequest, NewBlogPost,
};
use crate::blog::repository::{self, DEFAULT_PAGE_SIZE};
use crate::error::ApiError;
use crate::middleware::auth::AdminSession;
use crate::server::state::AppState;

/// Pagination query parameters for the listing endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// List blogs, newest published first
pub async fn list_blogs(
    State(pool): State<PgPool>,
    Query(params): Query<ListParams>,
) -> Result<Json<BlogListResponse>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    let offset = params.offset.unwrap_or(0);

    let (blogs, total) = repository::list(&pool, limit, offset).await?;

    Ok(Json(BlogListResponse {
        blogs,
        total,
        limit,
        offset,
    }))
}

/// Fetch a single blog by slug
pub async fn get_blog(
    State(pool): State<PgPool>,
    Path(slug): Path<String>,
) -> Result<Json<BlogResponse>, ApiError> {
    let blog = repository::get_by_slug(&pool, &slug).await?;
    Ok(Json(BlogResponse { blog }))
}

/// Create a new blog post (admin only)
///
/// # Errors
///
/// * `400 Bad Request` - Missing title, content, or published date
/// * `409 Conflict` - The derived slug already exists
/// * `401 Unauthorized` - No valid session
pub async fn create_blog(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(request): Json<CreateBlogRequest>,
) -> Result<(StatusCode, Json<BlogResponse>), ApiError> {
    let (Some(title), Some(content), Some(published_date)) =
        (request.title, request.content, request.published_date)
    else {
        return Err(ApiError::validation(
            "Title, content, and published_date are required",
        ));
    };

    let blog = repository::create(
        &state.pool,
        NewBlogPost {
            title,
            content,
            excerpt: request.excerpt,
            image_url: request.image_url,
            published_date,
        },
    )
    .await?;

    tracing::info!("Created blog '{}'", blog.slug);
    Ok((StatusCode::CREATED, Json(BlogResponse { blog })))
}

/// Apply a partial update to a blog post (admin only)
///
/// Only supplied fields change; a supplied non-empty title regenerates the
/// slug, so the post's public URL moves with its title.
pub async fn update_blog(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(patch): Json<BlogPatch>,
) -> Result<Json<BlogResponse>, ApiError> {
    let blog = repository::update(&state.pool, &slug, patch).await?;
    tracing::info!("Updated blog '{}'", blog.slug);
    Ok(Json(BlogResponse { blog }))
}

/// Delete a blog post (admin only)
pub async fn delete_blog(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let removed = repository::delete(&state.pool, &slug).await?;
    tracing::info!("Deleted blog '{}'", removed.slug);
    Ok(Json(SuccessResponse { success: true }))
}
