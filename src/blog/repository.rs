/**
 * Blog Repository
 *
 * Database operations over the `blogs` relation. The repository owns slug
 * derivation and input validation for writes; authorization is the HTTP
 * surface's responsibility and never happens here.
 *
 * # Error Mapping
 *
 * - Missing/empty required input -> `Validation`
 * - No matching row -> `NotFound`
 * - Duplicate slug (store unique constraint) -> `Conflict`
 * - Anything else from the store -> `Database`
 */

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::blog::models::{BlogPatch, BlogPost, BlogSummary, NewBlogPost};
use crate::blog::slug::slugify;
use crate::error::{conflict_on_unique, ApiError};

/// Page size applied when the caller does not specify one
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound on the page size; larger requests are clamped rather than
/// rejected, preventing unbounded scans
pub const MAX_PAGE_SIZE: i64 = 100;

/// Message returned when a derived slug collides with an existing row
const SLUG_CONFLICT: &str = "A blog with this title already exists";

/// List posts ordered by published date descending
///
/// Returns the requested page (without post bodies) together with the
/// unfiltered row count. `limit` is clamped to `1..=MAX_PAGE_SIZE` and a
/// negative `offset` is treated as zero.
pub async fn list(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<(Vec<BlogSummary>, i64), ApiError> {
    let limit = limit.clamp(1, MAX_PAGE_SIZE);
    let offset = offset.max(0);

    let blogs = sqlx::query_as::<_, BlogSummary>(
        r#"
        SELECT id, title, slug, excerpt, image_url, published_date, created_at, updated_at
        FROM blogs
        ORDER BY published_date DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
        .fetch_one(pool)
        .await?;

    Ok((blogs, total))
}

/// Fetch a single post by its slug
pub async fn get_by_slug(pool: &PgPool, slug: &str) -> Result<BlogPost, ApiError> {
    sqlx::query_as::<_, BlogPost>(
        r#"
        SELECT id, title, slug, content, excerpt, image_url, published_date, created_at, updated_at
        FROM blogs
        WHERE slug = $1
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| ApiError::not_found("Blog not found"))
}

/// Insert a new post
///
/// Requires a non-empty title and content. The slug is derived from the
/// title; a title with no alphanumeric characters is rejected, and a slug
/// collision surfaces as `Conflict`.
pub async fn create(pool: &PgPool, new: NewBlogPost) -> Result<BlogPost, ApiError> {
    let title = new.title.trim();
    if title.is_empty() {
        return Err(ApiError::validation("Title must not be empty"));
    }
    if new.content.trim().is_empty() {
        return Err(ApiError::validation("Content must not be empty"));
    }

    let slug = slugify(title);
    if slug.is_empty() {
        return Err(ApiError::validation(
            "Title must contain at least one letter or digit",
        ));
    }

    sqlx::query_as::<_, BlogPost>(
        r#"
        INSERT INTO blogs (title, slug, content, excerpt, image_url, published_date)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, title, slug, content, excerpt, image_url, published_date, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(&slug)
    .bind(&new.content)
    .bind(&new.excerpt)
    .bind(&new.image_url)
    .bind(new.published_date)
    .fetch_one(pool)
    .await
    .map_err(|e| conflict_on_unique(e, SLUG_CONFLICT))
}

/// Apply a partial update to the post with the given slug
///
/// Only supplied fields change. A supplied non-blank title also regenerates
/// the slug, and `updated_at` is always refreshed. Everything happens in a
/// single UPDATE statement, so concurrent readers never observe a
/// half-applied rename.
pub async fn update(pool: &PgPool, slug: &str, patch: BlogPatch) -> Result<BlogPost, ApiError> {
    let mut builder = QueryBuilder::<Postgres>::new("UPDATE blogs SET ");
    let mut fields = builder.separated(", ");

    if let Some(title) = patch.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        let new_slug = slugify(title);
        if new_slug.is_empty() {
            return Err(ApiError::validation(
                "Title must contain at least one letter or digit",
            ));
        }
        fields.push("title = ").push_bind_unseparated(title.to_string());
        fields.push("slug = ").push_bind_unseparated(new_slug);
    }
    if let Some(content) = patch.content {
        fields.push("content = ").push_bind_unseparated(content);
    }
    if let Some(excerpt) = patch.excerpt {
        fields.push("excerpt = ").push_bind_unseparated(excerpt);
    }
    if let Some(image_url) = patch.image_url {
        fields.push("image_url = ").push_bind_unseparated(image_url);
    }
    if let Some(published_date) = patch.published_date {
        fields
            .push("published_date = ")
            .push_bind_unseparated(published_date);
    }
    fields.push("updated_at = NOW()");

    builder.push(" WHERE slug = ").push_bind(slug);
    builder.push(
        " RETURNING id, title, slug, content, excerpt, image_url, published_date, created_at, updated_at",
    );

    builder
        .build_query_as::<BlogPost>()
        .fetch_optional(pool)
        .await
        .map_err(|e| conflict_on_unique(e, SLUG_CONFLICT))?
        .ok_or_else(|| ApiError::not_found("Blog not found"))
}

/// Delete the post with the given slug and return the removed row
pub async fn delete(pool: &PgPool, slug: &str) -> Result<BlogPost, ApiError> {
    sqlx::query_as::<_, BlogPost>(
        r#"
        DELETE FROM blogs
        WHERE slug = $1
        RETURNING id, title, slug, content, excerpt, image_url, published_date, created_at, updated_at
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| ApiError::not_found("Blog not found"))
}
