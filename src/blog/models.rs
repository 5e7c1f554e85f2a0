/**
 * Blog Models
 *
 * Row types for the `blogs` relation and the request/response types used by
 * the blog handlers.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A full blog post row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BlogPost {
    /// Store-assigned identifier
    pub id: i32,
    pub title: String,
    /// URL-safe lookup key, unique, derived from the title
    pub slug: String,
    /// HTML body
    pub content: String,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub published_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A blog row without its body, as returned by the listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BlogSummary {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub published_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating a post
#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub published_date: DateTime<Utc>,
}

/// Partial update: only supplied fields change
///
/// A supplied non-empty title regenerates the slug as part of the same
/// update statement.
#[derive(Debug, Default, Deserialize)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub published_date: Option<DateTime<Utc>>,
}

/// Body for POST /api/blogs
///
/// All fields are optional at the deserialization layer so that missing
/// required fields surface as a 400 validation error rather than a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub published_date: Option<DateTime<Utc>>,
}

/// Response wrapper for a single post
#[derive(Debug, Serialize)]
pub struct BlogResponse {
    pub blog: BlogPost,
}

/// Response for GET /api/blogs
#[derive(Debug, Serialize)]
pub struct BlogListResponse {
    pub blogs: Vec<BlogSummary>,
    /// Unfiltered row count
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}
