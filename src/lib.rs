//! GI-Site - Main Library
//!
//! GI-Site is the backend server for the Global Internships marketing
//! website, built with Rust. It serves the public blog/news API, takes in
//! student signups and contact messages, and exposes a session-protected
//! admin surface for managing blog posts.
//!
//! # Overview
//!
//! This library provides the core functionality for GI-Site, including:
//! - Public blog listing and lookup by slug
//! - Admin-authenticated blog create/update/delete with derived slugs
//! - Cookie-based admin sessions persisted in PostgreSQL
//! - Student signup intake (multipart form with optional CV)
//! - Contact form handling
//! - Transactional email notifications over SMTP (fire-and-forget)
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`server`** - Server initialization, application state, configuration,
//!   and idempotent schema creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Admin login, session issuance/validation/revocation
//! - **`blog`** - Slug generation, blog repository, handlers, seed tooling
//! - **`signup`** - Student signup intake
//! - **`contact`** - Contact form handling
//! - **`email`** - SMTP mailer and message templates
//! - **`middleware`** - Session extraction for protected handlers
//! - **`error`** - API error types and HTTP response conversions
//!
//! # State Management
//!
//! All request handlers share an `AppState` containing the PostgreSQL
//! connection pool, the loaded configuration, and the optional mailer.
//! No other state crosses requests; the database is the single source of
//! truth for blogs, signups, and sessions.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>`. The error type maps onto HTTP
//! status codes (400/401/404/409/500) and hides internal detail from
//! responses while logging it via `tracing`.

pub mod auth;
pub mod blog;
pub mod contact;
pub mod email;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod signup;
