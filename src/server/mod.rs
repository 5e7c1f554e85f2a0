//! Server Module
//!
//! Server bootstrap for the GI-Site backend:
//!
//! - **`config`** - Typed configuration loaded from environment variables
//! - **`schema`** - Idempotent creation of the three database relations
//! - **`state`** - Shared application state for Axum handlers
//! - **`init`** - App assembly: pool, schema, mailer, router, background
//!   session sweep

pub mod config;
pub mod init;
pub mod schema;
pub mod state;
