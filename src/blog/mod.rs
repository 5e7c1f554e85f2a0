//! Blog Module
//!
//! The content management core:
//!
//! - **`slug`** - Deterministic title-to-slug derivation
//! - **`models`** - Row and request/response types for the `blogs` relation
//! - **`repository`** - CRUD operations over `blogs`
//! - **`handlers`** - HTTP handlers translating repository results to JSON
//! - **`seed`** - Demo fixtures: destructive batch seeding and the bulk
//!   image backfill, both admin-only
//!
//! Reads are public; every mutation requires a validated admin session,
//! enforced at the HTTP surface (the repository itself performs no
//! authorization).

pub mod handlers;
pub mod models;
pub mod repository;
pub mod seed;
pub mod slug;
