//! Student Signup Module
//!
//! Public intake for the multi-step signup form on the landing page:
//!
//! - **`models`** - The `student_signups` row insert
//! - **`handlers`** - Multipart form parsing, validation, and notification
//!
//! A signup is written once and never updated or deleted by this system.
//! Duplicate emails surface as a 409 conflict, and notification emails are
//! fire-and-forget: a failed send never fails the signup.

pub mod handlers;
pub mod models;
