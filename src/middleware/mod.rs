//! Middleware Module
//!
//! Request-processing helpers shared by handlers, currently the admin
//! session extraction and validation used by protected routes.

pub mod auth;
