//! Error Types Module
//!
//! This module defines the API error taxonomy used across all handlers and
//! repositories, plus the conversions that turn those errors into HTTP
//! responses.
//!
//! # Organization
//!
//! - `types` - The `ApiError` enum and status code mapping
//! - `conversion` - `IntoResponse` implementation and reclassification of
//!   store-level unique-constraint violations

pub mod conversion;
pub mod types;

pub use conversion::conflict_on_unique;
pub use types::ApiError;
