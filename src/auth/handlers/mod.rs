//! Authentication Handlers
//!
//! HTTP handlers for the admin authentication endpoints:
//!
//! - `POST /api/auth/login` - Verify credentials, set the session cookie
//! - `GET /api/auth/check` - Report whether the caller holds a live session
//! - `POST /api/auth/logout` - Revoke the session, clear the cookie

pub mod check;
pub mod login;
pub mod logout;
pub mod types;

pub use check::check;
pub use login::login;
pub use logout::logout;
