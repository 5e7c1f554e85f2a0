//! Authentication Module
//!
//! Admin authentication for the content management surface:
//!
//! - **`sessions`** - Opaque bearer tokens persisted in `admin_sessions`
//!   with fixed-duration expiry, plus the credential check that issues them
//! - **`handlers`** - HTTP handlers for login, logout, and session check
//!
//! There is a single admin identity, configured via `ADMIN_EMAIL` and
//! `ADMIN_PASSWORD_HASH` (bcrypt). The session token travels in the
//! `admin_session` cookie and grants access to the mutating blog endpoints.

pub mod handlers;
pub mod sessions;
