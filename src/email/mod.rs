//! Email Module
//!
//! Outbound transactional email over SMTP:
//!
//! - **`templates`** - Notification payloads and plain/HTML message bodies
//! - **`mailer`** - The lettre SMTP transport and send operations
//!
//! The mailer is a fire-and-forget notification sink. It is optional (the
//! server runs without SMTP configuration), and send failures are logged by
//! callers and never fail the triggering business operation.

pub mod mailer;
pub mod templates;
