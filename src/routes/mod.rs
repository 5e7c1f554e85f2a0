//! Routes Module
//!
//! HTTP route configuration:
//!
//! - **`api_routes`** - The `/api` endpoints (blogs, auth, signup, contact,
//!   seed tooling)
//! - **`router`** - Router assembly: API routes, static file serving,
//!   fallback handler, body limit

pub mod api_routes;
pub mod router;
