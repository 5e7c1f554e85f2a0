/**
 * Authentication Handler Types
 *
 * Request and response types used by the login, logout, and session check
 * handlers.
 */

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Admin email address
    pub email: String,
    /// Admin password (verified against the configured bcrypt hash)
    pub password: String,
}

/// Login and logout response
#[derive(Serialize, Debug)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Session check response
#[derive(Serialize, Deserialize, Debug)]
pub struct CheckResponse {
    pub authenticated: bool,
}
