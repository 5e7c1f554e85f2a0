/**
 * Student Signup Model and Database Operations
 */

use sqlx::PgPool;

use crate::error::{conflict_on_unique, ApiError};

/// Validated input for a signup row
#[derive(Debug, Clone)]
pub struct NewSignup {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub university: String,
    pub major: String,
    /// Reference to the uploaded CV, when one was attached
    pub cv_url: Option<String>,
    pub message: Option<String>,
}

/// Insert a signup row and return its store-assigned id
///
/// A duplicate email violates the unique constraint and surfaces as
/// `Conflict`.
pub async fn insert_signup(pool: &PgPool, signup: NewSignup) -> Result<i32, ApiError> {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO student_signups
            (first_name, last_name, email, address, university, major, cv_url, message)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id
        "#,
    )
    .bind(&signup.first_name)
    .bind(&signup.last_name)
    .bind(&signup.email)
    .bind(&signup.address)
    .bind(&signup.university)
    .bind(&signup.major)
    .bind(&signup.cv_url)
    .bind(&signup.message)
    .fetch_one(pool)
    .await
    .map_err(|e| conflict_on_unique(e, "This email address is already registered"))
}
