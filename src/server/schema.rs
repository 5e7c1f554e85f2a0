/**
 * Database Schema
 *
 * This module creates the three relations the application persists to:
 * `student_signups`, `blogs`, and `admin_sessions`. Creation is idempotent
 * (`CREATE TABLE IF NOT EXISTS`) and runs once at startup before the server
 * accepts requests.
 */

use sqlx::PgPool;

/// Create the application schema if it does not exist yet
///
/// # Errors
///
/// Returns the underlying `sqlx::Error` if any statement fails; the server
/// does not start without a usable schema.
pub async fn init_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS student_signups (
            id SERIAL PRIMARY KEY,
            first_name VARCHAR(100) NOT NULL,
            last_name VARCHAR(100) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            address TEXT NOT NULL,
            university VARCHAR(255) NOT NULL,
            major VARCHAR(255) NOT NULL,
            cv_url TEXT,
            message TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS blogs (
            id SERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            slug VARCHAR(255) NOT NULL UNIQUE,
            content TEXT NOT NULL,
            excerpt TEXT,
            image_url TEXT,
            published_date TIMESTAMPTZ NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS admin_sessions (
            id SERIAL PRIMARY KEY,
            token VARCHAR(255) NOT NULL UNIQUE,
            expires_at TIMESTAMPTZ NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database schema ready");
    Ok(())
}
