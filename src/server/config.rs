/**
 * Server Configuration
 *
 * This module loads and validates server configuration from environment
 * variables (a `.env` file is honored by the entry point).
 *
 * # Configuration Sources
 *
 * Required:
 * - `DATABASE_URL` - PostgreSQL connection string
 * - `ADMIN_EMAIL` - The single admin identity
 * - `ADMIN_PASSWORD_HASH` - bcrypt hash of the admin password
 *
 * Optional (with defaults):
 * - `SERVER_PORT` - Listen port (default 3000)
 * - `SESSION_TTL_DAYS` - Admin session lifetime (default 7)
 * - `SITE_URL` - Public site URL used in email bodies
 *
 * Optional (feature-gating):
 * - `SMTP_HOST`, `SMTP_PORT`, `SMTP_USER`, `SMTP_PASSWORD`, `SMTP_FROM` -
 *   SMTP relay; when `SMTP_HOST` is unset the mailer is disabled and the
 *   server runs without outbound email
 * - `ALERT_EMAIL` - Recipient for admin alert notifications
 *
 * # Error Handling
 *
 * A missing database or admin credential aborts startup. A missing SMTP
 * configuration only disables the mailer.
 */

use std::net::SocketAddr;
use thiserror::Error;

/// Default admin session lifetime in days
pub const DEFAULT_SESSION_TTL_DAYS: i64 = 7;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {name}: {message}")]
    Invalid { name: &'static str, message: String },
}

/// SMTP relay configuration
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    /// Relay credentials; both must be set for authenticated submission
    pub username: Option<String>,
    pub password: Option<String>,
    /// Sender mailbox, e.g. `Global Internships <no-reply@global-internships.com>`
    pub from: String,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,
    /// PostgreSQL connection string
    pub database_url: String,
    /// The single configured admin identity
    pub admin_email: String,
    /// bcrypt hash the login password is verified against
    pub admin_password_hash: String,
    /// Admin session lifetime
    pub session_ttl_days: i64,
    /// SMTP relay; `None` disables outbound email
    pub smtp: Option<SmtpConfig>,
    /// Recipient for signup/contact alert emails
    pub alert_email: Option<String>,
    /// Public site URL referenced in email bodies
    pub site_url: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required variable is missing or a numeric
    /// variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require("DATABASE_URL")?;
        let admin_email = require("ADMIN_EMAIL")?;
        let admin_password_hash = require("ADMIN_PASSWORD_HASH")?;

        let port: u16 = parse_or("SERVER_PORT", 3000)?;
        let session_ttl_days: i64 = parse_or("SESSION_TTL_DAYS", DEFAULT_SESSION_TTL_DAYS)?;

        let smtp = match optional("SMTP_HOST") {
            Some(host) => Some(SmtpConfig {
                host,
                port: parse_or("SMTP_PORT", 587)?,
                username: optional("SMTP_USER"),
                password: optional("SMTP_PASSWORD"),
                from: require("SMTP_FROM")?,
            }),
            None => {
                tracing::warn!("SMTP_HOST not set. Outbound email will be disabled.");
                None
            }
        };

        Ok(AppConfig {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], port)),
            database_url,
            admin_email,
            admin_password_hash,
            session_ttl_days,
            smtp,
            alert_email: optional("ALERT_EMAIL"),
            site_url: optional("SITE_URL")
                .unwrap_or_else(|| "https://global-internships.com".to_string()),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    optional(name).ok_or(ConfigError::MissingVar(name))
}

/// Read an environment variable, treating empty values as unset.
fn optional(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

fn parse_or<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match optional(name) {
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            message: e.to_string(),
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_required_vars() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/gi_site_test");
        std::env::set_var("ADMIN_EMAIL", "contact@global-internships.com");
        std::env::set_var("ADMIN_PASSWORD_HASH", "$2b$12$abcdefghijklmnopqrstuv");
    }

    fn clear_optional_vars() {
        for name in [
            "SERVER_PORT",
            "SESSION_TTL_DAYS",
            "SMTP_HOST",
            "SMTP_PORT",
            "SMTP_USER",
            "SMTP_PASSWORD",
            "SMTP_FROM",
            "ALERT_EMAIL",
            "SITE_URL",
        ] {
            std::env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        set_required_vars();
        clear_optional_vars();

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.session_ttl_days, DEFAULT_SESSION_TTL_DAYS);
        assert!(config.smtp.is_none());
        assert!(config.alert_email.is_none());
        assert_eq!(config.site_url, "https://global-internships.com");
    }

    #[test]
    #[serial]
    fn test_missing_admin_credentials() {
        set_required_vars();
        clear_optional_vars();
        std::env::remove_var("ADMIN_PASSWORD_HASH");

        let result = AppConfig::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::MissingVar("ADMIN_PASSWORD_HASH"))
        ));
    }

    #[test]
    #[serial]
    fn test_smtp_enabled_when_host_set() {
        set_required_vars();
        clear_optional_vars();
        std::env::set_var("SMTP_HOST", "smtp.example.com");
        std::env::set_var("SMTP_FROM", "no-reply@global-internships.com");

        let config = AppConfig::from_env().unwrap();
        let smtp = config.smtp.expect("smtp should be configured");
        assert_eq!(smtp.host, "smtp.example.com");
        assert_eq!(smtp.port, 587);
        assert!(smtp.username.is_none());
    }

    #[test]
    #[serial]
    fn test_invalid_port() {
        set_required_vars();
        clear_optional_vars();
        std::env::set_var("SERVER_PORT", "not-a-port");

        let result = AppConfig::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { name: "SERVER_PORT", .. })
        ));
        std::env::remove_var("SERVER_PORT");
    }
}
