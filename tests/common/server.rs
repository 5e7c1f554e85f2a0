//! Test server utilities
//!
//! Spawns the real application router on an ephemeral port and talks to it
//! over HTTP with reqwest, so the tests exercise routing, extractors, and
//! cookies exactly as a browser would.

use std::sync::Arc;

use sqlx::PgPool;

use gi_site::routes::router::create_router;
use gi_site::server::config::AppConfig;
use gi_site::server::state::AppState;

/// Admin identity configured into every test server
pub const TEST_ADMIN_EMAIL: &str = "contact@global-internships.com";
pub const TEST_ADMIN_PASSWORD: &str = "correct-horse-battery-staple";

/// Build a test configuration around an already-connected pool
///
/// The mailer is left unconfigured, so notification sends are skipped.
pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        database_url: String::new(),
        admin_email: TEST_ADMIN_EMAIL.to_string(),
        // Low cost keeps the test suite fast; production hashes use the
        // bcrypt default
        admin_password_hash: bcrypt::hash(TEST_ADMIN_PASSWORD, 4).unwrap(),
        session_ttl_days: 7,
        smtp: None,
        alert_email: None,
        site_url: "http://localhost".to_string(),
    }
}

/// Spin up a test server and return its base URL
pub async fn spawn_test_server(pool: PgPool) -> String {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        mailer: None,
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Log in with the test admin credentials and return the session token
pub async fn login(client: &reqwest::Client, base_url: &str) -> String {
    let response = client
        .post(format!("{base_url}/api/auth/login"))
        .json(&serde_json::json!({
            "email": TEST_ADMIN_EMAIL,
            "password": TEST_ADMIN_PASSWORD,
        }))
        .send()
        .await
        .expect("login request failed");
    assert_eq!(response.status(), 200);

    let set_cookie = response
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .expect("login should set the session cookie")
        .to_str()
        .unwrap();

    set_cookie
        .split(';')
        .next()
        .unwrap()
        .trim()
        .strip_prefix("admin_session=")
        .expect("cookie should be the admin session")
        .to_string()
}

/// Cookie header value carrying a session token
pub fn session_cookie(token: &str) -> String {
    format!("admin_session={token}")
}
