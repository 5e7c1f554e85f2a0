//! Blog API integration tests
//!
//! End-to-end tests for the blog CRUD flow: create, list, lookup, partial
//! update (including the slug-moving title change), delete, and the seed
//! tooling. These run against a real PostgreSQL instance; start one and set
//! `DATABASE_URL`, then run with `cargo test -- --ignored`.

mod common;

use serial_test::serial;

use common::database::TestDatabase;
use common::server::{login, session_cookie, spawn_test_server};

async fn create_blog(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    title: &str,
) -> reqwest::Response {
    client
        .post(format!("{base_url}/api/blogs"))
        .header(reqwest::header::COOKIE, session_cookie(token))
        .json(&serde_json::json!({
            "title": title,
            "content": "<p>Event recap body</p>",
            "excerpt": "Event recap",
            "published_date": "2025-06-01T00:00:00Z",
        }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
#[serial]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_create_and_fetch_by_slug() {
    let db = TestDatabase::new().await;
    db.cleanup().await;
    let base_url = spawn_test_server(db.pool().clone()).await;
    let client = reqwest::Client::new();
    let token = login(&client, &base_url).await;

    let response = create_blog(&client, &base_url, &token, "London Tech Week Recap!").await;
    assert_eq!(response.status(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["blog"]["slug"], "london-tech-week-recap");

    let response = client
        .get(format!("{base_url}/api/blogs/london-tech-week-recap"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["blog"]["title"], "London Tech Week Recap!");
}

#[tokio::test]
#[serial]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_duplicate_title_conflicts() {
    let db = TestDatabase::new().await;
    db.cleanup().await;
    let base_url = spawn_test_server(db.pool().clone()).await;
    let client = reqwest::Client::new();
    let token = login(&client, &base_url).await;

    let response = create_blog(&client, &base_url, &token, "Same Title").await;
    assert_eq!(response.status(), 201);

    // Identical title derives an identical slug
    let response = create_blog(&client, &base_url, &token, "Same Title").await;
    assert_eq!(response.status(), 409);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_create_without_content_is_rejected() {
    let db = TestDatabase::new().await;
    db.cleanup().await;
    let base_url = spawn_test_server(db.pool().clone()).await;
    let client = reqwest::Client::new();
    let token = login(&client, &base_url).await;

    let response = client
        .post(format!("{base_url}/api/blogs"))
        .header(reqwest::header::COOKIE, session_cookie(&token))
        .json(&serde_json::json!({
            "title": "No body",
            "published_date": "2025-06-01T00:00:00Z",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    // No row was inserted
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_title_update_moves_slug() {
    let db = TestDatabase::new().await;
    db.cleanup().await;
    let base_url = spawn_test_server(db.pool().clone()).await;
    let client = reqwest::Client::new();
    let token = login(&client, &base_url).await;

    create_blog(&client, &base_url, &token, "Old Title").await;

    let response = client
        .put(format!("{base_url}/api/blogs/old-title"))
        .header(reqwest::header::COOKIE, session_cookie(&token))
        .json(&serde_json::json!({ "title": "New Title" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["blog"]["title"], "New Title");
    assert_eq!(body["blog"]["slug"], "new-title");

    // The old slug no longer resolves
    let response = client
        .get(format!("{base_url}/api/blogs/old-title"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    // The new one does
    let response = client
        .get(format!("{base_url}/api/blogs/new-title"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_partial_update_leaves_other_fields() {
    let db = TestDatabase::new().await;
    db.cleanup().await;
    let base_url = spawn_test_server(db.pool().clone()).await;
    let client = reqwest::Client::new();
    let token = login(&client, &base_url).await;

    create_blog(&client, &base_url, &token, "Stable Post").await;

    let response = client
        .put(format!("{base_url}/api/blogs/stable-post"))
        .header(reqwest::header::COOKIE, session_cookie(&token))
        .json(&serde_json::json!({ "excerpt": "Fresh excerpt" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["blog"]["excerpt"], "Fresh excerpt");
    assert_eq!(body["blog"]["title"], "Stable Post");
    assert_eq!(body["blog"]["slug"], "stable-post");
    assert_eq!(body["blog"]["content"], "<p>Event recap body</p>");
}

#[tokio::test]
#[serial]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_delete_removes_row() {
    let db = TestDatabase::new().await;
    db.cleanup().await;
    let base_url = spawn_test_server(db.pool().clone()).await;
    let client = reqwest::Client::new();
    let token = login(&client, &base_url).await;

    create_blog(&client, &base_url, &token, "Short Lived").await;

    let response = client
        .delete(format!("{base_url}/api/blogs/short-lived"))
        .header(reqwest::header::COOKIE, session_cookie(&token))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);

    let response = client
        .delete(format!("{base_url}/api/blogs/short-lived"))
        .header(reqwest::header::COOKIE, session_cookie(&token))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_listing_paginates_and_counts() {
    let db = TestDatabase::new().await;
    db.cleanup().await;
    let base_url = spawn_test_server(db.pool().clone()).await;
    let client = reqwest::Client::new();
    let token = login(&client, &base_url).await;

    for i in 0..12 {
        let response = create_blog(&client, &base_url, &token, &format!("Post number {i}")).await;
        assert_eq!(response.status(), 201);
    }

    let response = client
        .get(format!("{base_url}/api/blogs?limit=5&offset=0"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["blogs"].as_array().unwrap().len(), 5);
    assert_eq!(body["total"], 12);
    assert_eq!(body["limit"], 5);

    // Listing rows carry no content
    assert!(body["blogs"][0].get("content").is_none());
}

#[tokio::test]
#[serial]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_seed_replaces_all_posts() {
    let db = TestDatabase::new().await;
    db.cleanup().await;
    let base_url = spawn_test_server(db.pool().clone()).await;
    let client = reqwest::Client::new();
    let token = login(&client, &base_url).await;

    create_blog(&client, &base_url, &token, "Pre-seed post").await;

    let response = client
        .post(format!("{base_url}/api/seed-blogs"))
        .header(reqwest::header::COOKIE, session_cookie(&token))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["blogs"].as_array().unwrap().len(), 15);

    // The pre-existing post is gone and exactly the seed batch remains
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(count, 15);

    let slugs: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT slug) FROM blogs")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(slugs, 15);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn test_seed_requires_session() {
    let db = TestDatabase::new().await;
    db.cleanup().await;
    let base_url = spawn_test_server(db.pool().clone()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base_url}/api/seed-blogs"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);

    let response = client
        .post(format!("{base_url}/api/fix-blog-images"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
}
