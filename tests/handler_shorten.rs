mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;
use urlclip::api::handlers::shorten_handler;

fn shorten_app(state: urlclip::AppState) -> Router {
    Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_shorten_generates_six_char_code(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "original_url": "https://example.com/page" }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["original_url"], "https://example.com/page");

    let code = body["short_code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));

    let short_url = body["short_url"].as_str().unwrap();
    assert_eq!(short_url, format!("http://localhost:3000/{}", code));
}

#[sqlx::test]
async fn test_shorten_prefixes_missing_scheme(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "original_url": "example.com" }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["original_url"], "https://example.com");
}

#[sqlx::test]
async fn test_shorten_with_custom_code(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "original_url": "https://example.com", "custom_code": "promo2025" }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["short_code"], "promo2025");
}

#[sqlx::test]
async fn test_shorten_empty_url_rejected(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "original_url": "   " }))
        .await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "URL is required");
}

#[sqlx::test]
async fn test_shorten_custom_code_too_short(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "original_url": "https://example.com", "custom_code": "ab" }))
        .await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["error"], "Custom code must be at least 3 characters");
}

#[sqlx::test]
async fn test_shorten_custom_code_non_alphanumeric(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "original_url": "https://example.com", "custom_code": "my-code" }))
        .await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["error"], "Custom code can only contain letters and numbers");
}

#[sqlx::test]
async fn test_shorten_custom_code_taken(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(shorten_app(state)).unwrap();

    common::create_test_link(&pool, "taken1", "https://example.com/first").await;

    let response = server
        .post("/api/shorten")
        .json(&json!({ "original_url": "https://example.com/second", "custom_code": "taken1" }))
        .await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Custom code already taken");
}

#[sqlx::test]
async fn test_shorten_empty_custom_code_treated_as_generated(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(shorten_app(state)).unwrap();

    // The web form always submits custom_code, empty when unchecked.
    let response = server
        .post("/api/shorten")
        .json(&json!({ "original_url": "https://example.com", "custom_code": "" }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["short_code"].as_str().unwrap().len(), 6);
}
