//! HTTP-level integration tests for registration, login, and the current
//! user endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn register_returns_token_and_user(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/register",
        json!({ "email": "  Asha@Example.com ", "password": "secret123" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert_eq!(json["expires_in"], 3600);
    assert_eq!(json["user"]["email"], "asha@example.com");
    assert!(json["user"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_rejects_short_password_and_bad_email(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/register",
        json!({ "email": "not-an-email", "password": "123" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("email is invalid"));
    assert!(message.contains("at least 6 characters"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_email_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool);
    common::register(app.clone(), "dup@example.com").await;

    let response = post_json(
        app,
        "/api/v1/auth/register",
        json!({ "email": "DUP@example.com", "password": "another123" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_and_me_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);
    common::register(app.clone(), "traveller@example.com").await;

    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "email": "traveller@example.com", "password": "secret123" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let token = body_json(response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = get_auth(app, "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "traveller@example.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_wrong_password_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);
    common::register(app.clone(), "wrongpw@example.com").await;

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "email": "wrongpw@example.com", "password": "nope-nope" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid email or password");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn me_requires_valid_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app, "/api/v1/auth/me", "garbage.token.value").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
