//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_route_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id header must be set");
    assert!(!request_id.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cors_preflight_allows_dev_origin(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/places")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn map_config_reports_missing_token(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/map/config").await).await;
    assert_eq!(json["data"]["available"], false);
    assert!(json["data"]["access_token"].is_null());

    let mut config = common::test_config();
    config.mapbox_api_key = Some("pk.test-token".to_string());
    let app = common::build_app_with_config(
        pool,
        config,
        common::StubChat::default(),
        common::StubVideos { available: false },
    );
    let json = body_json(get(app, "/api/v1/map/config").await).await;
    assert_eq!(json["data"]["available"], true);
    assert_eq!(json["data"]["access_token"], "pk.test-token");
}
