//! HTTP-level integration tests for places, map data, and the home page.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth};
use serde_json::Value;
use sqlx::PgPool;
use wanderistan_db::models::place::CreatePlace;
use wanderistan_db::models::video::CreateVideo;
use wanderistan_db::repositories::{PlaceRepo, VideoRepo};

async fn create_place(pool: &PgPool, name: &str, region: &str, category: &str) -> i64 {
    PlaceRepo::create(
        pool,
        &CreatePlace {
            name: name.to_string(),
            description: Some(format!("Stored words about {name}")),
            latitude: 26.9124,
            longitude: 75.7873,
            region: region.to_string(),
            category: category.to_string(),
            cover_image_url: Some(format!("https://img.example.com/{name}.jpg")),
            featured: category == "Historical",
        },
    )
    .await
    .unwrap()
    .id
}

async fn add_video(pool: &PgPool, place_id: i64, video_id: &str) {
    VideoRepo::create(
        pool,
        &CreateVideo {
            place_id,
            youtube_url: format!("https://www.youtube.com/watch?v={video_id}"),
            title: format!("Video {video_id}"),
            thumbnail_url: format!("https://i.ytimg.com/vi/{video_id}/hqdefault.jpg"),
        },
    )
    .await
    .unwrap();
}

fn names(json: &Value) -> Vec<&str> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_applies_filters(pool: PgPool) {
    create_place(&pool, "Jaipur", "North India", "Historical").await;
    create_place(&pool, "Varkala", "South India", "Beach").await;
    create_place(&pool, "Manali", "North India", "Mountain").await;
    let app = common::build_test_app(pool);

    let json = body_json(get(app.clone(), "/api/v1/places").await).await;
    assert_eq!(names(&json), ["Jaipur", "Manali", "Varkala"]);

    let json = body_json(get(app.clone(), "/api/v1/places?region=North%20India").await).await;
    assert_eq!(names(&json), ["Jaipur", "Manali"]);

    let json = body_json(get(app.clone(), "/api/v1/places?category=Beach").await).await;
    assert_eq!(names(&json), ["Varkala"]);

    let json = body_json(get(app.clone(), "/api/v1/places?search=about%20man").await).await;
    assert_eq!(names(&json), ["Manali"]);

    let json = body_json(get(app, "/api/v1/places?category=&region=%20").await).await;
    assert_eq!(names(&json).len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn detail_includes_videos_related_and_map_url(pool: PgPool) {
    let jaipur = create_place(&pool, "Jaipur", "North India", "Historical").await;
    create_place(&pool, "Agra", "North India", "Historical").await;
    create_place(&pool, "Goa", "West India", "Beach").await;
    add_video(&pool, jaipur, "abcDEF12345").await;
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/api/v1/places/{jaipur}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();

    assert_eq!(data["place"]["name"], "Jaipur");
    assert_eq!(data["coordinates"][0], 26.9124);
    assert_eq!(
        data["map_url"],
        "https://www.google.com/maps?q=26.9124,75.7873"
    );
    assert_eq!(
        data["videos"][0]["embed_url"],
        "https://www.youtube.com/embed/abcDEF12345"
    );
    let related = data["related_places"].as_array().unwrap();
    assert_eq!(related.len(), 1);
    assert_eq!(related[0]["name"], "Agra");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_place_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/places/424242").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Place with id 424242 not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn map_data_groups_videos_per_place(pool: PgPool) {
    let jaipur = create_place(&pool, "Jaipur", "North India", "Historical").await;
    let goa = create_place(&pool, "Goa", "West India", "Beach").await;
    add_video(&pool, jaipur, "aaaaaaaaaaa").await;
    add_video(&pool, jaipur, "bbbbbbbbbbb").await;
    let app = common::build_test_app(pool);

    let json = body_json(get(app, "/api/v1/places/map-data").await).await;
    let markers = json["data"].as_array().unwrap();
    assert_eq!(markers.len(), 2);

    let marker = |id: i64| markers.iter().find(|m| m["id"] == id).unwrap();
    assert_eq!(marker(jaipur)["stats"]["video_count"], 2);
    assert_eq!(marker(jaipur)["videos"].as_array().unwrap().len(), 2);
    assert_eq!(marker(goa)["stats"]["video_count"], 0);
    assert_eq!(
        marker(goa)["image_url"],
        "https://img.example.com/Goa.jpg"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn description_prefers_generated_text(pool: PgPool) {
    let jaipur = create_place(&pool, "Jaipur", "North India", "Historical").await;
    let uri = format!("/api/v1/places/{jaipur}/description");

    let app = common::build_test_app(pool.clone());
    let data = body_json(get(app, &uri).await).await["data"].clone();
    assert_eq!(data["source"], "generated");
    assert_eq!(data["description"], "A pink city of palaces and bazaars.");

    let app = common::build_degraded_app(pool);
    let data = body_json(get(app, &uri).await).await["data"].clone();
    assert_eq!(data["source"], "stored");
    assert_eq!(data["description"], "Stored words about Jaipur");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn home_lists_featured_and_personal_trips(pool: PgPool) {
    create_place(&pool, "Jaipur", "North India", "Historical").await;
    create_place(&pool, "Goa", "West India", "Beach").await;
    let app = common::build_test_app(pool);

    let json = body_json(get(app.clone(), "/api/v1/home").await).await;
    let data = &json["data"];
    assert_eq!(data["featured_places"].as_array().unwrap().len(), 1);
    assert_eq!(data["featured_places"][0]["name"], "Jaipur");
    assert!(data["recent_trips"].as_array().unwrap().is_empty());
    assert!(!data["categories"].as_array().unwrap().is_empty());
    assert!(!data["regions"].as_array().unwrap().is_empty());

    let token = common::register(app.clone(), "home@example.com").await;
    let response = common::post_json_auth(
        app.clone(),
        "/api/v1/trips",
        serde_json::json!({
            "title": "Weekend",
            "destination": "Goa",
            "start_date": "2099-01-01",
            "end_date": "2099-01-02",
            "budget": 10000,
            "ai_summary": null
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(get_auth(app.clone(), "/api/v1/home", &token).await).await;
    assert_eq!(json["data"]["recent_trips"][0]["title"], "Weekend");

    let response = get_auth(app, "/api/v1/home", "not-a-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
