//! HTTP-level integration tests for points of interest.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, post_json_auth};
use serde_json::{json, Value};
use sqlx::PgPool;
use wanderistan_db::models::poi::CreatePoi;
use wanderistan_db::repositories::PoiRepo;

async fn create_poi(
    pool: &PgPool,
    name: &str,
    poi_type: &str,
    latitude: f64,
    longitude: f64,
    verified: bool,
) -> i64 {
    PoiRepo::create(
        pool,
        &CreatePoi {
            name: name.to_string(),
            poi_type: poi_type.to_string(),
            latitude,
            longitude,
            description: None,
            price: Some(450.0),
            rating: Some(4.5),
            amenities: Some(json!(["wifi"])),
            opening_hours: None,
            contact_info: None,
            website: None,
        },
        verified,
    )
    .await
    .unwrap()
    .id
}

fn feature_names(json: &Value) -> Vec<&str> {
    json["features"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["properties"]["name"].as_str().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Map queries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn index_returns_verified_pois_in_bounds(pool: PgPool) {
    create_poi(&pool, "Zostel Delhi", "hostel", 28.6448, 77.2167, true).await;
    create_poi(&pool, "Paratha Lane", "food", 28.6562, 77.2303, true).await;
    create_poi(&pool, "Secret Rooftop", "hostel", 28.6500, 77.2200, false).await;
    create_poi(&pool, "Beach Camp", "camping", 15.2993, 74.1240, true).await;
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/pois?bounds=77.0,28.4,77.4,28.8").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["type"], "FeatureCollection");
    assert_eq!(feature_names(&json), ["Zostel Delhi", "Paratha Lane"]);

    let feature = &json["features"][0];
    assert_eq!(feature["geometry"]["type"], "Point");
    assert_eq!(feature["geometry"]["coordinates"], json!([77.2167, 28.6448]));
    assert_eq!(feature["properties"]["type"], "hostel");
    assert_eq!(feature["properties"]["price_range"], "₹");

    let json = body_json(
        get(app, "/api/v1/pois?bounds=77.0,28.4,77.4,28.8&type=food").await,
    )
    .await;
    assert_eq!(feature_names(&json), ["Paratha Lane"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn index_requires_well_formed_bounds(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/pois").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");

    let response = get(app, "/api/v1/pois?bounds=1,2,3").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn near_route_collects_each_poi_once(pool: PgPool) {
    create_poi(&pool, "Roadside Dhaba", "food", 28.70, 77.10, true).await;
    create_poi(&pool, "Halfway Hostel", "hostel", 28.90, 77.05, true).await;
    create_poi(&pool, "Far Away Camp", "camping", 32.00, 77.00, true).await;
    let app = common::build_test_app(pool);

    let body = json!({
        "coordinates": [[77.10, 28.60], [77.10, 28.80], [77.05, 29.00]]
    });
    let response = post_json(app.clone(), "/api/v1/pois/near-route", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(feature_names(&json), ["Roadside Dhaba", "Halfway Hostel"]);

    let body = json!({
        "coordinates": [[77.10, 28.60], [77.10, 28.80], [77.05, 29.00]],
        "type": "hostel"
    });
    let json = body_json(post_json(app.clone(), "/api/v1/pois/near-route", body).await).await;
    assert_eq!(feature_names(&json), ["Halfway Hostel"]);

    let body = json!({ "coordinates": [[77.10, 28.60]] });
    let response = post_json(app, "/api/v1/pois/near-route", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn near_route_searches_the_final_segment_of_long_routes(pool: PgPool) {
    // Segments are about 5.5 km apart, so only the final one reaches the cafe.
    let coordinates: Vec<[f64; 2]> = (0..100)
        .map(|i| {
            let lat = 30.0 + i as f64 * 0.05;
            let lng = 78.0 + i as f64 * 0.05 + if i % 2 == 0 { 0.0 } else { 0.005 };
            [lng, lat]
        })
        .collect();
    let [lng, lat] = [
        (coordinates[98][0] + coordinates[99][0]) / 2.0,
        (coordinates[98][1] + coordinates[99][1]) / 2.0,
    ];
    create_poi(&pool, "Journey's End Cafe", "food", lat, lng, true).await;
    create_poi(&pool, "Off Route Dhaba", "food", lat + 0.2, lng, true).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/pois/near-route",
        json!({ "coordinates": coordinates }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["type"], "FeatureCollection");
    assert_eq!(feature_names(&json), ["Journey's End Cafe"]);
    let route = &json["route"];
    assert!(route["distance_km"].as_f64().unwrap() > 500.0);
    let path = route["path"].as_array().unwrap();
    assert!(path.len() <= 50);
    assert_eq!(path.last().unwrap(), &json!(coordinates[99]));
}

// ---------------------------------------------------------------------------
// Search and types
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn search_only_returns_verified_suggestions(pool: PgPool) {
    let id = create_poi(&pool, "Hampta Pass Trek", "trail", 32.27, 77.36, true).await;
    create_poi(&pool, "Hampta Base Camp", "camping", 32.26, 77.35, false).await;
    let app = common::build_test_app(pool);

    let json = body_json(get(app, "/api/v1/pois/search?query=hampta").await).await;
    let results = json["data"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], id);
    assert_eq!(results[0]["text"], "Hampta Pass Trek");
    assert_eq!(results[0]["type"], "Trail");
    assert_eq!(results[0]["coordinates"], json!([77.36, 32.27]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn community_search_ranks_verified_then_likes(pool: PgPool) {
    create_poi(&pool, "Cafe One", "food", 12.0, 77.0, false).await;
    let liked = create_poi(&pool, "Cafe Two", "food", 12.0, 77.0, false).await;
    create_poi(&pool, "Cafe Three", "food", 12.0, 77.0, true).await;
    let app = common::build_test_app(pool);

    let uri = format!("/api/v1/pois/{liked}/like");
    let response = post_json(app.clone(), &uri, json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["likes_count"], 1);

    let json = body_json(get(app, "/api/v1/pois/community-search?query=cafe").await).await;
    let texts: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, ["Cafe Three", "Cafe Two", "Cafe One"]);
    assert_eq!(json["data"][0]["verified"], true);
    assert_eq!(json["data"][1]["price"], 450.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn types_are_deduplicated(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/pois/types").await).await;
    let values: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["value"].as_str().unwrap())
        .collect();
    assert_eq!(
        values,
        ["hostel", "camping", "trail", "food", "cultural", "stay", "experience", "transport"]
    );
    assert_eq!(json["data"][0]["label"], "Hostel");
}

// ---------------------------------------------------------------------------
// Single POI
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn community_submission_is_unverified(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::register(app.clone(), "scout@example.com").await;

    let body = json!({
        "name": "Hidden Waterfall Trail",
        "poi_type": "trail",
        "latitude": 30.1,
        "longitude": 78.3,
        "description": "Short hike",
        "price": 0.0,
        "rating": 4.0,
        "amenities": null,
        "opening_hours": null,
        "contact_info": null,
        "website": null
    });
    let response = post_json(app.clone(), "/api/v1/pois", body.clone()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json_auth(app.clone(), "/api/v1/pois", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let feature = body_json(response).await;
    assert_eq!(feature["properties"]["verified"], false);
    assert_eq!(feature["properties"]["price_range"], "₹");

    let id = feature["properties"]["id"].as_i64().unwrap();
    let json = body_json(get(app.clone(), &format!("/api/v1/pois/{id}")).await).await;
    assert_eq!(json["properties"]["name"], "Hidden Waterfall Trail");

    // Unverified POIs stay off the map.
    let json = body_json(get(app, "/api/v1/pois?bounds=78.0,30.0,78.5,30.5").await).await;
    assert!(json["features"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_submission_and_missing_poi(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::register(app.clone(), "sloppy@example.com").await;

    let body = json!({
        "name": "Castle",
        "poi_type": "castle",
        "latitude": 30.1,
        "longitude": 78.3,
        "rating": 6.0
    });
    let response = post_json_auth(app.clone(), "/api/v1/pois", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(app.clone(), "/api/v1/pois/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_json(app, "/api/v1/pois/999999/like", json!({})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
