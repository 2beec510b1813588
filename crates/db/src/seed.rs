//! Demo data: a user, curated Indian places with videos, two sample trips,
//! and verified POIs.
//!
//! Seeding is idempotent. The user is only created when the email is free,
//! and places (with their videos and trips) and POIs are each skipped when
//! their table already has rows.

use chrono::{Days, Months, NaiveDate};
use serde_json::json;
use wanderistan_core::itinerary::visit_title;

use crate::models::itinerary_item::CreateItineraryItem;
use crate::models::place::CreatePlace;
use crate::models::poi::CreatePoi;
use crate::models::trip::CreateTrip;
use crate::models::user::{CreateUser, User};
use crate::models::video::CreateVideo;
use crate::repositories::{
    ItineraryItemRepo, PlaceRepo, PoiRepo, TripRepo, UserRepo, VideoRepo,
};
use crate::DbPool;

pub const DEMO_EMAIL: &str = "demo@wanderistan.com";
pub const DEMO_PASSWORD: &str = "password123";

/// Row counts inserted by one [`seed_demo_data`] run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: u32,
    pub places: u32,
    pub videos: u32,
    pub trips: u32,
    pub pois: u32,
}

struct PlaceSeed {
    name: &'static str,
    description: &'static str,
    latitude: f64,
    longitude: f64,
    region: &'static str,
    category: &'static str,
    cover_image_url: &'static str,
    featured: bool,
}

const PLACES: &[PlaceSeed] = &[
    PlaceSeed {
        name: "Manali",
        description: "A beautiful hill station in Himachal Pradesh, known for its scenic beauty and adventure activities.",
        latitude: 32.2432,
        longitude: 77.1892,
        region: "Himalayas",
        category: "Mountain",
        cover_image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=800",
        featured: true,
    },
    PlaceSeed {
        name: "Rishikesh",
        description: "The yoga capital of the world, famous for spiritual retreats and adventure sports.",
        latitude: 30.0869,
        longitude: 78.2676,
        region: "North India",
        category: "Adventure",
        cover_image_url: "https://images.unsplash.com/photo-1589308078059-be1415eab4c3?w=800",
        featured: true,
    },
    PlaceSeed {
        name: "Kerala Backwaters",
        description: "Serene backwaters with houseboat cruises and traditional Ayurvedic treatments.",
        latitude: 9.9312,
        longitude: 76.2673,
        region: "South India",
        category: "Beach",
        cover_image_url: "https://images.unsplash.com/photo-1602216056096-3b40cc0c9944?w=800",
        featured: true,
    },
    PlaceSeed {
        name: "Taj Mahal",
        description: "The iconic white marble mausoleum, one of the Seven Wonders of the World.",
        latitude: 27.1751,
        longitude: 78.0421,
        region: "Central India",
        category: "Historical",
        cover_image_url: "https://images.unsplash.com/photo-1564507592333-c60657eea523?w=800",
        featured: true,
    },
    PlaceSeed {
        name: "Varanasi",
        description: "The spiritual capital of India, known for its ghats and religious significance.",
        latitude: 25.3176,
        longitude: 82.9739,
        region: "North India",
        category: "Cultural",
        cover_image_url: "https://images.unsplash.com/photo-1589308078059-be1415eab4c3?w=800",
        featured: false,
    },
    PlaceSeed {
        name: "Goa Beaches",
        description: "Famous for its pristine beaches, Portuguese architecture, and vibrant nightlife.",
        latitude: 15.2993,
        longitude: 74.1240,
        region: "Coastal",
        category: "Beach",
        cover_image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=800",
        featured: true,
    },
    PlaceSeed {
        name: "Sikkim",
        description: "A peaceful state in the Himalayas known for its monasteries and mountain views.",
        latitude: 27.7172,
        longitude: 88.3958,
        region: "Himalayas",
        category: "Mountain",
        cover_image_url: "https://images.unsplash.com/photo-1602216056096-3b40cc0c9944?w=800",
        featured: false,
    },
    PlaceSeed {
        name: "Jaipur",
        description: "The Pink City, famous for its palaces, forts, and rich cultural heritage.",
        latitude: 26.9124,
        longitude: 75.7873,
        region: "West India",
        category: "Cultural",
        cover_image_url: "https://images.unsplash.com/photo-1564507592333-c60657eea523?w=800",
        featured: false,
    },
];

/// `(place name, video title)`; every sample points at the same clip.
const VIDEOS: &[(&str, &str)] = &[
    ("Manali", "Manali Travel Guide - Complete Tour"),
    ("Rishikesh", "Rishikesh Adventure Activities"),
    ("Kerala Backwaters", "Kerala Backwaters Houseboat Experience"),
];

const SAMPLE_VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
const SAMPLE_THUMBNAIL_URL: &str = "https://img.youtube.com/vi/dQw4w9WgXcQ/mqdefault.jpg";

fn poi_seeds() -> Vec<CreatePoi> {
    vec![
        CreatePoi {
            name: "Zostel Delhi".into(),
            poi_type: "hostel".into(),
            latitude: 28.6289,
            longitude: 77.2065,
            description: Some("Popular backpacker hostel with rooftop cafe".into()),
            price: Some(500.0),
            rating: Some(4.5),
            amenities: Some(json!(["WiFi", "Common Room", "Lockers", "24/7 Reception"])),
            opening_hours: Some(json!({"mon_fri": "24/7", "sat_sun": "24/7"})),
            contact_info: Some("+91 11 2345 6789".into()),
            website: Some("https://www.zostel.com/zostel/delhi/".into()),
        },
        CreatePoi {
            name: "Beach Camp Rishikesh".into(),
            poi_type: "camping".into(),
            latitude: 30.0869,
            longitude: 78.2676,
            description: Some("Riverside camping with adventure activities".into()),
            price: Some(1200.0),
            rating: Some(4.3),
            amenities: Some(json!(["Tents", "Bonfire", "Rafting", "Meals"])),
            opening_hours: Some(json!({"season": "Oct-Jun"})),
            contact_info: Some("+91 98765 43210".into()),
            website: Some("https://beachcamprishikesh.com".into()),
        },
        CreatePoi {
            name: "Hampta Pass Trek".into(),
            poi_type: "trail".into(),
            latitude: 32.2396,
            longitude: 77.1887,
            description: Some("Beautiful 4-5 day trek crossing Hampta Pass".into()),
            price: Some(8000.0),
            rating: Some(4.8),
            amenities: Some(json!(["Guide", "Camping", "Food", "Equipment"])),
            opening_hours: Some(json!({"season": "Jun-Sep"})),
            contact_info: Some("+91 94123 56789".into()),
            website: Some("https://hamptapass.com".into()),
        },
        CreatePoi {
            name: "Sharma Bhelpuri".into(),
            poi_type: "food".into(),
            latitude: 19.0760,
            longitude: 72.8777,
            description: Some("Famous street food spot at Juhu Beach".into()),
            price: Some(100.0),
            rating: Some(4.6),
            amenities: Some(json!(["Street Food", "Takeaway"])),
            opening_hours: Some(json!({"daily": "11:00-23:00"})),
            contact_info: Some("+91 98201 23456".into()),
            website: None,
        },
        CreatePoi {
            name: "Taj Mahal".into(),
            poi_type: "cultural".into(),
            latitude: 27.1751,
            longitude: 78.0421,
            description: Some("UNESCO World Heritage Site and symbol of love".into()),
            price: Some(1100.0),
            rating: Some(5.0),
            amenities: Some(json!(["Guide", "Museum", "Garden"])),
            opening_hours: Some(json!({"daily": "06:00-18:30", "closed": "Friday"})),
            contact_info: Some("tourism.agra@gov.in".into()),
            website: Some("https://tajmahal.gov.in".into()),
        },
    ]
}

/// `(title, destination, place, months ahead, extra days, budget, summary)`
const TRIPS: &[(&str, &str, &str, u32, u64, i64, &str)] = &[
    (
        "Manali Adventure Trip",
        "Manali",
        "Manali",
        1,
        5,
        25_000,
        "A 5-day adventure trip to Manali with trekking, paragliding, and local sightseeing.",
    ),
    (
        "Kerala Wellness Retreat",
        "Kerala",
        "Kerala Backwaters",
        2,
        7,
        35_000,
        "A relaxing 7-day wellness retreat in Kerala with Ayurvedic treatments and backwater cruises.",
    ),
];

/// Insert demo data. `password_hash` is stored for the demo user when it is
/// created; `today` anchors the sample trip dates.
pub async fn seed_demo_data(
    pool: &DbPool,
    password_hash: &str,
    today: NaiveDate,
) -> Result<SeedSummary, sqlx::Error> {
    let mut summary = SeedSummary::default();

    let user = match UserRepo::find_by_email(pool, DEMO_EMAIL).await? {
        Some(user) => user,
        None => {
            let user = UserRepo::create(
                pool,
                &CreateUser {
                    email: DEMO_EMAIL.to_string(),
                    password_hash: password_hash.to_string(),
                },
            )
            .await?;
            summary.users += 1;
            tracing::info!(email = %user.email, "Created demo user");
            user
        }
    };

    if PlaceRepo::count(pool).await? == 0 {
        seed_places(pool, &mut summary).await?;
        seed_trips(pool, &user, today, &mut summary).await?;
    } else {
        tracing::info!("Places already present, skipping places, videos, and trips");
    }

    if PoiRepo::count(pool).await? == 0 {
        for poi in poi_seeds() {
            PoiRepo::create(pool, &poi, true).await?;
            summary.pois += 1;
        }
        tracing::info!(count = summary.pois, "Created POIs");
    }

    Ok(summary)
}

async fn seed_places(pool: &DbPool, summary: &mut SeedSummary) -> Result<(), sqlx::Error> {
    for seed in PLACES {
        let place = PlaceRepo::create(
            pool,
            &CreatePlace {
                name: seed.name.to_string(),
                description: Some(seed.description.to_string()),
                latitude: seed.latitude,
                longitude: seed.longitude,
                region: seed.region.to_string(),
                category: seed.category.to_string(),
                cover_image_url: Some(seed.cover_image_url.to_string()),
                featured: seed.featured,
            },
        )
        .await?;
        summary.places += 1;
        tracing::debug!(place = %place.name, "Created place");

        if let Some((_, title)) = VIDEOS.iter().find(|(name, _)| *name == seed.name) {
            VideoRepo::create(
                pool,
                &CreateVideo {
                    place_id: place.id,
                    youtube_url: SAMPLE_VIDEO_URL.to_string(),
                    title: title.to_string(),
                    thumbnail_url: SAMPLE_THUMBNAIL_URL.to_string(),
                },
            )
            .await?;
            summary.videos += 1;
        }
    }
    tracing::info!(places = summary.places, videos = summary.videos, "Created places");
    Ok(())
}

async fn seed_trips(
    pool: &DbPool,
    user: &User,
    today: NaiveDate,
    summary: &mut SeedSummary,
) -> Result<(), sqlx::Error> {
    for &(title, destination, place_name, months, extra_days, budget, ai_summary) in TRIPS {
        let start_date = today.checked_add_months(Months::new(months)).unwrap_or(today);
        let end_date = start_date
            .checked_add_days(Days::new(extra_days))
            .unwrap_or(start_date);
        let trip = TripRepo::create(
            pool,
            user.id,
            &CreateTrip {
                title: title.to_string(),
                destination: destination.to_string(),
                start_date,
                end_date,
                budget,
                ai_summary: Some(ai_summary.to_string()),
                itinerary: None,
                budget_estimate: None,
                budget_breakdown: None,
                money_saving_tips: None,
            },
        )
        .await?;
        summary.trips += 1;

        if let Some(place) = PlaceRepo::find_by_name(pool, place_name).await? {
            ItineraryItemRepo::create(
                pool,
                &CreateItineraryItem {
                    trip_id: trip.id,
                    place_id: Some(place.id),
                    day: 1,
                    title: visit_title(&place.name),
                    description: None,
                },
            )
            .await?;
        }
    }
    tracing::info!(count = summary.trips, "Created sample trips");
    Ok(())
}
