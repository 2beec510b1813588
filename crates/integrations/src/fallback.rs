//! Static video sets served when YouTube is unreachable or over quota.
//!
//! Lookups match the location name case-insensitively against a small set
//! of well-known destinations.

use wanderistan_core::video::{embed_url, thumbnail_url, watch_url};

use crate::youtube::VideoResult;

const SAMPLE_VIDEO_ID: &str = "dQw4w9WgXcQ";
const PARIS_VIDEO_ID: &str = "0qIJ5dQ-LYI";
const PUBLISHED_AT: &str = "2023-01-15T10:00:00Z";

/// `(video id, title, description, channel)`
type Entry = (&'static str, &'static str, &'static str, &'static str);

const PLACE_VIDEOS: &[(&str, &[Entry])] = &[
    (
        "India",
        &[(
            SAMPLE_VIDEO_ID,
            "Amazing India - Travel Guide",
            "Discover the beauty of India with this comprehensive travel guide.",
            "Travel Channel",
        )],
    ),
    (
        "France",
        &[(
            SAMPLE_VIDEO_ID,
            "Paris Travel Guide - Top Attractions",
            "Explore the magic of Paris with this detailed travel guide.",
            "Travel Channel",
        )],
    ),
    (
        "Japan",
        &[(
            SAMPLE_VIDEO_ID,
            "Tokyo Travel Guide - Must See Places",
            "Experience the unique culture of Tokyo with this travel guide.",
            "Travel Channel",
        )],
    ),
];

const COUNTRY_VIDEOS: &[(&str, &[Entry])] = &[
    (
        "India",
        &[
            (
                SAMPLE_VIDEO_ID,
                "India Travel Guide - Complete Tour",
                "Comprehensive travel guide to India covering all major destinations.",
                "Travel Channel",
            ),
            (
                SAMPLE_VIDEO_ID,
                "Indian Culture and Traditions",
                "Explore the rich culture and traditions of India.",
                "Culture Channel",
            ),
        ],
    ),
    (
        "France",
        &[
            (
                SAMPLE_VIDEO_ID,
                "France Travel Guide - Paris and Beyond",
                "Discover the beauty of France from Paris to the countryside.",
                "Travel Channel",
            ),
            (
                SAMPLE_VIDEO_ID,
                "French Cuisine and Culture",
                "Experience the world-famous French cuisine and culture.",
                "Food Channel",
            ),
        ],
    ),
    (
        "Japan",
        &[
            (
                SAMPLE_VIDEO_ID,
                "Japan Travel Guide - Tokyo and Kyoto",
                "Explore the fascinating culture of Japan from modern Tokyo to traditional Kyoto.",
                "Travel Channel",
            ),
            (
                SAMPLE_VIDEO_ID,
                "Japanese Culture and Traditions",
                "Discover the unique traditions and culture of Japan.",
                "Culture Channel",
            ),
        ],
    ),
];

const LOCATION_VIDEOS: &[(&str, &[Entry])] = &[
    (
        "India",
        &[
            (
                SAMPLE_VIDEO_ID,
                "Amazing India - Travel Guide",
                "Discover the beauty of India with this comprehensive travel guide.",
                "Travel Channel",
            ),
            (
                SAMPLE_VIDEO_ID,
                "Indian Culture & Heritage",
                "Explore the rich cultural heritage of India.",
                "Culture Channel",
            ),
            (
                SAMPLE_VIDEO_ID,
                "Indian Food & Cuisine",
                "Taste the diverse flavors of Indian cuisine.",
                "Food Channel",
            ),
        ],
    ),
    (
        "France",
        &[
            (
                PARIS_VIDEO_ID,
                "Paris Travel Guide - Top Attractions",
                "Explore the magic of Paris with this detailed travel guide.",
                "Travel Channel",
            ),
            (
                SAMPLE_VIDEO_ID,
                "French Culture & Traditions",
                "Discover the rich culture and traditions of France.",
                "Culture Channel",
            ),
            (
                SAMPLE_VIDEO_ID,
                "French Cuisine & Wine",
                "Experience the world-famous French cuisine and wine.",
                "Food Channel",
            ),
        ],
    ),
    (
        "Japan",
        &[
            (
                SAMPLE_VIDEO_ID,
                "Tokyo Travel Guide - Must See Places",
                "Experience the unique culture of Japan from modern Tokyo to traditional Kyoto.",
                "Travel Channel",
            ),
            (
                SAMPLE_VIDEO_ID,
                "Japanese Culture & Traditions",
                "Discover the unique traditions and culture of Japan.",
                "Culture Channel",
            ),
            (
                SAMPLE_VIDEO_ID,
                "Japanese Food & Sushi",
                "Taste the authentic flavors of Japanese cuisine.",
                "Food Channel",
            ),
        ],
    ),
    (
        "Manali",
        &[
            (
                SAMPLE_VIDEO_ID,
                "Manali Travel Guide - Himalayan Paradise",
                "Explore the beautiful hill station of Manali in the Himalayas.",
                "Travel Channel",
            ),
            (
                SAMPLE_VIDEO_ID,
                "Manali Adventure Activities",
                "Experience thrilling adventure activities in Manali.",
                "Adventure Channel",
            ),
            (
                SAMPLE_VIDEO_ID,
                "Manali Local Food & Culture",
                "Taste the local Himachali cuisine and culture.",
                "Food Channel",
            ),
        ],
    ),
    (
        "Rishikesh",
        &[
            (
                SAMPLE_VIDEO_ID,
                "Rishikesh Travel Guide - Yoga Capital",
                "Discover the spiritual capital of India, Rishikesh.",
                "Travel Channel",
            ),
            (
                SAMPLE_VIDEO_ID,
                "Rishikesh River Rafting Adventure",
                "Experience thrilling river rafting on the Ganges.",
                "Adventure Channel",
            ),
            (
                SAMPLE_VIDEO_ID,
                "Rishikesh Yoga & Meditation",
                "Learn yoga and meditation in the yoga capital.",
                "Wellness Channel",
            ),
        ],
    ),
    (
        "Goa",
        &[
            (
                SAMPLE_VIDEO_ID,
                "Goa Travel Guide - Beach Paradise",
                "Explore the beautiful beaches and Portuguese heritage of Goa.",
                "Travel Channel",
            ),
            (
                SAMPLE_VIDEO_ID,
                "Goa Nightlife & Parties",
                "Experience the vibrant nightlife and beach parties of Goa.",
                "Lifestyle Channel",
            ),
            (
                SAMPLE_VIDEO_ID,
                "Goa Seafood & Portuguese Cuisine",
                "Taste the delicious seafood and Portuguese-influenced cuisine.",
                "Food Channel",
            ),
        ],
    ),
    (
        "Kerala",
        &[
            (
                SAMPLE_VIDEO_ID,
                "Kerala Travel Guide - God's Own Country",
                "Explore the backwaters, beaches, and culture of Kerala.",
                "Travel Channel",
            ),
            (
                SAMPLE_VIDEO_ID,
                "Kerala Backwaters Houseboat",
                "Experience the serene backwaters on a traditional houseboat.",
                "Adventure Channel",
            ),
            (
                SAMPLE_VIDEO_ID,
                "Kerala Ayurveda & Wellness",
                "Experience traditional Ayurvedic treatments and wellness.",
                "Wellness Channel",
            ),
        ],
    ),
];

fn video(entry: &Entry, location_name: &str) -> VideoResult {
    let (video_id, title, description, channel) = *entry;
    VideoResult {
        video_id: video_id.to_string(),
        title: title.to_string(),
        youtube_url: watch_url(video_id),
        embed_url: embed_url(video_id),
        thumbnail_url: thumbnail_url(video_id),
        channel_title: channel.to_string(),
        published_at: PUBLISHED_AT.to_string(),
        description: description.to_string(),
        location_name: location_name.to_string(),
    }
}

fn lookup(table: &[(&str, &[Entry])], location_name: &str) -> Option<Vec<VideoResult>> {
    let wanted = location_name.trim();
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        .map(|(_, entries)| entries.iter().map(|e| video(e, location_name)).collect())
}

/// Fallback for place searches; empty for unknown places.
pub fn place_videos(place_name: &str, max_results: usize) -> Vec<VideoResult> {
    let mut videos = lookup(PLACE_VIDEOS, place_name).unwrap_or_default();
    videos.truncate(max_results);
    videos
}

/// Fallback for country searches; empty for unknown countries.
pub fn country_videos(country_name: &str, max_results: usize) -> Vec<VideoResult> {
    let mut videos = lookup(COUNTRY_VIDEOS, country_name).unwrap_or_default();
    videos.truncate(max_results);
    videos
}

/// Fallback for location searches. Unknown locations get a generic set
/// titled after the location.
pub fn location_videos(location_name: &str, max_results: usize) -> Vec<VideoResult> {
    let mut videos = lookup(LOCATION_VIDEOS, location_name).unwrap_or_else(|| {
        let generic: [(String, String, &str); 3] = [
            (
                format!("{location_name} Travel Guide"),
                format!("Comprehensive travel guide for {location_name}"),
                "Travel Channel",
            ),
            (
                format!("{location_name} Culture & Heritage"),
                format!("Explore the culture and heritage of {location_name}"),
                "Culture Channel",
            ),
            (
                format!("{location_name} Local Food & Cuisine"),
                format!("Taste the local cuisine and flavors of {location_name}"),
                "Food Channel",
            ),
        ];
        generic
            .iter()
            .map(|(title, description, channel)| VideoResult {
                title: title.clone(),
                description: description.clone(),
                channel_title: channel.to_string(),
                ..video(&(SAMPLE_VIDEO_ID, "", "", ""), location_name)
            })
            .collect()
    });
    videos.truncate(max_results);
    videos
}
