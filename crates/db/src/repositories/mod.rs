//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod itinerary_item_repo;
pub mod place_repo;
pub mod poi_repo;
pub mod trip_repo;
pub mod user_repo;
pub mod video_repo;

pub use itinerary_item_repo::ItineraryItemRepo;
pub use place_repo::PlaceRepo;
pub use poi_repo::PoiRepo;
pub use trip_repo::TripRepo;
pub use user_repo::UserRepo;
pub use video_repo::VideoRepo;
