//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - An update DTO where the resource can be replaced through the API

pub mod itinerary_item;
pub mod place;
pub mod poi;
pub mod trip;
pub mod user;
pub mod video;
