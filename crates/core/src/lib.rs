//! Domain constants, validation rules, and pure logic for Wanderistan.
//!
//! Nothing in this crate performs I/O. The database, integration, and API
//! crates all depend on it for shared types and the [`error::CoreError`]
//! returned by validation.

pub mod budget;
pub mod chat;
pub mod error;
pub mod itinerary;
pub mod naming;
pub mod place;
pub mod planner;
pub mod poi;
pub mod route;
pub mod trip;
pub mod types;
pub mod validation;
pub mod video;
