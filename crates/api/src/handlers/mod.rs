pub mod auth;
pub mod budget;
pub mod chat;
pub mod home;
pub mod places;
pub mod planner;
pub mod pois;
pub mod trips;
pub mod videos;
