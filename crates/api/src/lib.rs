//! Wanderistan API server library.
//!
//! Exposes config, state, error handling, auth and the route tree so the
//! binaries and the integration tests build the exact same application.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
