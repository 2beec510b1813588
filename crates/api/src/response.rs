//! Shared response envelope types for API handlers.
//!
//! JSON resources are wrapped as `{ "data": ... }`. GeoJSON endpoints return
//! the bare feature or collection so map clients can load them directly.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
