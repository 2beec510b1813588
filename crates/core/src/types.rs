/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A geographic position as `[longitude, latitude]`, the GeoJSON axis order.
pub type LngLat = [f64; 2];
