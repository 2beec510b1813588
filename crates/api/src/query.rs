//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Free-text search parameter (`?query=`).
///
/// A missing parameter searches for the empty string, which matches every
/// name.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

impl SearchParams {
    pub fn trimmed(&self) -> &str {
        self.query.trim()
    }
}
