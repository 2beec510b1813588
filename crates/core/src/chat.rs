//! Travel chat helpers: spotting known map locations in a message.

use serde::Serialize;

use crate::naming::titleize;
use crate::types::LngLat;

/// Locations the chat map can pin, as `(lowercase name, [lng, lat])`.
pub const KNOWN_LOCATIONS: &[(&str, LngLat)] = &[
    ("tanzania", [35.7516, -6.3690]),
    ("zanzibar", [39.1977, -6.1659]),
    ("serengeti", [34.8333, -2.3333]),
    ("kilimanjaro", [37.3556, -3.0674]),
    ("dar es salaam", [39.2083, -6.7927]),
    ("arusha", [36.6827, -3.3869]),
];

/// Maximum accepted chat message length, in characters.
pub const MAX_MESSAGE_CHARS: usize = 2000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatLocation {
    pub name: String,
    pub coordinates: LngLat,
}

/// Known locations mentioned anywhere in `message`, case-insensitively, in
/// table order.
pub fn extract_locations(message: &str) -> Vec<ChatLocation> {
    let haystack = message.to_lowercase();
    KNOWN_LOCATIONS
        .iter()
        .filter(|(name, _)| haystack.contains(name))
        .map(|(name, coordinates)| ChatLocation {
            name: titleize(name),
            coordinates: *coordinates,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_locations_case_insensitively() {
        let found = extract_locations("Flying into DAR ES SALAAM then Zanzibar");
        let names: Vec<_> = found.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Zanzibar", "Dar Es Salaam"]);
        assert_eq!(found[0].coordinates, [39.1977, -6.1659]);
    }

    #[test]
    fn no_locations() {
        assert!(extract_locations("What should I pack for Manali?").is_empty());
        assert!(extract_locations("").is_empty());
    }
}
