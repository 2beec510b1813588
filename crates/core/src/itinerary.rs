//! Itinerary item rules.

use crate::error::CoreError;
use crate::validation::FieldErrors;

/// Validate an itinerary item's day and title.
pub fn validate_item(day: i32, title: &str) -> Result<(), CoreError> {
    let mut errors = FieldErrors::new();
    if day <= 0 {
        errors.add("day must be greater than 0");
    }
    errors.require_present("title", title);
    errors.finish()
}

/// `"Day N"`.
pub fn day_label(day: i32) -> String {
    format!("Day {day}")
}

/// Day to use when a place is added without an explicit day: one past the
/// last scheduled day, or day 1 for an empty itinerary.
pub fn next_day(max_day: Option<i32>) -> i32 {
    max_day.map_or(1, |day| day.max(0) + 1)
}

/// Title given to an item created by adding a place to a trip.
pub fn visit_title(place_name: &str) -> String {
    format!("Visit {place_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_must_be_positive() {
        assert!(validate_item(1, "Arrive").is_ok());
        assert!(validate_item(0, "Arrive").is_err());
        assert!(validate_item(-2, "Arrive").is_err());
    }

    #[test]
    fn title_required() {
        assert!(validate_item(1, "").is_err());
    }

    #[test]
    fn next_day_after_max() {
        assert_eq!(next_day(None), 1);
        assert_eq!(next_day(Some(3)), 4);
    }

    #[test]
    fn labels() {
        assert_eq!(day_label(2), "Day 2");
        assert_eq!(visit_title("Taj Mahal"), "Visit Taj Mahal");
    }
}
