//! Trip validation and date helpers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validation::FieldErrors;

/// Validate the writable fields of a trip.
pub fn validate_trip(
    title: &str,
    destination: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    budget: i64,
) -> Result<(), CoreError> {
    let mut errors = FieldErrors::new();
    errors.require_present("title", title);
    errors.require_present("destination", destination);
    if budget <= 0 {
        errors.add("budget must be greater than 0");
    }
    if end_date < start_date {
        errors.add("end_date must be after start date");
    }
    errors.finish()
}

/// Inclusive length of a trip in days.
pub fn duration_days(start_date: NaiveDate, end_date: NaiveDate) -> i64 {
    (end_date - start_date).num_days() + 1
}

/// `"1 day"` or `"N days"`.
pub fn duration_label(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

/// Where a trip sits relative to a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Upcoming,
    Current,
    Past,
}

impl TripStatus {
    pub fn on(today: NaiveDate, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        if start_date > today {
            Self::Upcoming
        } else if end_date < today {
            Self::Past
        } else {
            Self::Current
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Current => "Current",
            Self::Past => "Completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn valid_trip_passes() {
        assert!(validate_trip("Goa", "Goa", date(2025, 1, 1), date(2025, 1, 5), 20_000).is_ok());
    }

    #[test]
    fn same_day_trip_is_valid() {
        assert!(validate_trip("Day out", "Agra", date(2025, 1, 1), date(2025, 1, 1), 1).is_ok());
    }

    #[test]
    fn end_before_start_rejected() {
        assert_matches!(
            validate_trip("t", "d", date(2025, 1, 5), date(2025, 1, 1), 100),
            Err(CoreError::Validation(msg)) if msg.contains("end_date")
        );
    }

    #[test]
    fn non_positive_budget_rejected() {
        assert!(validate_trip("t", "d", date(2025, 1, 1), date(2025, 1, 2), 0).is_err());
        assert!(validate_trip("t", "d", date(2025, 1, 1), date(2025, 1, 2), -5).is_err());
    }

    #[test]
    fn blank_fields_reported_together() {
        assert_matches!(
            validate_trip("", " ", date(2025, 1, 1), date(2025, 1, 2), 10),
            Err(CoreError::Validation(msg))
                if msg.contains("title can't be blank") && msg.contains("destination can't be blank")
        );
    }

    #[test]
    fn duration_is_inclusive() {
        assert_eq!(duration_days(date(2025, 1, 1), date(2025, 1, 1)), 1);
        assert_eq!(duration_days(date(2025, 1, 30), date(2025, 2, 2)), 4);
        assert_eq!(duration_label(1), "1 day");
        assert_eq!(duration_label(4), "4 days");
    }

    #[test]
    fn status_relative_to_today() {
        let today = date(2025, 6, 15);
        assert_eq!(
            TripStatus::on(today, date(2025, 7, 1), date(2025, 7, 3)),
            TripStatus::Upcoming
        );
        assert_eq!(
            TripStatus::on(today, date(2025, 6, 15), date(2025, 6, 20)),
            TripStatus::Current
        );
        assert_eq!(
            TripStatus::on(today, date(2025, 6, 1), date(2025, 6, 14)),
            TripStatus::Past
        );
        assert_eq!(TripStatus::Past.label(), "Completed");
    }
}
