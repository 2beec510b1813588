//! AI trip planner form handling.
//!
//! Turns the planner form into a single natural-language prompt for the
//! itinerary generator, and derives the dates and budget of the trip that
//! gets created from the result.

use chrono::{Days, Months, NaiveDate};
use serde::Deserialize;

use crate::error::CoreError;
use crate::validation::FieldErrors;

/// Budget used when the planner form leaves it empty or non-positive.
pub const DEFAULT_PLANNER_BUDGET: i64 = 50_000;

/// Maximum trip length the planner accepts.
pub const MAX_PLANNER_DAYS: i64 = 60;

/// Separator between prompt clauses.
const CLAUSE_SEPARATOR: &str = " • ";

const CLOSING_INSTRUCTIONS: &str = ". Please provide a detailed day-by-day itinerary with \
specific activities, estimated costs, accommodation suggestions, and local experiences tailored \
to the traveler profile. Include budget breakdown by category, money-saving tips, and \
alternative options for each day.";

/// The planner form as submitted by the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlannerRequest {
    pub destination: String,
    pub duration: i64,
    #[serde(default)]
    pub adults: i64,
    #[serde(default)]
    pub children: i64,
    pub traveler_type: Option<String>,
    pub travel_pace: Option<String>,
    pub budget: Option<i64>,
    #[serde(default)]
    pub activities: Vec<String>,
    pub accommodation: Option<String>,
    #[serde(default)]
    pub dietary: Vec<String>,
    pub avoid: Option<String>,
    pub special_requirements: Option<String>,
    pub notes: Option<String>,
}

impl PlannerRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = FieldErrors::new();
        errors.require_present("destination", &self.destination);
        if !(1..=MAX_PLANNER_DAYS).contains(&self.duration) {
            errors.add(format!(
                "duration must be between 1 and {MAX_PLANNER_DAYS} days"
            ));
        }
        errors.finish()
    }

    /// The submitted budget, or [`DEFAULT_PLANNER_BUDGET`] when missing.
    pub fn effective_budget(&self) -> i64 {
        self.budget
            .filter(|b| *b > 0)
            .unwrap_or(DEFAULT_PLANNER_BUDGET)
    }

    /// Planned trips start one month from `today` and last `duration` days.
    pub fn trip_dates(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let start = today.checked_add_months(Months::new(1)).unwrap_or(today);
        let extra_days = u64::try_from(self.duration.max(1) - 1).unwrap_or(0);
        let end = start.checked_add_days(Days::new(extra_days)).unwrap_or(start);
        (start, end)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn traveler_type_phrase(key: &str) -> &str {
    match key {
        "family_young" => "family with young children (stroller-friendly activities)",
        "family_teens" => "family with teenagers",
        "couple" => "romantic couple getaway",
        "friends" => "group of friends",
        "solo" => "solo traveler",
        "business" => "business traveler",
        "accessible" => "accessible travel needs",
        "senior" => "senior travelers",
        other => other,
    }
}

fn pace_phrase(key: &str) -> &str {
    match key {
        "relaxed" => "relaxed and leisurely pace",
        "moderate" => "moderate pace with some downtime",
        "active" => "fast-paced and active schedule",
        other => other,
    }
}

fn activity_phrase(key: &str) -> &str {
    match key {
        "hiking" => "hiking and trekking",
        "beaches" => "beaches and water sports",
        "museums" => "museums and cultural sites",
        "nightlife" => "nightlife and entertainment",
        "foodie" => "food and dining experiences",
        "shopping" => "shopping and retail",
        "adventure" => "adventure sports and activities",
        "wildlife" => "wildlife and nature experiences",
        "spiritual" => "spiritual and wellness activities",
        other => other,
    }
}

fn accommodation_phrase(key: &str) -> &str {
    match key {
        "luxury" => "luxury accommodations",
        "midrange" => "mid-range hotels",
        "budget" => "budget-friendly accommodations",
        "boutique" => "boutique hotels and unique stays",
        other => other,
    }
}

fn plural(count: i64, singular: &str, plural: &str) -> String {
    if count > 1 {
        format!("{count} {plural}")
    } else {
        format!("{count} {singular}")
    }
}

/// Build the itinerary prompt from the planner form.
pub fn build_structured_prompt(request: &PlannerRequest) -> String {
    let mut parts = vec![format!(
        "{} day trip to {}",
        request.duration,
        request.destination.trim()
    )];

    if request.adults > 0 {
        parts.push(format!("for {}", plural(request.adults, "adult", "adults")));
        if request.children > 0 {
            parts.push(format!(
                "and {}",
                plural(request.children, "child", "children")
            ));
        }
    }

    if let Some(kind) = non_blank(&request.traveler_type) {
        parts.push(format!("specifically for {}", traveler_type_phrase(kind)));
    }

    if let Some(pace) = non_blank(&request.travel_pace) {
        parts.push(format!("with {}", pace_phrase(pace)));
    }

    if let Some(budget) = request.budget.filter(|b| *b > 0) {
        parts.push(format!("with a budget of ₹{budget} per person"));
    }

    if !request.activities.is_empty() {
        let activities: Vec<&str> = request
            .activities
            .iter()
            .map(|a| activity_phrase(a))
            .collect();
        parts.push(format!("including {}", activities.join(", ")));
    }

    if let Some(style) = non_blank(&request.accommodation) {
        parts.push(format!("preferring {}", accommodation_phrase(style)));
    }

    if !request.dietary.is_empty() {
        parts.push(format!(
            "with {} dietary preferences",
            request.dietary.join(", ")
        ));
    }

    if let Some(avoid) = non_blank(&request.avoid) {
        parts.push(format!("avoiding {avoid}"));
    }

    if let Some(requirements) = non_blank(&request.special_requirements) {
        parts.push(format!("with special requirements: {requirements}"));
    }

    if let Some(notes) = non_blank(&request.notes) {
        parts.push(format!("Additional notes: {notes}"));
    }

    let mut prompt = parts.join(CLAUSE_SEPARATOR);
    prompt.push_str(CLOSING_INSTRUCTIONS);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(destination: &str, duration: i64) -> PlannerRequest {
        PlannerRequest {
            destination: destination.to_string(),
            duration,
            ..Default::default()
        }
    }

    #[test]
    fn minimal_prompt() {
        let prompt = build_structured_prompt(&request("Manali", 5));
        assert!(prompt.starts_with("5 day trip to Manali. Please provide"));
        assert!(prompt.ends_with("alternative options for each day."));
    }

    #[test]
    fn full_prompt_joins_clauses() {
        let req = PlannerRequest {
            adults: 2,
            children: 1,
            traveler_type: Some("family_young".into()),
            travel_pace: Some("relaxed".into()),
            budget: Some(40_000),
            activities: vec!["hiking".into(), "kayaking".into()],
            accommodation: Some("boutique".into()),
            dietary: vec!["vegetarian".into()],
            avoid: Some("crowds".into()),
            special_requirements: Some("wheelchair".into()),
            notes: Some("first visit".into()),
            ..request("Goa", 3)
        };
        let prompt = build_structured_prompt(&req);
        let expected = [
            "3 day trip to Goa",
            "for 2 adults",
            "and 1 child",
            "specifically for family with young children (stroller-friendly activities)",
            "with relaxed and leisurely pace",
            "with a budget of ₹40000 per person",
            "including hiking and trekking, kayaking",
            "preferring boutique hotels and unique stays",
            "with vegetarian dietary preferences",
            "avoiding crowds",
            "with special requirements: wheelchair",
            "Additional notes: first visit",
        ]
        .join(" • ");
        assert!(prompt.starts_with(&expected), "{prompt}");
    }

    #[test]
    fn children_without_adults_are_omitted() {
        let req = PlannerRequest {
            children: 2,
            ..request("Goa", 2)
        };
        assert!(!build_structured_prompt(&req).contains("child"));
    }

    #[test]
    fn plural_children() {
        let req = PlannerRequest {
            adults: 1,
            children: 3,
            ..request("Goa", 2)
        };
        let prompt = build_structured_prompt(&req);
        assert!(prompt.contains("for 1 adult • and 3 children"));
    }

    #[test]
    fn validation() {
        assert!(request("Goa", 3).validate().is_ok());
        assert!(request("", 3).validate().is_err());
        assert!(request("Goa", 0).validate().is_err());
        assert!(request("Goa", MAX_PLANNER_DAYS + 1).validate().is_err());
    }

    #[test]
    fn budget_defaults() {
        assert_eq!(request("Goa", 1).effective_budget(), DEFAULT_PLANNER_BUDGET);
        let req = PlannerRequest {
            budget: Some(12_000),
            ..request("Goa", 1)
        };
        assert_eq!(req.effective_budget(), 12_000);
    }

    #[test]
    fn dates_start_next_month() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let (start, end) = request("Goa", 4).trip_dates(today);
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
    }
}
