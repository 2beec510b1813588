//! Destination tier classification and heuristic budget allocation.
//!
//! A destination is classified by case-insensitive substring match against
//! two fixed name lists, international first, then domestic. Anything that
//! matches neither (including a missing or blank destination) is `Local`.
//! Each tier splits the total budget across five categories by fixed
//! percentages. Every category is truncated independently, so the parts may
//! sum to a few units less than the total; the drift is not reconciled.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::naming::titleize;

// ---------------------------------------------------------------------------
// Destination lists
// ---------------------------------------------------------------------------

/// Destinations priced as international travel.
pub const INTERNATIONAL_DESTINATIONS: &[&str] = &[
    "bali",
    "thailand",
    "singapore",
    "malaysia",
    "dubai",
    "europe",
    "usa",
    "uk",
    "australia",
    "japan",
    "korea",
    "china",
    "vietnam",
    "cambodia",
    "laos",
    "myanmar",
    "philippines",
    "indonesia",
    "sri lanka",
    "nepal",
    "bhutan",
    "maldives",
];

/// Destinations priced as domestic (in-country) travel.
pub const DOMESTIC_DESTINATIONS: &[&str] = &[
    "manali",
    "rishikesh",
    "goa",
    "kerala",
    "sikkim",
    "varanasi",
    "jaipur",
    "udaipur",
    "jodhpur",
    "jaisalmer",
    "agra",
    "varanasi",
    "amritsar",
    "shimla",
    "darjeeling",
    "ooty",
    "munnar",
    "alleppey",
    "kumarakom",
    "thekkady",
    "wayanad",
    "coorg",
    "mysore",
    "bangalore",
    "mumbai",
    "delhi",
    "kolkata",
    "chennai",
    "hyderabad",
    "pune",
    "ahmedabad",
    "surat",
    "vadodara",
    "indore",
    "bhopal",
    "lucknow",
    "kanpur",
    "nagpur",
    "patna",
    "ranchi",
    "bhubaneswar",
    "guwahati",
    "imphal",
    "aizawl",
    "kohima",
    "itanagar",
    "shillong",
    "gangtok",
    "leh",
    "srinagar",
    "jammu",
    "chandigarh",
    "dehradun",
    "haridwar",
    "rishikesh",
    "mussoorie",
    "nainital",
    "ranikhet",
    "almora",
    "pithoragarh",
    "chamoli",
    "rudraprayag",
    "tehri",
    "uttarkashi",
    "pauri",
    "bageshwar",
    "champawat",
    "udham singh nagar",
];

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Budget category keys in display order.
pub const CATEGORIES: [&str; 5] = [
    "flights",
    "accommodation",
    "food",
    "activities",
    "transportation",
];

/// Share of the budget assumed spent when a trip has no breakdown (85%).
pub const DEFAULT_SPEND_PERCENT: i64 = 85;

/// Presentation metadata for one budget category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub key: String,
    pub name: String,
    pub icon: &'static str,
    pub color: &'static str,
}

/// Display name, icon and colour for a category key. Unknown keys get a
/// title-cased name and neutral styling.
pub fn category_info(key: &str) -> CategoryInfo {
    let (name, icon, color) = match key {
        "flights" => ("Flights".to_string(), "plane", "primary"),
        "accommodation" => ("Accommodation".to_string(), "bed", "info"),
        "food" => ("Food & Dining".to_string(), "utensils", "warning"),
        "activities" => ("Activities".to_string(), "mountain", "success"),
        "transportation" => ("Transportation".to_string(), "car", "secondary"),
        other => (titleize(other), "circle", "muted"),
    };
    CategoryInfo {
        key: key.to_string(),
        name,
        icon,
        color,
    }
}

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// Pricing tier of a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationTier {
    International,
    Domestic,
    Local,
}

/// Whole-percent split for `[flights, accommodation, food, activities, transportation]`.
type Split = [i64; 5];

const INTERNATIONAL_SPLIT: Split = [60, 25, 10, 3, 2];
const DOMESTIC_SPLIT: Split = [35, 35, 20, 8, 2];
const LOCAL_SPLIT: Split = [0, 50, 25, 20, 5];

impl DestinationTier {
    /// Classify a free-text destination. `None`, empty and unmatched
    /// destinations are `Local`.
    pub fn classify(destination: Option<&str>) -> Self {
        let Some(destination) = destination.map(str::to_lowercase) else {
            return Self::Local;
        };
        if destination.trim().is_empty() {
            return Self::Local;
        }
        if matches_any(&destination, INTERNATIONAL_DESTINATIONS) {
            Self::International
        } else if matches_any(&destination, DOMESTIC_DESTINATIONS) {
            Self::Domestic
        } else {
            Self::Local
        }
    }

    fn split(self) -> Split {
        match self {
            Self::International => INTERNATIONAL_SPLIT,
            Self::Domestic => DOMESTIC_SPLIT,
            Self::Local => LOCAL_SPLIT,
        }
    }
}

fn matches_any(destination: &str, names: &[&str]) -> bool {
    names.iter().any(|name| destination.contains(name))
}

// ---------------------------------------------------------------------------
// Breakdown
// ---------------------------------------------------------------------------

/// Amount allocated to each of the five categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    pub flights: i64,
    pub accommodation: i64,
    pub food: i64,
    pub activities: i64,
    pub transportation: i64,
}

impl BudgetBreakdown {
    /// Sum of all five categories.
    pub fn total(&self) -> i64 {
        self.flights + self.accommodation + self.food + self.activities + self.transportation
    }

    /// Category key to amount, for storage in the trip's JSON column.
    pub fn to_map(&self) -> BTreeMap<String, i64> {
        CATEGORIES
            .iter()
            .zip(self.amounts())
            .map(|(key, amount)| (key.to_string(), amount))
            .collect()
    }

    fn amounts(&self) -> [i64; 5] {
        [
            self.flights,
            self.accommodation,
            self.food,
            self.activities,
            self.transportation,
        ]
    }
}

/// `floor(amount * percent / 100)` for non-negative amounts, without
/// intermediate overflow.
fn percent_of(amount: i64, percent: i64) -> i64 {
    (amount / 100) * percent + (amount % 100) * percent / 100
}

/// Allocate `budget` across the five categories for the destination's tier.
pub fn allocate(budget: i64, destination: Option<&str>) -> BudgetBreakdown {
    allocate_for_tier(budget, DestinationTier::classify(destination))
}

/// Allocate `budget` using a known tier.
pub fn allocate_for_tier(budget: i64, tier: DestinationTier) -> BudgetBreakdown {
    let budget = budget.max(0);
    let [flights, accommodation, food, activities, transportation] =
        tier.split().map(|percent| percent_of(budget, percent));
    BudgetBreakdown {
        flights,
        accommodation,
        food,
        activities,
        transportation,
    }
}

// ---------------------------------------------------------------------------
// Parsing AI-supplied breakdowns
// ---------------------------------------------------------------------------

/// Extract an integer amount from a loosely-typed JSON value.
///
/// Strings keep only their ASCII digits (`"₹8,750"` is 8750), numbers are
/// truncated, and anything else (or a string with no digits) is 0.
pub fn parse_amount(value: &serde_json::Value) -> i64 {
    match value {
        serde_json::Value::String(s) => {
            let digits: String = s.chars().filter(char::is_ascii_digit).collect();
            digits.parse().unwrap_or(0)
        }
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        serde_json::Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

/// Normalize a JSON object of category amounts into integers. Non-objects
/// yield an empty map.
pub fn normalize_breakdown(value: &serde_json::Value) -> BTreeMap<String, i64> {
    value
        .as_object()
        .map(|object| {
            object
                .iter()
                .map(|(key, amount)| (key.clone(), parse_amount(amount)))
                .collect()
        })
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Trip cost summary
// ---------------------------------------------------------------------------

/// Estimated spend: the breakdown sum when one exists, else 85% of budget.
///
/// Stored amounts are client-supplied, so the sum saturates.
pub fn total_cost(budget: i64, breakdown: Option<&BTreeMap<String, i64>>) -> i64 {
    match breakdown {
        Some(map) if !map.is_empty() => map
            .values()
            .fold(0_i64, |total, amount| total.saturating_add(*amount)),
        _ => percent_of(budget.max(0), DEFAULT_SPEND_PERCENT),
    }
}

/// Budget left after [`total_cost`]. Negative when over budget.
pub fn savings(budget: i64, breakdown: Option<&BTreeMap<String, i64>>) -> i64 {
    budget.saturating_sub(total_cost(budget, breakdown))
}

/// `amount` as a whole percent of `budget`, truncated. 0 for a non-positive
/// budget; saturates at the `i64` bounds.
pub fn share_of_budget(amount: i64, budget: i64) -> i64 {
    if budget <= 0 {
        return 0;
    }
    let percent = i128::from(amount) * 100 / i128::from(budget);
    i64::try_from(percent).unwrap_or(if percent < 0 { i64::MIN } else { i64::MAX })
}
