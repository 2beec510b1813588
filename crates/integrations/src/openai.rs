//! OpenAI chat-completions client for itineraries, travel chat, and place
//! descriptions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::IntegrationsConfig;
use crate::error::IntegrationError;

const MODEL: &str = "gpt-4";

const PLANNER_SYSTEM_PROMPT: &str = "You are an expert travel planner specializing in \
budget-friendly, personalized itineraries. Always provide realistic cost estimates and practical \
money-saving advice.";

const CHAT_SYSTEM_PROMPT: &str = "You are Wanderistan's friendly travel assistant. Answer travel \
questions concisely with practical suggestions on places, timing, budget, and local culture.";

const DESCRIPTION_SYSTEM_PROMPT: &str = "You are a travel writer. Write a compelling 2-3 sentence \
description of the given place, highlighting its unique features and attractions.";

/// One day of a generated itinerary.
///
/// Model output is loosely typed: scalars are accepted where text is
/// expected, `day` may be a numeric string, and a lone string stands in for a
/// one-element list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItineraryDay {
    #[serde(deserialize_with = "lenient::day")]
    pub day: i32,
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text_list")]
    pub activities: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub places: Vec<String>,
    /// Free-form; models return both `"₹2,000"` and plain numbers.
    pub estimated_cost: Option<serde_json::Value>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub budget_tips: Option<String>,
}

/// Structured trip plan returned by the itinerary generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedItinerary {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub summary: String,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub budget_estimate: Option<String>,
    /// Category → amount, usually currency strings.
    pub budget_breakdown: Option<serde_json::Value>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub money_saving_tips: Vec<String>,
    #[serde(deserialize_with = "lenient::days")]
    pub itinerary: Vec<ItineraryDay>,
}

/// Field deserializers that coerce instead of rejecting.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::ItineraryDay;

    fn scalar_text(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
    }

    pub fn optional_text<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(scalar_text(Value::deserialize(deserializer)?))
    }

    pub fn text_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
            other => scalar_text(other)
                .filter(|s| !s.trim().is_empty())
                .into_iter()
                .collect(),
        })
    }

    /// Day number from `1`, `1.0`, `"1"` or `"Day 1"`; 0 when absent or
    /// out of range, which later validation rejects.
    pub fn day<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
        let day = match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
            Value::String(s) => {
                let digits: String = s
                    .trim()
                    .trim_start_matches(|c: char| !c.is_ascii_digit())
                    .chars()
                    .take_while(char::is_ascii_digit)
                    .collect();
                digits.parse().ok()
            }
            _ => None,
        };
        Ok(day.and_then(|d| i32::try_from(d).ok()).unwrap_or(0))
    }

    /// Itinerary days; entries that are not objects are dropped.
    pub fn days<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<ItineraryDay>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
            _ => Vec::new(),
        })
    }
}

impl GeneratedItinerary {
    /// Plan used when the model answers with prose instead of JSON. The prose
    /// becomes the summary.
    pub fn fallback(summary: &str) -> Self {
        Self {
            title: "AI Generated Trip".to_string(),
            summary: summary.to_string(),
            budget_estimate: Some("₹25,000".to_string()),
            budget_breakdown: Some(serde_json::json!({
                "flights": "₹12,000",
                "accommodation": "₹7,500",
                "food": "₹2,500",
                "activities": "₹2,000",
                "transportation": "₹1,000",
            })),
            money_saving_tips: [
                "Book flights in advance for better rates",
                "Stay in local guesthouses or budget hotels",
                "Eat at local restaurants and street food",
                "Use public transportation when possible",
                "Book activities in advance for discounts",
            ]
            .iter()
            .map(|tip| tip.to_string())
            .collect(),
            itinerary: Vec::new(),
        }
    }

    /// Parse model output, tolerating a surrounding Markdown code fence and
    /// loosely typed fields. Only content that is not a JSON object yields
    /// [`Self::fallback`].
    pub fn from_content(content: &str) -> Self {
        let trimmed = content.trim();
        let unfenced = trimmed
            .strip_prefix("```json")
            .or_else(|| trimmed.strip_prefix("```"))
            .and_then(|rest| rest.trim_end().strip_suffix("```"))
            .unwrap_or(trimmed)
            .trim();
        match serde_json::from_str::<Self>(unfenced) {
            Ok(plan) => plan,
            Err(err) => {
                tracing::debug!(error = %err, "Itinerary content is not JSON, using fallback plan");
                Self::fallback(content)
            }
        }
    }
}

/// Prompt wrapped around the planner request, asking for the JSON shape of
/// [`GeneratedItinerary`].
fn itinerary_prompt(request: &str) -> String {
    format!(
        r#"Create a detailed travel itinerary based on this request: "{request}"

Please provide a structured response with:
1. A catchy title for the trip
2. A brief summary (2-3 sentences)
3. Detailed day-by-day itinerary with:
   - Specific activities and timings
   - Estimated costs for each day
   - Recommended places to visit
   - Local experiences and hidden gems
4. AI-generated realistic budget breakdown by category based on the destination:
   - Analyze the destination type (international/domestic/local)
   - Consider typical costs for that specific location
   - Provide realistic estimates for each category
   - Ensure the breakdown adds up to the total budget
5. Money-saving tips and budget-friendly alternatives specific to the destination
6. Estimated total cost vs budget

Format the response as JSON with this structure:
{{
  "title": "Trip Title",
  "summary": "Brief description",
  "budget_estimate": "Total estimated cost",
  "budget_breakdown": {{
    "flights": "amount",
    "accommodation": "amount",
    "food": "amount",
    "activities": "amount",
    "transportation": "amount"
  }},
  "money_saving_tips": ["tip1", "tip2", "tip3"],
  "itinerary": [
    {{
      "day": 1,
      "title": "Day Title",
      "activities": ["activity1", "activity2"],
      "places": ["place1", "place2"],
      "estimated_cost": "daily cost",
      "budget_tips": "specific tips for this day"
    }}
  ]
}}

IMPORTANT BUDGET GUIDELINES:
- For international destinations (Bali, Thailand, Singapore, etc.):
  * Flights: 50-70% of budget (₹15,000-35,000 for 2 people)
  * Accommodation: 20-30% (₹2,000-8,000 per night)
  * Food: 8-12% (₹500-1,500 per person per day)
  * Activities: 8-15% (₹1,000-3,000 per day)
  * Local Transport: 2-5% (₹200-1,000 per day)

- For domestic destinations (Manali, Goa, Kerala, etc.):
  * Flights/Travel: 25-40% of budget (₹3,000-15,000 for 2 people)
  * Accommodation: 30-45% (₹1,500-5,000 per night)
  * Food: 15-25% (₹300-1,200 per person per day)
  * Activities: 15-25% (₹500-2,500 per day)
  * Local Transport: 5-10% (₹200-800 per day)

- For local destinations (same city/state):
  * Accommodation: 40-60% of budget
  * Food: 20-30% (local food costs)
  * Activities: 20-30% (local attractions)
  * Local Transport: 5-10%

Always provide realistic estimates based on the specific destination and ensure the breakdown adds up to the total budget."#
    )
}

/// AI text generation used by the API. Implementations never fail; `None`
/// means the feature is unavailable right now.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Generate a structured trip plan from a planner prompt.
    async fn generate_trip_itinerary(&self, prompt: &str) -> Option<GeneratedItinerary>;

    /// Short conversational answer to a traveller's message.
    async fn generate_travel_response(&self, message: &str) -> Option<String>;

    /// Two or three sentences describing a place.
    async fn generate_place_description(&self, place_name: &str, region: &str) -> Option<String>;
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for the OpenAI chat-completions endpoint.
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    pub fn new(client: reqwest::Client, config: &IntegrationsConfig) -> Self {
        Self {
            client,
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            api_key: config.openai_api_key.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Run one completion and return the first choice's content.
    async fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, IntegrationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(IntegrationError::NotConfigured("OpenAI access token"))?;

        let request = ChatRequest {
            model: MODEL,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
            max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(IntegrationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| IntegrationError::UnexpectedResponse("no completion choices".into()))
    }
}

#[async_trait]
impl ChatService for OpenAiClient {
    async fn generate_trip_itinerary(&self, prompt: &str) -> Option<GeneratedItinerary> {
        if !self.is_configured() {
            return None;
        }
        match self
            .complete(PLANNER_SYSTEM_PROMPT, &itinerary_prompt(prompt), 0.7, 2000)
            .await
        {
            Ok(content) => Some(GeneratedItinerary::from_content(&content)),
            Err(err) => {
                tracing::warn!(error = %err, "Itinerary generation failed");
                None
            }
        }
    }

    async fn generate_travel_response(&self, message: &str) -> Option<String> {
        if !self.is_configured() {
            return None;
        }
        self.complete(CHAT_SYSTEM_PROMPT, message, 0.7, 500)
            .await
            .map_err(|err| tracing::warn!(error = %err, "Travel chat completion failed"))
            .ok()
    }

    async fn generate_place_description(&self, place_name: &str, region: &str) -> Option<String> {
        if !self.is_configured() {
            return None;
        }
        let prompt = format!("Write a description for {place_name} in {region}.");
        self.complete(DESCRIPTION_SYSTEM_PROMPT, &prompt, 0.8, 150)
            .await
            .map_err(|err| {
                tracing::warn!(place = place_name, error = %err, "Place description failed");
            })
            .ok()
    }
}
