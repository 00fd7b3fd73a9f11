use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

pub mod input;
pub mod outcome;

pub use input::{BudgetBounds, CityCatalog, InputState, FALLBACK_CITIES};
pub use outcome::Outcome;

/// A restaurant recommendation as returned by the service
///
/// The client never builds these itself; it only filters and orders them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RecommendationItem {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub price_for_two: Option<f64>,
    /// Comma-separated cuisine list
    #[serde(default)]
    pub cuisines: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl RecommendationItem {
    /// Case-insensitive (name, city) identity used to collapse repeats
    pub fn dedup_key(&self) -> String {
        format!(
            "{}|{}",
            self.name.to_lowercase(),
            self.city.as_deref().unwrap_or_default().to_lowercase()
        )
    }

    /// Individual cuisines, trimmed, empty segments dropped
    pub fn cuisine_list(&self) -> Vec<&str> {
        self.cuisines
            .as_deref()
            .map(|c| c.split(',').map(str::trim).filter(|s| !s.is_empty()).collect())
            .unwrap_or_default()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Service Wire Types
// ============================================================================

/// Body of `POST /recommendations`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationRequest {
    pub city: String,
    /// `None` is sent as JSON `null` when the budget field is empty
    pub price_text: Option<String>,
}

/// Successful `POST /recommendations` body
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RecommendationsResponse {
    #[serde(default)]
    pub recommendations: Option<Vec<RecommendationItem>>,
}

/// `GET /cities` body
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CitiesResponse {
    #[serde(default)]
    pub cities: Option<Vec<String>>,
}

/// `GET /health` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub restaurants_loaded: Option<u64>,
}

/// One entry of the `detail` list carried by 400 and 502 responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorDetail {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorDetail {
    /// Extracts the `detail` list from an error body
    ///
    /// Malformed JSON is an error. A missing or non-list `detail` yields an
    /// empty list, and entries that are not objects are skipped.
    pub fn parse_list(body: &str) -> Result<Vec<ErrorDetail>, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(body)?;

        let details = value
            .get("detail")
            .and_then(|d| d.as_array())
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| serde_json::from_value::<ErrorDetail>(entry.clone()).ok())
                    .collect()
            })
            .unwrap_or_default();

        Ok(details)
    }
}

// ============================================================================
// Field Errors
// ============================================================================

/// The two user inputs a validation error can be attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    City,
    PriceText,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::City => "city",
            Field::PriceText => "price_text",
        }
    }

    /// Maps a service-side field name, ignoring anything not tied to an input
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "city" => Some(Field::City),
            "price_text" => Some(Field::PriceText),
            _ => None,
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validation failure attached to one input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
