use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::RecommendationRequest;

pub const DEFAULT_PRICE_MIN: f64 = 100.0;
pub const DEFAULT_PRICE_MAX: f64 = 3000.0;
/// Budget seeded when the price range could not be loaded
pub const DEFAULT_BUDGET_TEXT: &str = "800";
/// Slider granularity for the budget input
pub const BUDGET_STEP: u32 = 50;

pub const FALLBACK_CITIES: [&str; 6] = [
    "bangalore",
    "mumbai",
    "delhi",
    "chennai",
    "hyderabad",
    "pune",
];

/// Allowed price-for-two range offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for BudgetBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_PRICE_MIN,
            max: DEFAULT_PRICE_MAX,
        }
    }
}

impl BudgetBounds {
    /// Builds bounds from a `GET /price-range` payload
    ///
    /// Each side is coerced to a number independently and falls back to its
    /// default when absent, zero or non-numeric. Inverted bounds are swapped.
    pub fn from_service(payload: &Value) -> Self {
        let min = coerce_number(payload.get("min"), DEFAULT_PRICE_MIN);
        let max = coerce_number(payload.get("max"), DEFAULT_PRICE_MAX);

        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Midpoint rounded half-up to the nearest integer
    pub fn midpoint(&self) -> i64 {
        ((self.min + self.max) / 2.0 + 0.5).floor() as i64
    }
}

fn coerce_number(value: Option<&Value>, default: f64) -> f64 {
    let number = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() && n != 0.0 => n,
        _ => default,
    }
}

/// Ordered list of selectable city identifiers
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CityCatalog(Vec<String>);

impl CityCatalog {
    /// The static catalog used while the service is unavailable
    pub fn fallback() -> Self {
        Self(FALLBACK_CITIES.iter().map(|c| c.to_string()).collect())
    }

    /// Uses the service's list, or the fallback when it is empty
    pub fn from_service(cities: Vec<String>) -> Self {
        if cities.is_empty() {
            Self::fallback()
        } else {
            Self(cities)
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, city: &str) -> bool {
        self.0.iter().any(|c| c == city)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The two user inputs plus the option data that constrains them
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputState {
    pub city: String,
    pub budget_text: String,
    pub bounds: BudgetBounds,
    pub catalog: CityCatalog,
}

impl InputState {
    /// Budget as sent to the service; an empty field becomes `None`
    pub fn price_text(&self) -> Option<String> {
        if self.budget_text.is_empty() {
            None
        } else {
            Some(self.budget_text.clone())
        }
    }

    pub fn to_request(&self) -> RecommendationRequest {
        RecommendationRequest {
            city: self.city.clone(),
            price_text: self.price_text(),
        }
    }
}
