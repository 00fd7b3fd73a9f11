use serde::Serialize;

use super::{Field, FieldError, RecommendationItem};

pub const IDLE_MESSAGE: &str = "Start by selecting a city and budget above.";
pub const LOADING_MESSAGE: &str = "Finding the best restaurants for you…";
pub const CITY_REQUIRED_MESSAGE: &str = "Please select a city.";
pub const REVIEW_INPUT_MESSAGE: &str = "Please review your input and try again.";
pub const SERVICE_UNAVAILABLE_MESSAGE: &str =
    "AI service is temporarily unavailable. Please try again later.";
pub const UPSTREAM_INVALID_MESSAGE: &str =
    "AI service returned an invalid response. Please try again.";
pub const NO_RESULTS_MESSAGE: &str = "No restaurants found for this city and budget.";
pub const BACKEND_UNREACHABLE_MESSAGE: &str =
    "Unable to reach the backend. Check if the API is running.";

/// Result state of the most recent submission attempt
///
/// Exactly one outcome is current at a time; each submission replaces it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Idle {
        message: String,
    },
    Loading,
    /// Field errors are rendered next to their input. `message` is only set
    /// when the service rejected the input without naming a field.
    ValidationFailed {
        errors: Vec<FieldError>,
        message: Option<String>,
    },
    ServiceUnavailable {
        message: String,
    },
    UpstreamInvalid {
        message: String,
    },
    Success {
        items: Vec<RecommendationItem>,
    },
    Empty {
        message: String,
    },
}

impl Default for Outcome {
    fn default() -> Self {
        Outcome::Idle {
            message: IDLE_MESSAGE.to_string(),
        }
    }
}

impl Outcome {
    pub fn unreachable() -> Self {
        Outcome::ServiceUnavailable {
            message: BACKEND_UNREACHABLE_MESSAGE.to_string(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Outcome::Loading)
    }

    /// True for every kind of failure, local or remote
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Outcome::ValidationFailed { .. }
                | Outcome::ServiceUnavailable { .. }
                | Outcome::UpstreamInvalid { .. }
        )
    }

    /// Informational text for the results area, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Idle { message }
            | Outcome::ServiceUnavailable { message }
            | Outcome::UpstreamInvalid { message }
            | Outcome::Empty { message } => Some(message),
            Outcome::ValidationFailed { message, .. } => message.as_deref(),
            Outcome::Loading => Some(LOADING_MESSAGE),
            Outcome::Success { .. } => None,
        }
    }

    pub fn field_error(&self, field: Field) -> Option<&str> {
        match self {
            Outcome::ValidationFailed { errors, .. } => errors
                .iter()
                .find(|e| e.field == field)
                .map(|e| e.message.as_str()),
            _ => None,
        }
    }

    /// Deduplicated recommendations; empty unless the outcome is `Success`
    pub fn items(&self) -> &[RecommendationItem] {
        match self {
            Outcome::Success { items } => items,
            _ => &[],
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Idle { .. } => "idle",
            Outcome::Loading => "loading",
            Outcome::ValidationFailed { .. } => "validation_failed",
            Outcome::ServiceUnavailable { .. } => "service_unavailable",
            Outcome::UpstreamInvalid { .. } => "upstream_invalid",
            Outcome::Success { .. } => "success",
            Outcome::Empty { .. } => "empty",
        }
    }
}
