/// Recommendation fetcher
///
/// Issues the recommendation call and classifies whatever comes back into
/// exactly one `Outcome`. Nothing is thrown past this boundary.
use crate::{
    error::{AppError, AppResult},
    models::{
        outcome::{NO_RESULTS_MESSAGE, SERVICE_UNAVAILABLE_MESSAGE, UPSTREAM_INVALID_MESSAGE},
        ErrorDetail, Outcome, RecommendationRequest, RecommendationsResponse,
    },
    services::{dedup::deduplicate, providers::RecommendationBackend, validator},
};
use tracing::instrument;

/// Calls the service and turns the reply into an outcome
#[instrument(
    skip_all,
    fields(city = %request.city, price_text = ?request.price_text, backend = backend.name())
)]
pub async fn fetch_recommendations(
    backend: &dyn RecommendationBackend,
    request: &RecommendationRequest,
) -> Outcome {
    tracing::info!("Requesting recommendations");

    match backend.request_recommendations(request).await {
        Ok(raw) => classify_response(raw.status, &raw.body),
        Err(e) => {
            tracing::warn!(
                error = %e,
                transport = e.is_transport(),
                "Recommendation request failed"
            );
            Outcome::unreachable()
        }
    }
}

/// Maps a status code and body to an outcome
///
/// Unhandled statuses and undecodable bodies take the unreachable-backend path
/// rather than being read as an empty success.
pub fn classify_response(status: u16, body: &str) -> Outcome {
    let classified = match status {
        400 => ErrorDetail::parse_list(body)
            .map(|details| validator::validation_outcome(&details))
            .map_err(AppError::from),
        502 => ErrorDetail::parse_list(body)
            .map(|details| upstream_outcome(&details))
            .map_err(AppError::from),
        503 => Ok(Outcome::ServiceUnavailable {
            message: SERVICE_UNAVAILABLE_MESSAGE.to_string(),
        }),
        200..=299 => success_outcome(body),
        other => Err(AppError::UnexpectedStatus {
            endpoint: "/recommendations",
            status: other,
        }),
    };

    match classified {
        Ok(outcome) => {
            tracing::info!(status, outcome = outcome.kind(), "Recommendation response classified");
            outcome
        }
        Err(e) => {
            tracing::warn!(status, error = %e, "Unusable recommendation response");
            Outcome::unreachable()
        }
    }
}

fn upstream_outcome(details: &[ErrorDetail]) -> Outcome {
    let message = details
        .first()
        .and_then(|d| d.message.as_deref())
        .filter(|m| !m.is_empty())
        .unwrap_or(UPSTREAM_INVALID_MESSAGE);

    Outcome::UpstreamInvalid {
        message: message.to_string(),
    }
}

fn success_outcome(body: &str) -> AppResult<Outcome> {
    let parsed: RecommendationsResponse = serde_json::from_str(body)?;
    let raw = parsed.recommendations.unwrap_or_default();
    let raw_count = raw.len();
    let items = deduplicate(raw);

    tracing::info!(raw = raw_count, unique = items.len(), "Recommendations received");

    if items.is_empty() {
        Ok(Outcome::Empty {
            message: NO_RESULTS_MESSAGE.to_string(),
        })
    } else {
        Ok(Outcome::Success { items })
    }
}
