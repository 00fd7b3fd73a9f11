/// Recommendation service abstraction
///
/// The session talks to the remote service only through this trait, so the
/// bootstrap loader and fetcher can be exercised without a network.
use crate::{
    error::AppResult,
    models::{HealthStatus, RecommendationRequest},
};

pub mod http;

pub use http::HttpBackend;

/// Status and body of a `POST /recommendations` call, unclassified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Trait for recommendation service backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationBackend: Send + Sync {
    /// Fetch the city catalog (`GET /cities`)
    ///
    /// A non-OK status is an error; an absent list is returned as empty.
    async fn fetch_cities(&self) -> AppResult<Vec<String>>;

    /// Fetch the raw budget bounds payload (`GET /price-range`)
    ///
    /// Returned undecoded so numeric coercion can apply per field.
    async fn fetch_price_range(&self) -> AppResult<serde_json::Value>;

    /// Submit a recommendation request (`POST /recommendations`)
    ///
    /// Every HTTP status is returned as `Ok`; only transport failures are errors.
    async fn request_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> AppResult<RawResponse>;

    /// Checks service liveness (`GET /health`)
    async fn health(&self) -> AppResult<HealthStatus>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}
