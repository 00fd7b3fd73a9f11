/// HTTP backend for the recommendation service
///
/// Thin reqwest wrapper. Status classification for recommendations happens in
/// the fetcher; the catalog and price-range calls only distinguish OK from not.
use crate::{
    error::{AppError, AppResult},
    models::{CitiesResponse, HealthStatus, RecommendationRequest},
    services::providers::{RawResponse, RecommendationBackend},
};
use reqwest::{Client as HttpClient, Url};

#[derive(Clone)]
pub struct HttpBackend {
    http_client: HttpClient,
    api_url: String,
}

impl HttpBackend {
    pub fn new(api_url: &str) -> AppResult<Self> {
        Self::with_client(HttpClient::new(), api_url)
    }

    pub fn with_client(http_client: HttpClient, api_url: &str) -> AppResult<Self> {
        let trimmed = api_url.trim().trim_end_matches('/');

        let parsed = Url::parse(trimmed)
            .map_err(|e| AppError::InvalidUrl(format!("{}: {}", api_url, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(AppError::InvalidUrl(format!(
                "{}: only http and https are supported",
                api_url
            )));
        }

        Ok(Self {
            http_client,
            api_url: trimmed.to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    async fn get_ok(&self, path: &'static str) -> AppResult<String> {
        let response = self.http_client.get(self.endpoint(path)).send().await?;

        if !response.status().is_success() {
            return Err(AppError::UnexpectedStatus {
                endpoint: path,
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait::async_trait]
impl RecommendationBackend for HttpBackend {
    async fn fetch_cities(&self) -> AppResult<Vec<String>> {
        let body = self.get_ok("/cities").await?;
        let parsed: CitiesResponse = serde_json::from_str(&body)?;
        let cities = parsed.cities.unwrap_or_default();

        tracing::debug!(count = cities.len(), "City catalog received");

        Ok(cities)
    }

    async fn fetch_price_range(&self) -> AppResult<serde_json::Value> {
        let body = self.get_ok("/price-range").await?;
        let payload: serde_json::Value = serde_json::from_str(&body)?;

        tracing::debug!(payload = %payload, "Price range received");

        Ok(payload)
    }

    async fn request_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> AppResult<RawResponse> {
        let response = self
            .http_client
            .post(self.endpoint("/recommendations"))
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(status, body_len = body.len(), "Recommendation response received");

        Ok(RawResponse { status, body })
    }

    async fn health(&self) -> AppResult<HealthStatus> {
        let body = self.get_ok("/health").await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
