/// Startup loader for the option data behind the two inputs
///
/// The city catalog and budget bounds are requested concurrently. Each call
/// has its own fallback, so one failing never affects the other, and the
/// loader itself never fails.
use crate::{
    models::{input::DEFAULT_BUDGET_TEXT, BudgetBounds, CityCatalog},
    services::providers::RecommendationBackend,
};
use tracing::instrument;

/// Values the loader hands to the session
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapData {
    pub catalog: CityCatalog,
    pub bounds: BudgetBounds,
    /// Budget field seed: midpoint of service bounds, or the fixed default
    pub budget_text: String,
}

impl BootstrapData {
    /// Everything defaulted, as when the service is unreachable
    pub fn fallback() -> Self {
        Self {
            catalog: CityCatalog::fallback(),
            bounds: BudgetBounds::default(),
            budget_text: DEFAULT_BUDGET_TEXT.to_string(),
        }
    }
}

#[instrument(skip_all)]
pub async fn load_bootstrap(backend: &dyn RecommendationBackend) -> BootstrapData {
    let (cities, price_range) = tokio::join!(backend.fetch_cities(), backend.fetch_price_range());

    let catalog = match cities {
        Ok(cities) if !cities.is_empty() => {
            tracing::info!(count = cities.len(), "Loaded city catalog");
            CityCatalog::from_service(cities)
        }
        Ok(_) => {
            tracing::warn!("Service returned no cities, using fallback catalog");
            CityCatalog::fallback()
        }
        Err(e) => {
            tracing::warn!(error = %e, "City catalog unavailable, using fallback catalog");
            CityCatalog::fallback()
        }
    };

    let (bounds, budget_text) = match price_range {
        Ok(payload) => {
            let bounds = BudgetBounds::from_service(&payload);
            tracing::info!(min = bounds.min, max = bounds.max, "Loaded budget bounds");
            (bounds, bounds.midpoint().to_string())
        }
        Err(e) => {
            tracing::warn!(error = %e, "Budget bounds unavailable, using defaults");
            (BudgetBounds::default(), DEFAULT_BUDGET_TEXT.to_string())
        }
    };

    BootstrapData {
        catalog,
        bounds,
        budget_text,
    }
}
