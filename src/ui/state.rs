use crate::{
    models::{InputState, Outcome, RecommendationItem, RecommendationRequest},
    services::{
        bootstrap::{load_bootstrap, BootstrapData},
        fetcher::fetch_recommendations,
        providers::RecommendationBackend,
        sorter::{sort_recommendations, SortMode},
        validator::validate_input,
    },
};

/// User and network events the session reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    CityChanged(String),
    BudgetChanged(String),
    SortChanged(SortMode),
    Bootstrapped(BootstrapData),
    SubmitRequested,
    ResponseClassified(Outcome),
}

/// Work the caller must perform after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Send this request and feed the classified reply back as
    /// `SessionEvent::ResponseClassified`
    Submit(RecommendationRequest),
}

/// Session-scoped state: the inputs, the current outcome and the sort mode
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    input: InputState,
    outcome: Outcome,
    sort_mode: SortMode,
    bootstrapped: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.bootstrapped
    }

    /// The submit control is disabled while a request is in flight
    pub fn can_submit(&self) -> bool {
        !self.outcome.is_loading()
    }

    /// Applies one event and returns the follow-up command, if any
    pub fn apply(&mut self, event: SessionEvent) -> Option<Command> {
        match event {
            SessionEvent::CityChanged(city) => {
                self.input.city = city;
                None
            }
            SessionEvent::BudgetChanged(budget) => {
                self.input.budget_text = budget;
                None
            }
            SessionEvent::SortChanged(mode) => {
                self.sort_mode = mode;
                None
            }
            SessionEvent::Bootstrapped(data) => {
                if self.bootstrapped {
                    tracing::debug!("Ignoring repeated bootstrap");
                    return None;
                }
                self.input.catalog = data.catalog;
                self.input.bounds = data.bounds;
                self.input.budget_text = data.budget_text;
                self.bootstrapped = true;
                None
            }
            SessionEvent::SubmitRequested => {
                if !self.can_submit() {
                    tracing::debug!("Submission ignored while a request is in flight");
                    return None;
                }

                match validate_input(&self.input) {
                    Ok(request) => {
                        self.outcome = Outcome::Loading;
                        Some(Command::Submit(request))
                    }
                    Err(errors) => {
                        self.outcome = Outcome::ValidationFailed {
                            errors,
                            message: None,
                        };
                        None
                    }
                }
            }
            SessionEvent::ResponseClassified(outcome) => {
                if !self.outcome.is_loading() {
                    tracing::warn!(
                        outcome = outcome.kind(),
                        "Discarding response with no request in flight"
                    );
                    return None;
                }
                self.outcome = outcome;
                None
            }
        }
    }

    /// Loads the catalog and budget bounds once per session
    pub async fn bootstrap(&mut self, backend: &dyn RecommendationBackend) {
        if self.bootstrapped {
            return;
        }
        let data = load_bootstrap(backend).await;
        self.apply(SessionEvent::Bootstrapped(data));
    }

    /// Runs a full submission and returns the resulting outcome
    pub async fn submit(&mut self, backend: &dyn RecommendationBackend) -> &Outcome {
        if let Some(Command::Submit(request)) = self.apply(SessionEvent::SubmitRequested) {
            let outcome = fetch_recommendations(backend, &request).await;
            self.apply(SessionEvent::ResponseClassified(outcome));
        }
        &self.outcome
    }

    /// Current results in the selected display order
    pub fn visible_recommendations(&self) -> Vec<&RecommendationItem> {
        sort_recommendations(self.outcome.items(), self.sort_mode)
    }
}
