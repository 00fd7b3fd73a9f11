pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod ui;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Outcome, RecommendationItem};
pub use services::{HttpBackend, RecommendationBackend, SortMode};
pub use ui::{Session, SessionEvent};
