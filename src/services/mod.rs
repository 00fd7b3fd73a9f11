pub mod bootstrap;
pub mod dedup;
pub mod fetcher;
pub mod providers;
pub mod sorter;
pub mod validator;

pub use bootstrap::{load_bootstrap, BootstrapData};
pub use dedup::deduplicate;
pub use fetcher::{classify_response, fetch_recommendations};
pub use providers::{HttpBackend, RawResponse, RecommendationBackend};
pub use sorter::{sort_recommendations, SortMode};
pub use validator::validate_input;
