use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt::Display, str::FromStr};

use crate::models::RecommendationItem;

/// Display ordering for the recommendation list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Order returned by the service
    #[default]
    Llm,
    RatingDesc,
    RatingAsc,
    PriceAsc,
    PriceDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 5] = [
        SortMode::Llm,
        SortMode::RatingDesc,
        SortMode::RatingAsc,
        SortMode::PriceAsc,
        SortMode::PriceDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Llm => "llm",
            SortMode::RatingDesc => "rating_desc",
            SortMode::RatingAsc => "rating_asc",
            SortMode::PriceAsc => "price_asc",
            SortMode::PriceDesc => "price_desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Llm => "AI order",
            SortMode::RatingDesc => "Rating (high to low)",
            SortMode::RatingAsc => "Rating (low to high)",
            SortMode::PriceAsc => "Price (low to high)",
            SortMode::PriceDesc => "Price (high to low)",
        }
    }
}

impl Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort mode '{0}' (expected one of llm, rating_desc, rating_asc, price_asc, price_desc)")]
pub struct ParseSortModeError(pub String);

impl FromStr for SortMode {
    type Err = ParseSortModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s.trim())
            .ok_or_else(|| ParseSortModeError(s.to_string()))
    }
}

fn rating(item: &RecommendationItem) -> f64 {
    item.rating.unwrap_or(0.0)
}

fn compare(a: f64, b: f64) -> Ordering {
    // Two missing prices compare as inf vs inf; treat as a tie
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Returns a freshly ordered view of `items` without touching the list itself
///
/// Missing ratings count as 0. Missing prices sort last for `PriceAsc`
/// (treated as +inf) and as 0 for `PriceDesc`. Ties keep no defined order.
pub fn sort_recommendations(
    items: &[RecommendationItem],
    mode: SortMode,
) -> Vec<&RecommendationItem> {
    let mut view: Vec<&RecommendationItem> = items.iter().collect();

    match mode {
        SortMode::Llm => {}
        SortMode::RatingDesc => view.sort_by(|a, b| compare(rating(b), rating(a))),
        SortMode::RatingAsc => view.sort_by(|a, b| compare(rating(a), rating(b))),
        SortMode::PriceAsc => view.sort_by(|a, b| {
            compare(
                a.price_for_two.unwrap_or(f64::INFINITY),
                b.price_for_two.unwrap_or(f64::INFINITY),
            )
        }),
        SortMode::PriceDesc => view.sort_by(|a, b| {
            compare(b.price_for_two.unwrap_or(0.0), a.price_for_two.unwrap_or(0.0))
        }),
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, rating: Option<f64>, price: Option<f64>) -> RecommendationItem {
        RecommendationItem {
            name: name.to_string(),
            city: Some("pune".to_string()),
            rating,
            price_for_two: price,
            ..Default::default()
        }
    }

    fn sample() -> Vec<RecommendationItem> {
        vec![
            item("A", Some(3.9), Some(800.0)),
            item("B", None, Some(400.0)),
            item("C", Some(4.7), None),
            item("D", Some(4.2), Some(1200.0)),
            item("E", Some(2.5), None),
        ]
    }

    fn names(view: &[&RecommendationItem]) -> Vec<String> {
        view.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn test_llm_preserves_service_order() {
        let items = sample();
        let view = sort_recommendations(&items, SortMode::Llm);
        assert_eq!(names(&view), vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_rating_desc_treats_missing_as_zero() {
        let items = sample();
        let view = sort_recommendations(&items, SortMode::RatingDesc);
        assert_eq!(names(&view), vec!["C", "D", "A", "E", "B"]);
        assert!(view
            .windows(2)
            .all(|w| rating(w[0]) >= rating(w[1])));
    }

    #[test]
    fn test_rating_asc_is_non_decreasing() {
        let items = sample();
        let view = sort_recommendations(&items, SortMode::RatingAsc);
        assert_eq!(view[0].name, "B");
        assert!(view
            .windows(2)
            .all(|w| rating(w[0]) <= rating(w[1])));
    }

    #[test]
    fn test_price_asc_puts_missing_last() {
        let items = sample();
        let view = sort_recommendations(&items, SortMode::PriceAsc);
        assert_eq!(names(&view[..3]), vec!["B", "A", "D"]);
        assert!(view[3..].iter().all(|i| i.price_for_two.is_none()));
    }

    #[test]
    fn test_price_desc_treats_missing_as_zero() {
        let items = sample();
        let view = sort_recommendations(&items, SortMode::PriceDesc);
        assert_eq!(names(&view[..3]), vec!["D", "A", "B"]);
        assert!(view[3..].iter().all(|i| i.price_for_two.is_none()));
    }

    #[test]
    fn test_every_mode_is_a_permutation() {
        let items = sample();
        for mode in SortMode::ALL {
            let mut sorted = names(&sort_recommendations(&items, mode));
            sorted.sort();
            assert_eq!(sorted, vec!["A", "B", "C", "D", "E"], "mode {}", mode);
        }
    }

    #[test]
    fn test_sorting_does_not_mutate_source() {
        let items = sample();
        let _ = sort_recommendations(&items, SortMode::PriceDesc);
        assert_eq!(items, sample());
    }

    #[test]
    fn test_parse_and_display() {
        for mode in SortMode::ALL {
            assert_eq!(mode.as_str().parse::<SortMode>().unwrap(), mode);
        }
        assert_eq!(SortMode::default(), SortMode::Llm);
        assert_eq!(SortMode::PriceAsc.label(), "Price (low to high)");
        assert!("cheapest".parse::<SortMode>().is_err());
    }

    #[test]
    fn test_serde_tokens() {
        let json = serde_json::to_string(&SortMode::RatingDesc).unwrap();
        assert_eq!(json, "\"rating_desc\"");
    }
}
