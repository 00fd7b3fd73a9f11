use std::collections::HashSet;

use crate::models::RecommendationItem;

/// Drops repeated recommendations, keeping the first occurrence of each
/// case-insensitive (name, city) pair in its original position.
pub fn deduplicate(items: Vec<RecommendationItem>) -> Vec<RecommendationItem> {
    let mut seen = HashSet::with_capacity(items.len());
    let before = items.len();

    let unique: Vec<RecommendationItem> = items
        .into_iter()
        .filter(|item| seen.insert(item.dedup_key()))
        .collect();

    if unique.len() < before {
        tracing::debug!(
            dropped = before - unique.len(),
            kept = unique.len(),
            "Removed duplicate recommendations"
        );
    }

    unique
}
