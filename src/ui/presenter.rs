//! Plain-text rendering of a session for terminal output.

use std::fmt::Write;

use crate::{
    models::{input::BUDGET_STEP, InputState, Outcome, RecommendationItem},
    ui::state::Session,
};

/// Capitalises the first character of a city identifier
pub fn display_city(city: &str) -> String {
    let mut chars = city.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One-line summary shown above the result list
pub fn summary_line(count: usize, city: &str, budget_text: &str) -> String {
    let mut line = format!("Showing {} restaurants", count);
    let city = display_city(city);
    if !city.is_empty() {
        let _ = write!(line, " • City: {}", city);
    }
    let _ = write!(line, " • Budget: ₹{} for two", budget_text);
    line
}

/// Renders a single recommendation as an indented block
pub fn format_item(index: usize, item: &RecommendationItem) -> String {
    let mut out = format!("{}. {}", index, item.name);

    let mut meta = Vec::new();
    if let Some(rating) = item.rating {
        meta.push(format!("★ {:.1}", rating));
    }
    if let Some(price) = item.price_for_two {
        meta.push(format!("₹{} for two", price.round() as i64));
    }
    if !meta.is_empty() {
        let _ = write!(out, " [{}]", meta.join(", "));
    }

    if let Some(city) = item.city.as_deref().filter(|c| !c.is_empty()) {
        let _ = write!(out, "\n   City: {}", display_city(city));
    }
    let cuisines = item.cuisine_list();
    if !cuisines.is_empty() {
        let _ = write!(out, "\n   Cuisines: {}", cuisines.join(" · "));
    }
    if let Some(reason) = item.reason.as_deref().filter(|r| !r.is_empty()) {
        let _ = write!(out, "\n   Why this restaurant? {}", reason);
    }

    out
}

/// Guidance lines about the inputs: the budget range, and the catalog when
/// the city is missing or unknown
pub fn input_hints(input: &InputState) -> Vec<String> {
    let mut hints = vec![format!(
        "Budget range: ₹{} to ₹{} for two, in steps of ₹{}",
        input.bounds.min.round() as i64,
        input.bounds.max.round() as i64,
        BUDGET_STEP
    )];

    let city = input.city.trim();
    if !city.is_empty() && !input.catalog.contains(city) {
        hints.push(format!("\"{}\" is not in the known city list", city));
    }
    if (city.is_empty() || !input.catalog.contains(city)) && !input.catalog.is_empty() {
        hints.push(format!("Available cities: {}", input.catalog.as_slice().join(", ")));
    }

    hints
}

/// Renders the session's current outcome, capped at `max_items` results
pub fn render_session(session: &Session, max_items: usize) -> String {
    let input = session.input();

    match session.outcome() {
        Outcome::Success { .. } => {
            let visible = session.visible_recommendations();
            let mut lines = vec![
                summary_line(visible.len(), &input.city, &input.budget_text),
                format!("Sort by: {}", session.sort_mode().label()),
                String::new(),
            ];
            lines.extend(
                visible
                    .iter()
                    .take(max_items)
                    .enumerate()
                    .map(|(i, item)| format_item(i + 1, item)),
            );
            lines.join("\n")
        }
        Outcome::ValidationFailed { errors, message } => {
            let mut lines = vec!["There were problems with your input:".to_string()];
            lines.extend(errors.iter().map(|e| format!("- {}: {}", e.field, e.message)));
            if let Some(message) = message {
                lines.push(message.clone());
            }
            lines.join("\n")
        }
        other => other.message().unwrap_or_default().to_string(),
    }
}
