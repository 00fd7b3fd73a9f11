use crate::models::{
    outcome::{CITY_REQUIRED_MESSAGE, REVIEW_INPUT_MESSAGE},
    ErrorDetail, Field, FieldError, InputState, Outcome, RecommendationRequest,
};

/// Local gate run before any network call
///
/// Only the city is checked here. The budget is forwarded as free text and
/// validated by the service.
pub fn validate_input(input: &InputState) -> Result<RecommendationRequest, Vec<FieldError>> {
    if input.city.trim().is_empty() {
        return Err(vec![FieldError::new(Field::City, CITY_REQUIRED_MESSAGE)]);
    }

    Ok(input.to_request())
}

/// Attributes service-side validation errors to the two inputs
///
/// Entries naming any other field, or carrying no message, are dropped. When
/// a field is named more than once, the last message wins.
pub fn field_errors_from_details(details: &[ErrorDetail]) -> Vec<FieldError> {
    let mut errors: Vec<FieldError> = Vec::new();

    for detail in details {
        let Some(field) = detail.field.as_deref().and_then(Field::from_wire) else {
            continue;
        };
        let Some(message) = detail.message.clone().filter(|m| !m.is_empty()) else {
            continue;
        };

        match errors.iter_mut().find(|e| e.field == field) {
            Some(existing) => existing.message = message,
            None => errors.push(FieldError::new(field, message)),
        }
    }

    errors
}

/// Builds the `ValidationFailed` outcome for a rejected submission
///
/// The generic message is shown only when the service sent no entries at all.
pub fn validation_outcome(details: &[ErrorDetail]) -> Outcome {
    let message = details
        .is_empty()
        .then(|| REVIEW_INPUT_MESSAGE.to_string());

    Outcome::ValidationFailed {
        errors: field_errors_from_details(details),
        message,
    }
}
