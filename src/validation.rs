//! Fail-fast input checks run before any rule.

use std::collections::HashSet;

use crate::error::InputError;
use crate::evaluator::EvaluateOptions;
use crate::format::{DateLabel, MAX_MINOR_UNITS};
use crate::model::{Itinerary, Traveler};

/// Rejects options the formatter cannot honor.
pub fn validate_options(options: &EvaluateOptions) -> Result<(), InputError> {
    if options.minor_units > MAX_MINOR_UNITS {
        return Err(InputError::UnsupportedMinorUnits {
            value: options.minor_units,
            max: MAX_MINOR_UNITS,
        });
    }
    Ok(())
}

/// Validates a full evaluation request.
pub fn validate_request(travelers: &[Traveler], itinerary: &Itinerary) -> Result<(), InputError> {
    if travelers.is_empty() {
        return Err(InputError::NoTravelers);
    }

    let mut seen = HashSet::new();
    for traveler in travelers {
        if !seen.insert(&traveler.id) {
            return Err(InputError::DuplicateTraveler(traveler.id.clone()));
        }
        validate_traveler(traveler)?;
    }

    validate_itinerary(itinerary)
}

/// Validates a single traveler's constraint record.
pub fn validate_traveler(traveler: &Traveler) -> Result<(), InputError> {
    let constraints = &traveler.constraints;

    if let (Some(start), Some(end)) = (constraints.date_window.start, constraints.date_window.end) {
        if start > end {
            return Err(InputError::InvertedDateWindow {
                traveler: traveler.id.clone(),
            });
        }
    }

    check_amount(&format!("{}.budget.max", traveler.id), constraints.budget.max)?;
    check_amount(&format!("{}.budget.current", traveler.id), constraints.budget.current)?;

    let lists: [(&'static str, &[String]); 3] = [
        ("must_visit", &constraints.non_negotiables.must_visit),
        ("cannot_travel", &constraints.non_negotiables.cannot_travel),
        ("restrictions", &constraints.passport_visa.restrictions),
    ];
    for (field, entries) in lists {
        if let Some(value) = first_duplicate(entries) {
            return Err(InputError::DuplicateEntry {
                traveler: traveler.id.clone(),
                field,
                value: value.to_string(),
            });
        }
    }

    if let Some(label) = constraints
        .non_negotiables
        .cannot_travel
        .iter()
        .find(|label| DateLabel::parse(label).is_none())
    {
        return Err(InputError::InvalidDateLabel {
            traveler: traveler.id.clone(),
            label: label.clone(),
        });
    }

    Ok(())
}

/// Validates leg ordering, names and costs.
pub fn validate_itinerary(itinerary: &Itinerary) -> Result<(), InputError> {
    if itinerary.is_empty() {
        return Err(InputError::EmptyItinerary);
    }

    for (index, leg) in itinerary.legs.iter().enumerate() {
        if leg.city.trim().is_empty() {
            return Err(InputError::EmptyCity { index });
        }
        check_amount(&format!("leg {index} cost"), leg.cost)?;
        if index > 0 && leg.arrival < itinerary.legs[index - 1].arrival {
            return Err(InputError::LegsOutOfOrder { index });
        }
    }

    Ok(())
}

fn check_amount(field: &str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NonFiniteAmount {
            field: field.to_string(),
        });
    }
    if value < 0.0 {
        return Err(InputError::NegativeAmount {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

/// Case-insensitive duplicate search; returns the second occurrence.
fn first_duplicate(entries: &[String]) -> Option<&str> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .find(|entry| !seen.insert(entry.trim().to_lowercase()))
        .map(String::as_str)
}
