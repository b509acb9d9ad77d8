//! Error types for evaluation and planner commands.

use thiserror::Error;

use crate::model::TravelerId;

/// Evaluation failure. The evaluator does no I/O, so malformed input is the
/// only way it can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluateError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
}

/// The precise reason an input was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("traveler list is empty")]
    NoTravelers,
    #[error("itinerary has no legs")]
    EmptyItinerary,
    #[error("traveler {0} appears more than once")]
    DuplicateTraveler(TravelerId),
    #[error("traveler {traveler}: date window starts after it ends")]
    InvertedDateWindow { traveler: TravelerId },
    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: String, value: f64 },
    #[error("{field} must be a finite number")]
    NonFiniteAmount { field: String },
    #[error("traveler {traveler}: duplicate {field} entry {value:?}")]
    DuplicateEntry {
        traveler: TravelerId,
        field: &'static str,
        value: String,
    },
    #[error("traveler {traveler}: {label:?} is not a recognizable date")]
    InvalidDateLabel { traveler: TravelerId, label: String },
    #[error("leg {index} has an empty city name")]
    EmptyCity { index: usize },
    #[error("leg {index} arrives before the previous leg")]
    LegsOutOfOrder { index: usize },
    #[error("minor_units must be at most {max} (got {value})")]
    UnsupportedMinorUnits { value: u32, max: u32 },
}

/// Rejected planner command. State is left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("unknown traveler {0}")]
    UnknownTraveler(TravelerId),
    #[error("unknown route {0}")]
    UnknownRoute(String),
    #[error("{0} must not be empty")]
    EmptyValue(&'static str),
    #[error("{value:?} is already in {field}")]
    Duplicate { field: &'static str, value: String },
    #[error("{value:?} is not in {field}")]
    NotPresent { field: &'static str, value: String },
    #[error("{0:?} is not a recognizable date (expected e.g. \"Jan 12\" or \"2025-01-12\")")]
    InvalidDateLabel(String),
    #[error("amount must be a non-negative finite number (got {0})")]
    InvalidAmount(f64),
    #[error("date window starts after it ends")]
    InvertedWindow,
}
