//! Group trip feasibility checks
//!
//! Checks a travel group's constraints against a proposed itinerary and
//! reports typed conflicts plus an aggregate feasibility status.

pub mod model;
pub mod format;
pub mod conflict;
pub mod error;
pub mod validation;
pub mod traits;
pub mod rules;
pub mod evaluator;
pub mod haversine;
pub mod summary;
pub mod planner;
