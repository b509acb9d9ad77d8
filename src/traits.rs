//! Extension seams for the evaluator.
//!
//! Rules and distance estimators are kept behind small traits so hosts can
//! swap in their own checks or geodata without touching the evaluator loop.

use chrono::NaiveDate;

use crate::conflict::{Conflict, ConflictKind};
use crate::evaluator::EvaluateOptions;
use crate::model::{Itinerary, Leg, Traveler};

/// Read-only view of the itinerary shared by every rule during one call.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub itinerary: &'a Itinerary,
    pub options: &'a EvaluateOptions,
    /// First and last arrival dates.
    pub trip_start: NaiveDate,
    pub trip_end: NaiveDate,
}

impl<'a> RuleContext<'a> {
    /// Returns `None` for an empty itinerary.
    pub fn new(itinerary: &'a Itinerary, options: &'a EvaluateOptions) -> Option<Self> {
        let (trip_start, trip_end) = itinerary.date_range()?;
        Some(Self {
            itinerary,
            options,
            trip_start,
            trip_end,
        })
    }
}

/// A single constraint check applied to one traveler.
///
/// Implementations append zero or more conflicts of their own
/// [`Rule::kind`] to `out`, in display order.
pub trait Rule: Send + Sync {
    fn kind(&self) -> ConflictKind;

    fn check(&self, ctx: &RuleContext<'_>, traveler: &Traveler, out: &mut Vec<Conflict>);
}

/// Estimates travel distance between consecutive legs.
pub trait DistanceEstimator: Sync {
    /// Distance in kilometers, or `None` when either leg lacks geodata.
    fn distance_km(&self, from: &Leg, to: &Leg) -> Option<f64>;

    /// Sum of leg-to-leg distances in itinerary order.
    fn route_distance_km(&self, itinerary: &Itinerary) -> Option<f64> {
        itinerary
            .legs
            .windows(2)
            .map(|pair| self.distance_km(&pair[0], &pair[1]))
            .sum()
    }
}
