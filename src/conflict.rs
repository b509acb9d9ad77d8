//! Conflict records and the feasibility status derived from them.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::TravelerId;

/// Conflict category. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConflictKind {
    Budget,
    Date,
    Visa,
    /// A must-visit city is missing from the itinerary.
    Coverage,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConflictKind::Budget => "budget",
            ConflictKind::Date => "date",
            ConflictKind::Visa => "visa",
            ConflictKind::Coverage => "coverage",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

/// Structured payload behind a conflict message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConflictDetail {
    /// Projected spend exceeds the budget by `overage`.
    OverBudget { overage: f64 },
    /// A leg arrives on a day the traveler cannot travel.
    BlockedDate { date: NaiveDate },
    /// Trip dates fall outside the traveler's availability window.
    OutsideWindow {
        trip_start: NaiveDate,
        trip_end: NaiveDate,
        window_start: Option<NaiveDate>,
        window_end: Option<NaiveDate>,
    },
    /// Destinations the traveler is restricted from.
    VisaRestricted { restrictions: Vec<String> },
    /// Passport or visa has expired.
    VisaExpired { restrictions: Vec<String> },
    MissingCity { city: String },
}

/// A single detected problem with the itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    #[serde(rename = "type")]
    pub kind: ConflictKind,
    pub severity: Severity,
    pub affected_traveler_ids: BTreeSet<TravelerId>,
    pub message: String,
    pub detail: ConflictDetail,
}

impl Conflict {
    pub fn new(
        kind: ConflictKind,
        severity: Severity,
        traveler: &TravelerId,
        message: impl Into<String>,
        detail: ConflictDetail,
    ) -> Self {
        Self {
            kind,
            severity,
            affected_traveler_ids: BTreeSet::from([traveler.clone()]),
            message: message.into(),
            detail,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn affects(&self, traveler: &TravelerId) -> bool {
        self.affected_traveler_ids.contains(traveler)
    }
}

/// Aggregate classification of an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeasibilityStatus {
    Feasible,
    Partial,
    Infeasible,
}

impl fmt::Display for FeasibilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FeasibilityStatus::Feasible => "feasible",
            FeasibilityStatus::Partial => "partial",
            FeasibilityStatus::Infeasible => "infeasible",
        };
        f.write_str(label)
    }
}

/// Derives the feasibility status from a conflict set.
pub fn status(conflicts: &[Conflict]) -> FeasibilityStatus {
    if conflicts.iter().any(Conflict::is_error) {
        FeasibilityStatus::Infeasible
    } else if conflicts.is_empty() {
        FeasibilityStatus::Feasible
    } else {
        FeasibilityStatus::Partial
    }
}
