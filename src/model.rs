//! Traveler and itinerary data model.
//!
//! Everything here is plain data passed into the evaluator by value or
//! reference. Invariants are checked by [`crate::validation`] at evaluation
//! time rather than at construction, so hosts can build records field by
//! field from form input.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique identifier for a traveler.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TravelerId(pub String);

impl TravelerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TravelerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A member of the travel group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Traveler {
    pub id: TravelerId,
    pub name: String,
    /// Short display initials, e.g. "SJ".
    #[serde(default)]
    pub avatar: String,
    pub constraints: Constraints,
}

impl Traveler {
    /// Creates a traveler with default (unconstrained) constraints.
    ///
    /// The avatar is derived from the initials of `name`.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        let avatar = name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect();

        Self {
            id: TravelerId::new(id),
            name,
            avatar,
            constraints: Constraints::default(),
        }
    }

    pub fn is_strict(&self) -> bool {
        self.constraints.flexibility == Flexibility::Strict
    }
}

/// Everything a traveler needs from the trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    pub date_window: DateWindow,
    pub budget: Budget,
    pub passport_visa: PassportVisa,
    /// Preferred carriers. Carried for display; never evaluated.
    pub airline_preferences: Vec<String>,
    pub non_negotiables: NonNegotiables,
    pub flexibility: Flexibility,
}

/// Availability window plus individual days the traveler is unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub blackout_dates: BTreeSet<NaiveDate>,
}

impl DateWindow {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            start,
            end,
            blackout_dates: BTreeSet::new(),
        }
    }

    /// Whether the inclusive span `first..=last` lies inside this window.
    ///
    /// Open bounds accept anything on that side.
    pub fn contains_span(&self, first: NaiveDate, last: NaiveDate) -> bool {
        let after_start = self.start.is_none_or(|start| start <= first);
        let before_end = self.end.is_none_or(|end| last <= end);
        after_start && before_end
    }
}

/// Budget in major currency units (e.g. dollars).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub max: f64,
    /// Projected spend for this traveler's share of the itinerary.
    pub current: f64,
}

impl Budget {
    pub fn new(max: f64, current: f64) -> Self {
        Self { max, current }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisaStatus {
    #[default]
    Valid,
    Pending,
    Expired,
    NotApplied,
}

impl fmt::Display for VisaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VisaStatus::Valid => "valid",
            VisaStatus::Pending => "pending",
            VisaStatus::Expired => "expired",
            VisaStatus::NotApplied => "not applied",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassportVisa {
    pub status: VisaStatus,
    /// Destinations (cities or countries) the traveler cannot enter.
    pub restrictions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NonNegotiables {
    pub must_visit: Vec<String>,
    /// Date labels such as "Feb 3", or ISO dates.
    pub cannot_travel: Vec<String>,
}

/// Tolerance for schedule changes. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flexibility {
    Strict,
    #[default]
    Flexible,
}

/// One city segment of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub city: String,
    #[serde(default)]
    pub country: Option<String>,
    pub arrival: NaiveDate,
    /// Incremental cost of this leg in major currency units.
    pub cost: f64,
    /// City coordinates (lat, lng), when known.
    #[serde(default)]
    pub location: Option<(f64, f64)>,
}

impl Leg {
    pub fn new(city: impl Into<String>, arrival: NaiveDate, cost: f64) -> Self {
        Self {
            city: city.into(),
            country: None,
            arrival,
            cost,
            location: None,
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_location(mut self, lat: f64, lng: f64) -> Self {
        self.location = Some((lat, lng));
        self
    }
}

/// Ordered sequence of legs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub legs: Vec<Leg>,
}

impl Itinerary {
    pub fn new(legs: Vec<Leg>) -> Self {
        Self { legs }
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn total_cost(&self) -> f64 {
        self.legs.iter().map(|leg| leg.cost).sum()
    }

    /// First and last arrival dates. `None` for an empty itinerary.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.legs.iter().map(|leg| leg.arrival).min()?;
        let last = self.legs.iter().map(|leg| leg.arrival).max()?;
        Some((first, last))
    }

    /// Inclusive number of days from first to last arrival.
    pub fn duration_days(&self) -> i64 {
        self.date_range()
            .map(|(first, last)| (last - first).num_days() + 1)
            .unwrap_or(0)
    }

    /// Distinct arrival dates in ascending order.
    pub fn arrival_dates(&self) -> BTreeSet<NaiveDate> {
        self.legs.iter().map(|leg| leg.arrival).collect()
    }

    /// City names in leg order.
    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        self.legs.iter().map(|leg| leg.city.as_str())
    }

    /// Whether any leg visits `city` (case-insensitive).
    pub fn visits_city(&self, city: &str) -> bool {
        self.legs.iter().any(|leg| names_match(&leg.city, city))
    }
}

/// Case-insensitive comparison of city, country and restriction names.
pub fn names_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
