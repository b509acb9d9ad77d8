//! Sample group trip to Japan.
//!
//! Four travelers with overlapping but imperfect constraints, five cities
//! and four candidate routes.

#![allow(dead_code)]

use chrono::NaiveDate;

use trip_feasibility::evaluator::CandidateRoute;
use trip_feasibility::model::{
    Budget, DateWindow, Flexibility, Itinerary, Leg, Traveler, VisaStatus,
};

/// A catalog city with its average per-person cost.
#[derive(Debug, Clone)]
pub struct City {
    pub name: &'static str,
    pub country: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub avg_cost: f64,
}

impl City {
    pub const fn new(name: &'static str, lat: f64, lng: f64, avg_cost: f64) -> Self {
        Self {
            name,
            country: "Japan",
            lat,
            lng,
            avg_cost,
        }
    }
}

// ============================================================================
// City Catalog
// ============================================================================

pub const CITIES: &[City] = &[
    City::new("Tokyo", 35.6762, 139.6503, 1500.0),
    City::new("Kyoto", 35.0116, 135.7681, 1200.0),
    City::new("Osaka", 34.6937, 135.5023, 1100.0),
    City::new("Hiroshima", 34.3853, 132.4553, 900.0),
    City::new("Nara", 34.6851, 135.8048, 800.0),
];

pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).expect("valid fixture date")
}

/// A leg to a catalog city priced at its average cost.
pub fn leg(city: &str, month: u32, day: u32) -> Leg {
    let city = CITIES
        .iter()
        .find(|c| c.name == city)
        .unwrap_or_else(|| panic!("{city} is not in the catalog"));
    Leg::new(city.name, date(month, day), city.avg_cost)
        .with_country(city.country)
        .with_location(city.lat, city.lng)
}

// ============================================================================
// Travelers
// ============================================================================

pub fn sarah() -> Traveler {
    let mut traveler = Traveler::new("1", "Sarah Johnson");
    let constraints = &mut traveler.constraints;
    constraints.date_window = DateWindow::new(Some(date(1, 15)), Some(date(2, 15)));
    constraints.date_window.blackout_dates.insert(date(1, 12));
    constraints.budget = Budget::new(5000.0, 4200.0);
    constraints.airline_preferences = vec!["Delta".into(), "United".into()];
    constraints.non_negotiables.must_visit = vec!["Tokyo".into()];
    constraints.non_negotiables.cannot_travel = vec!["Jan 12".into()];
    constraints.flexibility = Flexibility::Flexible;
    traveler
}

pub fn john() -> Traveler {
    let mut traveler = Traveler::new("2", "John Smith");
    let constraints = &mut traveler.constraints;
    constraints.date_window = DateWindow::new(Some(date(1, 20)), Some(date(2, 20)));
    constraints.budget = Budget::new(3500.0, 3750.0);
    constraints.airline_preferences = vec!["American".into(), "Delta".into()];
    constraints.non_negotiables.must_visit = vec!["Kyoto".into()];
    constraints.flexibility = Flexibility::Strict;
    traveler
}

pub fn priya() -> Traveler {
    let mut traveler = Traveler::new("3", "Priya Patel");
    let constraints = &mut traveler.constraints;
    constraints.date_window = DateWindow::new(Some(date(1, 10)), Some(date(2, 3)));
    constraints.date_window.blackout_dates.insert(date(2, 3));
    constraints.budget = Budget::new(4500.0, 3900.0);
    constraints.passport_visa.status = VisaStatus::Pending;
    constraints.passport_visa.restrictions = vec!["China".into()];
    constraints.airline_preferences = vec!["United".into(), "ANA".into()];
    constraints.non_negotiables.must_visit = vec!["Osaka".into()];
    constraints.non_negotiables.cannot_travel = vec!["Feb 3".into()];
    constraints.flexibility = Flexibility::Flexible;
    traveler
}

pub fn david() -> Traveler {
    let mut traveler = Traveler::new("4", "David Chen");
    let constraints = &mut traveler.constraints;
    constraints.date_window = DateWindow::new(Some(date(1, 25)), Some(date(2, 10)));
    constraints.budget = Budget::new(6000.0, 4500.0);
    constraints.airline_preferences = vec!["ANA".into(), "JAL".into()];
    constraints.non_negotiables.must_visit = vec!["Tokyo".into(), "Kyoto".into()];
    constraints.flexibility = Flexibility::Strict;
    traveler
}

pub fn mock_travelers() -> Vec<Traveler> {
    vec![sarah(), john(), priya(), david()]
}

// ============================================================================
// Candidate Routes
// ============================================================================

/// Tokyo → Kyoto → Osaka, inside everyone's window.
pub fn classic_route() -> Itinerary {
    Itinerary::new(vec![
        leg("Tokyo", 1, 27),
        leg("Kyoto", 1, 30),
        leg("Osaka", 2, 2),
    ])
}

/// Tokyo → Osaka → Kyoto → Hiroshima, totalling $4,700 and arriving in
/// Hiroshima on Feb 3.
pub fn extended_route() -> Itinerary {
    Itinerary::new(vec![
        leg("Tokyo", 1, 28),
        leg("Osaka", 1, 30),
        leg("Kyoto", 2, 1),
        leg("Hiroshima", 2, 3),
    ])
}

/// Kyoto → Nara → Osaka → Tokyo.
pub fn kansai_first_route() -> Itinerary {
    Itinerary::new(vec![
        leg("Kyoto", 1, 26),
        leg("Nara", 1, 28),
        leg("Osaka", 1, 30),
        leg("Tokyo", 2, 1),
    ])
}

/// Tokyo → Hiroshima → Kyoto, running past David's and Priya's windows.
pub fn late_route() -> Itinerary {
    Itinerary::new(vec![
        leg("Tokyo", 2, 5),
        leg("Hiroshima", 2, 8),
        leg("Kyoto", 2, 12),
    ])
}

pub fn mock_routes() -> Vec<CandidateRoute> {
    vec![
        CandidateRoute::new("1", classic_route()),
        CandidateRoute::new("2", extended_route()),
        CandidateRoute::new("3", kansai_first_route()),
        CandidateRoute::new("4", late_route()),
    ]
}
