//! Application state for a planning session.
//!
//! `TripPlanner` owns the group, the candidate routes and the current
//! selections. Every mutation is a validated command that either applies
//! completely or returns a [`CommandError`] and leaves state untouched.

use chrono::NaiveDate;
use tracing::debug;

use crate::conflict::Conflict;
use crate::error::{CommandError, EvaluateError};
use crate::evaluator::{CandidateRoute, EvaluateOptions, Evaluator, RouteAssessment};
use crate::format::DateLabel;
use crate::haversine::HaversineEstimator;
use crate::model::{Flexibility, Traveler, TravelerId, VisaStatus, names_match};
use crate::summary::GroupSummary;

pub struct TripPlanner {
    travelers: Vec<Traveler>,
    routes: Vec<CandidateRoute>,
    selected_traveler: Option<TravelerId>,
    selected_route: Option<String>,
    evaluator: Evaluator,
}

impl TripPlanner {
    /// Starts a session with the first traveler selected and no routes.
    pub fn new(travelers: Vec<Traveler>, options: EvaluateOptions) -> Self {
        let selected_traveler = travelers.first().map(|t| t.id.clone());
        Self {
            travelers,
            routes: Vec::new(),
            selected_traveler,
            selected_route: None,
            evaluator: Evaluator::new(options),
        }
    }

    pub fn travelers(&self) -> &[Traveler] {
        &self.travelers
    }

    pub fn routes(&self) -> &[CandidateRoute] {
        &self.routes
    }

    pub fn traveler(&self, id: &TravelerId) -> Option<&Traveler> {
        self.travelers.iter().find(|t| &t.id == id)
    }

    pub fn selected_traveler(&self) -> Option<&Traveler> {
        self.selected_traveler.as_ref().and_then(|id| self.traveler(id))
    }

    pub fn selected_route(&self) -> Option<&CandidateRoute> {
        let id = self.selected_route.as_ref()?;
        self.routes.iter().find(|route| &route.id == id)
    }

    pub fn select_traveler(&mut self, id: &TravelerId) -> Result<(), CommandError> {
        self.traveler_mut(id)?;
        self.selected_traveler = Some(id.clone());
        Ok(())
    }

    pub fn add_route(&mut self, route: CandidateRoute) -> Result<(), CommandError> {
        if route.id.trim().is_empty() {
            return Err(CommandError::EmptyValue("route id"));
        }
        if self.routes.iter().any(|existing| existing.id == route.id) {
            return Err(CommandError::Duplicate {
                field: "routes",
                value: route.id,
            });
        }
        debug!(route = %route.id, legs = route.itinerary.legs.len(), "route added");
        self.routes.push(route);
        Ok(())
    }

    pub fn select_route(&mut self, id: &str) -> Result<(), CommandError> {
        if !self.routes.iter().any(|route| route.id == id) {
            return Err(CommandError::UnknownRoute(id.to_string()));
        }
        self.selected_route = Some(id.to_string());
        Ok(())
    }

    pub fn add_must_visit_city(&mut self, id: &TravelerId, city: &str) -> Result<(), CommandError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(CommandError::EmptyValue("city"));
        }
        let traveler = self.traveler_mut(id)?;
        let must_visit = &mut traveler.constraints.non_negotiables.must_visit;
        if must_visit.iter().any(|existing| names_match(existing, city)) {
            return Err(CommandError::Duplicate {
                field: "must_visit",
                value: city.to_string(),
            });
        }
        must_visit.push(city.to_string());
        debug!(traveler = %id, city, "must-visit city added");
        Ok(())
    }

    pub fn remove_must_visit_city(&mut self, id: &TravelerId, city: &str) -> Result<(), CommandError> {
        let traveler = self.traveler_mut(id)?;
        let must_visit = &mut traveler.constraints.non_negotiables.must_visit;
        let index = must_visit
            .iter()
            .position(|existing| names_match(existing, city))
            .ok_or_else(|| CommandError::NotPresent {
                field: "must_visit",
                value: city.trim().to_string(),
            })?;
        must_visit.remove(index);
        debug!(traveler = %id, city, "must-visit city removed");
        Ok(())
    }

    /// Adds a date label such as "Jan 12" or "2025-01-12".
    pub fn add_cannot_travel_date(&mut self, id: &TravelerId, label: &str) -> Result<(), CommandError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(CommandError::EmptyValue("date"));
        }
        let parsed =
            DateLabel::parse(label).ok_or_else(|| CommandError::InvalidDateLabel(label.to_string()))?;

        let traveler = self.traveler_mut(id)?;
        let cannot_travel = &mut traveler.constraints.non_negotiables.cannot_travel;
        let duplicate = cannot_travel
            .iter()
            .any(|existing| same_date_label(existing, label, Some(parsed)));
        if duplicate {
            return Err(CommandError::Duplicate {
                field: "cannot_travel",
                value: label.to_string(),
            });
        }
        cannot_travel.push(label.to_string());
        debug!(traveler = %id, label, "cannot-travel date added");
        Ok(())
    }

    pub fn remove_cannot_travel_date(&mut self, id: &TravelerId, label: &str) -> Result<(), CommandError> {
        let parsed = DateLabel::parse(label);
        let traveler = self.traveler_mut(id)?;
        let cannot_travel = &mut traveler.constraints.non_negotiables.cannot_travel;
        let index = cannot_travel
            .iter()
            .position(|existing| same_date_label(existing, label, parsed))
            .ok_or_else(|| CommandError::NotPresent {
                field: "cannot_travel",
                value: label.trim().to_string(),
            })?;
        cannot_travel.remove(index);
        debug!(traveler = %id, label, "cannot-travel date removed");
        Ok(())
    }

    pub fn add_blackout_date(&mut self, id: &TravelerId, date: NaiveDate) -> Result<(), CommandError> {
        let traveler = self.traveler_mut(id)?;
        if !traveler.constraints.date_window.blackout_dates.insert(date) {
            return Err(CommandError::Duplicate {
                field: "blackout_dates",
                value: date.to_string(),
            });
        }
        debug!(traveler = %id, %date, "blackout date added");
        Ok(())
    }

    pub fn set_date_window(
        &mut self,
        id: &TravelerId,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<(), CommandError> {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(CommandError::InvertedWindow);
            }
        }
        let window = &mut self.traveler_mut(id)?.constraints.date_window;
        window.start = start;
        window.end = end;
        debug!(traveler = %id, ?start, ?end, "date window updated");
        Ok(())
    }

    pub fn set_budget_max(&mut self, id: &TravelerId, max: f64) -> Result<(), CommandError> {
        check_amount(max)?;
        self.traveler_mut(id)?.constraints.budget.max = max;
        debug!(traveler = %id, max, "budget max updated");
        Ok(())
    }

    pub fn set_projected_spend(&mut self, id: &TravelerId, current: f64) -> Result<(), CommandError> {
        check_amount(current)?;
        self.traveler_mut(id)?.constraints.budget.current = current;
        debug!(traveler = %id, current, "projected spend updated");
        Ok(())
    }

    pub fn set_passport_status(&mut self, id: &TravelerId, status: VisaStatus) -> Result<(), CommandError> {
        self.traveler_mut(id)?.constraints.passport_visa.status = status;
        debug!(traveler = %id, %status, "passport status updated");
        Ok(())
    }

    pub fn set_flexibility(&mut self, id: &TravelerId, flexibility: Flexibility) -> Result<(), CommandError> {
        self.traveler_mut(id)?.constraints.flexibility = flexibility;
        debug!(traveler = %id, ?flexibility, "flexibility updated");
        Ok(())
    }

    /// Adds or removes an airline. Returns whether it is now preferred.
    pub fn toggle_airline_preference(&mut self, id: &TravelerId, airline: &str) -> Result<bool, CommandError> {
        let airline = airline.trim();
        if airline.is_empty() {
            return Err(CommandError::EmptyValue("airline"));
        }
        let preferences = &mut self.traveler_mut(id)?.constraints.airline_preferences;
        let now_preferred = match preferences.iter().position(|a| names_match(a, airline)) {
            Some(index) => {
                preferences.remove(index);
                false
            }
            None => {
                preferences.push(airline.to_string());
                true
            }
        };
        debug!(traveler = %id, airline, now_preferred, "airline preference toggled");
        Ok(now_preferred)
    }

    /// Conflicts for the selected route, or `None` when nothing is selected.
    pub fn conflicts_for_selected_route(&self) -> Option<Result<Vec<Conflict>, EvaluateError>> {
        let route = self.selected_route()?;
        Some(self.evaluator.evaluate(&self.travelers, &route.itinerary))
    }

    /// Re-evaluates every candidate route against the current group.
    pub fn assess_all(&self) -> Vec<Result<RouteAssessment, EvaluateError>> {
        self.evaluator
            .assess_routes(&self.travelers, &self.routes, &HaversineEstimator)
    }

    pub fn group_summary(&self) -> GroupSummary {
        GroupSummary::from_travelers(&self.travelers)
    }

    fn traveler_mut(&mut self, id: &TravelerId) -> Result<&mut Traveler, CommandError> {
        self.travelers
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| CommandError::UnknownTraveler(id.clone()))
    }
}

/// "Feb 3", "february 3" and "feb 3" all name the same entry.
fn same_date_label(existing: &str, label: &str, parsed: Option<DateLabel>) -> bool {
    names_match(existing, label) || (parsed.is_some() && DateLabel::parse(existing) == parsed)
}

fn check_amount(amount: f64) -> Result<(), CommandError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(CommandError::InvalidAmount(amount))
    }
}
