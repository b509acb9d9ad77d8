//! Constraint evaluator: travelers + itinerary in, conflicts out.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::conflict::{Conflict, FeasibilityStatus, status};
use crate::error::{EvaluateError, InputError};
use crate::model::{Itinerary, Traveler};
use crate::rules::default_rules;
use crate::traits::{DistanceEstimator, Rule, RuleContext};
use crate::validation::{validate_options, validate_request};

/// Which figure the budget rule treats as a traveler's projected spend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetBasis {
    /// `budget.current` as supplied by the caller.
    #[default]
    Declared,
    /// The itinerary's total cost, for legs priced per person.
    ItineraryCost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluateOptions {
    /// Decimal places of the currency's smallest unit (2 for cents).
    pub minor_units: u32,
    /// Whether full blackout dates count alongside cannot-travel labels.
    pub check_blackout_dates: bool,
    /// Move conflicts of strict travelers ahead of flexible ones.
    pub strict_first: bool,
    pub budget_basis: BudgetBasis,
}

impl Default for EvaluateOptions {
    fn default() -> Self {
        Self {
            minor_units: 2,
            check_blackout_dates: true,
            strict_first: false,
            budget_basis: BudgetBasis::Declared,
        }
    }
}

/// A named itinerary competing with others for the group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRoute {
    pub id: String,
    pub itinerary: Itinerary,
}

impl CandidateRoute {
    pub fn new(id: impl Into<String>, itinerary: Itinerary) -> Self {
        Self {
            id: id.into(),
            itinerary,
        }
    }
}

/// Evaluation of one candidate route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteAssessment {
    pub route_id: String,
    pub cities: Vec<String>,
    pub status: FeasibilityStatus,
    pub total_cost: f64,
    pub duration_days: i64,
    /// `None` when some leg has no coordinates.
    pub distance_km: Option<f64>,
    pub conflicts: Vec<Conflict>,
}

/// Runs a fixed, kind-ordered rule set over every traveler.
pub struct Evaluator {
    rules: Vec<Box<dyn Rule>>,
    options: EvaluateOptions,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EvaluateOptions::default())
    }
}

impl Evaluator {
    pub fn new(options: EvaluateOptions) -> Self {
        Self {
            rules: default_rules(),
            options,
        }
    }

    /// Uses a custom rule set. Rules are stably ordered by kind so output
    /// keeps the Budget, Date, Visa, Coverage order per traveler.
    pub fn with_rules(options: EvaluateOptions, mut rules: Vec<Box<dyn Rule>>) -> Self {
        rules.sort_by_key(|rule| rule.kind());
        Self { rules, options }
    }

    pub fn options(&self) -> &EvaluateOptions {
        &self.options
    }

    /// Evaluates every traveler against `itinerary`.
    ///
    /// Conflicts come back in traveler order, then kind order. Malformed
    /// input fails the whole call.
    pub fn evaluate(
        &self,
        travelers: &[Traveler],
        itinerary: &Itinerary,
    ) -> Result<Vec<Conflict>, EvaluateError> {
        let validated =
            validate_options(&self.options).and_then(|()| validate_request(travelers, itinerary));
        if let Err(err) = validated {
            warn!(error = %err, "rejecting evaluation input");
            return Err(err.into());
        }

        let ctx = RuleContext::new(itinerary, &self.options).ok_or(InputError::EmptyItinerary)?;

        let mut conflicts = Vec::new();
        for traveler in travelers {
            let before = conflicts.len();
            for rule in &self.rules {
                rule.check(&ctx, traveler, &mut conflicts);
            }
            for conflict in &conflicts[before..] {
                trace!(
                    traveler = %traveler.id,
                    kind = %conflict.kind,
                    severity = ?conflict.severity,
                    message = %conflict.message,
                    "conflict detected"
                );
            }
        }

        if self.options.strict_first {
            let strict: HashSet<_> = travelers
                .iter()
                .filter(|traveler| traveler.is_strict())
                .map(|traveler| &traveler.id)
                .collect();
            conflicts.sort_by_key(|conflict| {
                !conflict
                    .affected_traveler_ids
                    .iter()
                    .any(|id| strict.contains(id))
            });
        }

        debug!(
            travelers = travelers.len(),
            legs = itinerary.legs.len(),
            conflicts = conflicts.len(),
            status = %status(&conflicts),
            "evaluated itinerary"
        );

        Ok(conflicts)
    }

    /// Evaluates one candidate route and summarizes it.
    pub fn assess_route<D: DistanceEstimator>(
        &self,
        travelers: &[Traveler],
        route: &CandidateRoute,
        distance: &D,
    ) -> Result<RouteAssessment, EvaluateError> {
        let conflicts = self.evaluate(travelers, &route.itinerary)?;
        Ok(RouteAssessment {
            route_id: route.id.clone(),
            cities: route.itinerary.destinations().map(str::to_string).collect(),
            status: status(&conflicts),
            total_cost: route.itinerary.total_cost(),
            duration_days: route.itinerary.duration_days(),
            distance_km: distance.route_distance_km(&route.itinerary),
            conflicts,
        })
    }

    /// Evaluates independent candidate routes in parallel.
    ///
    /// Results line up with `routes`; one malformed route does not affect
    /// the others.
    pub fn assess_routes<D: DistanceEstimator>(
        &self,
        travelers: &[Traveler],
        routes: &[CandidateRoute],
        distance: &D,
    ) -> Vec<Result<RouteAssessment, EvaluateError>> {
        debug!(routes = routes.len(), "assessing candidate routes");
        routes
            .par_iter()
            .map(|route| self.assess_route(travelers, route, distance))
            .collect()
    }
}

/// Evaluates with default options and rules.
pub fn evaluate(travelers: &[Traveler], itinerary: &Itinerary) -> Result<Vec<Conflict>, EvaluateError> {
    Evaluator::default().evaluate(travelers, itinerary)
}

/// Evaluates with explicit options and the default rules.
pub fn evaluate_with(
    travelers: &[Traveler],
    itinerary: &Itinerary,
    options: &EvaluateOptions,
) -> Result<Vec<Conflict>, EvaluateError> {
    Evaluator::new(options.clone()).evaluate(travelers, itinerary)
}

/// Assesses candidate routes in parallel with the default rules.
pub fn assess_routes<D: DistanceEstimator>(
    travelers: &[Traveler],
    routes: &[CandidateRoute],
    options: &EvaluateOptions,
    distance: &D,
) -> Vec<Result<RouteAssessment, EvaluateError>> {
    Evaluator::new(options.clone()).assess_routes(travelers, routes, distance)
}
