//! Group-level statistics for a preview panel.

use serde::{Deserialize, Serialize};

use crate::model::{Traveler, names_match};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub traveler_count: usize,
    pub strict_count: usize,
    /// Mean of `budget.max`; zero for an empty group.
    pub average_max_budget: f64,
    /// Distinct must-visit cities, first spelling wins, in first-seen order.
    pub must_visit_cities: Vec<String>,
}

impl GroupSummary {
    pub fn from_travelers(travelers: &[Traveler]) -> Self {
        let traveler_count = travelers.len();
        let strict_count = travelers.iter().filter(|t| t.is_strict()).count();
        let average_max_budget = if traveler_count == 0 {
            0.0
        } else {
            travelers
                .iter()
                .map(|t| t.constraints.budget.max)
                .sum::<f64>()
                / traveler_count as f64
        };

        let mut must_visit_cities: Vec<String> = Vec::new();
        for city in travelers
            .iter()
            .flat_map(|t| &t.constraints.non_negotiables.must_visit)
        {
            if !must_visit_cities.iter().any(|seen| names_match(seen, city)) {
                must_visit_cities.push(city.trim().to_string());
            }
        }

        Self {
            traveler_count,
            strict_count,
            average_max_budget,
            must_visit_cities,
        }
    }
}
