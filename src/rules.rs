//! Built-in constraint rules.
//!
//! Each rule looks at one traveler at a time and never at the rest of the
//! group, so adding a traveler can only ever add conflicts.

use chrono::NaiveDate;

use crate::conflict::{Conflict, ConflictDetail, ConflictKind, Severity};
use crate::evaluator::BudgetBasis;
use crate::format::{DateLabel, date_label, format_currency, round_to_minor_unit};
use crate::model::{Traveler, VisaStatus, names_match};
use crate::traits::{Rule, RuleContext};

/// The default rule set in display order.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(BudgetRule),
        Box::new(DateRule),
        Box::new(VisaRule),
        Box::new(CoverageRule),
    ]
}

/// Projected spend above the traveler's maximum.
#[derive(Debug, Clone, Copy, Default)]
pub struct BudgetRule;

impl Rule for BudgetRule {
    fn kind(&self) -> ConflictKind {
        ConflictKind::Budget
    }

    fn check(&self, ctx: &RuleContext<'_>, traveler: &Traveler, out: &mut Vec<Conflict>) {
        let budget = &traveler.constraints.budget;
        let spend = match ctx.options.budget_basis {
            BudgetBasis::Declared => budget.current,
            BudgetBasis::ItineraryCost => ctx.itinerary.total_cost(),
        };
        // Compared in whole minor units.
        let minor_units = ctx.options.minor_units;
        let max = round_to_minor_unit(budget.max, minor_units);
        let spend = round_to_minor_unit(spend, minor_units);
        if spend <= max {
            return;
        }
        let overage = round_to_minor_unit(spend - max, minor_units);
        out.push(Conflict::new(
            ConflictKind::Budget,
            Severity::Error,
            &traveler.id,
            format!(
                "{}'s budget exceeded by {}",
                traveler.name,
                format_currency(overage, minor_units)
            ),
            ConflictDetail::OverBudget { overage },
        ));
    }
}

/// Availability window and per-day blackouts.
///
/// A trip that leaves the window entirely is reported once as an error and
/// suppresses the per-day warnings for that traveler.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRule;

impl Rule for DateRule {
    fn kind(&self) -> ConflictKind {
        ConflictKind::Date
    }

    fn check(&self, ctx: &RuleContext<'_>, traveler: &Traveler, out: &mut Vec<Conflict>) {
        let constraints = &traveler.constraints;
        let window = &constraints.date_window;

        if !window.contains_span(ctx.trip_start, ctx.trip_end) {
            out.push(Conflict::new(
                ConflictKind::Date,
                Severity::Error,
                &traveler.id,
                format!(
                    "Travel dates {} to {} fall outside {}'s availability window ({})",
                    date_label(ctx.trip_start),
                    date_label(ctx.trip_end),
                    traveler.name,
                    describe_window(window.start, window.end),
                ),
                ConflictDetail::OutsideWindow {
                    trip_start: ctx.trip_start,
                    trip_end: ctx.trip_end,
                    window_start: window.start,
                    window_end: window.end,
                },
            ));
            return;
        }

        // Labels were validated before evaluation; anything unparseable is skipped.
        let labels: Vec<DateLabel> = constraints
            .non_negotiables
            .cannot_travel
            .iter()
            .filter_map(|label| DateLabel::parse(label))
            .collect();

        for date in ctx.itinerary.arrival_dates() {
            let blacked_out =
                ctx.options.check_blackout_dates && window.blackout_dates.contains(&date);
            let labelled = labels.iter().any(|label| label.matches(date));
            if !(blacked_out || labelled) {
                continue;
            }

            out.push(Conflict::new(
                ConflictKind::Date,
                Severity::Warning,
                &traveler.id,
                format!("{} cannot travel on {}", traveler.name, date_label(date)),
                ConflictDetail::BlockedDate { date },
            ));
        }
    }
}

fn describe_window(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => format!("{} to {}", date_label(start), date_label(end)),
        (Some(start), None) => format!("from {}", date_label(start)),
        (None, Some(end)) => format!("until {}", date_label(end)),
        (None, None) => "unbounded".to_string(),
    }
}

/// Passport validity and destination restrictions.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisaRule;

impl Rule for VisaRule {
    fn kind(&self) -> ConflictKind {
        ConflictKind::Visa
    }

    fn check(&self, ctx: &RuleContext<'_>, traveler: &Traveler, out: &mut Vec<Conflict>) {
        let passport = &traveler.constraints.passport_visa;

        let matched: Vec<String> = passport
            .restrictions
            .iter()
            .filter(|restriction| {
                ctx.itinerary.legs.iter().any(|leg| {
                    names_match(&leg.city, restriction)
                        || leg
                            .country
                            .as_deref()
                            .is_some_and(|country| names_match(country, restriction))
                })
            })
            .cloned()
            .collect();

        if passport.status == VisaStatus::Expired {
            let mut message = format!("{}'s passport/visa has expired", traveler.name);
            if !matched.is_empty() {
                message.push_str(&format!("; also restricted from: {}", matched.join(", ")));
            }
            out.push(Conflict::new(
                ConflictKind::Visa,
                Severity::Error,
                &traveler.id,
                message,
                ConflictDetail::VisaExpired {
                    restrictions: matched,
                },
            ));
        } else if !matched.is_empty() {
            out.push(Conflict::new(
                ConflictKind::Visa,
                Severity::Warning,
                &traveler.id,
                format!(
                    "{} has visa restrictions: {}",
                    traveler.name,
                    matched.join(", ")
                ),
                ConflictDetail::VisaRestricted {
                    restrictions: matched,
                },
            ));
        }
    }
}

/// Must-visit cities missing from the itinerary.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverageRule;

impl Rule for CoverageRule {
    fn kind(&self) -> ConflictKind {
        ConflictKind::Coverage
    }

    fn check(&self, ctx: &RuleContext<'_>, traveler: &Traveler, out: &mut Vec<Conflict>) {
        for city in &traveler.constraints.non_negotiables.must_visit {
            if ctx.itinerary.visits_city(city) {
                continue;
            }
            out.push(Conflict::new(
                ConflictKind::Coverage,
                Severity::Warning,
                &traveler.id,
                format!(
                    "{} must visit {}, which is not in the itinerary",
                    traveler.name,
                    city.trim()
                ),
                ConflictDetail::MissingCity {
                    city: city.trim().to_string(),
                },
            ));
        }
    }
}
