//! Currency and date-label formatting used in conflict messages.

use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Largest supported number of decimal places for a currency.
pub const MAX_MINOR_UNITS: u32 = 6;

/// Rounds `amount` to the currency's smallest unit.
///
/// `minor_units` is capped at [`MAX_MINOR_UNITS`].
pub fn round_to_minor_unit(amount: f64, minor_units: u32) -> f64 {
    let scale = 10f64.powi(minor_units.min(MAX_MINOR_UNITS) as i32);
    (amount * scale).round() / scale
}

/// Formats an amount as dollars with thousands separators.
///
/// The fractional part is only shown when it is non-zero after rounding,
/// so `1200.0` renders as `$1,200` and `250.5` as `$250.50`.
pub fn format_currency(amount: f64, minor_units: u32) -> String {
    let minor_units = minor_units.min(MAX_MINOR_UNITS);
    let scale = 10u64.pow(minor_units);
    let minor = (amount.abs() * scale as f64).round() as u64;
    let whole = minor / scale;
    let fraction = minor % scale;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && minor > 0 { "-" } else { "" };
    if fraction == 0 {
        format!("{sign}${grouped}")
    } else {
        format!(
            "{sign}${grouped}.{fraction:0width$}",
            width = minor_units as usize
        )
    }
}

/// Short display label for a date, e.g. "Feb 3".
pub fn date_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// A parsed cannot-travel entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLabel {
    /// Full calendar date ("2025-02-03").
    Exact(NaiveDate),
    /// Month and day in any year ("Feb 3").
    MonthDay { month: u32, day: u32 },
}

impl DateLabel {
    /// Parses "Mon D", "Month D" or an ISO `YYYY-MM-DD` date.
    ///
    /// Month names may be abbreviated down to three letters ("Sept" works).
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        if let Ok(date) = NaiveDate::parse_from_str(label, "%Y-%m-%d") {
            return Some(DateLabel::Exact(date));
        }

        let mut parts = label.split_whitespace();
        let month_name = parts.next()?.trim_end_matches('.').to_ascii_lowercase();
        let day: u32 = parts.next()?.trim_end_matches(',').parse().ok()?;
        if parts.next().is_some() || month_name.len() < 3 {
            return None;
        }

        let month = MONTHS
            .iter()
            .position(|full| full.starts_with(month_name.as_str()))? as u32
            + 1;

        // 2000 is a leap year, so Feb 29 is accepted.
        NaiveDate::from_ymd_opt(2000, month, day)?;
        Some(DateLabel::MonthDay { month, day })
    }

    pub fn matches(&self, date: NaiveDate) -> bool {
        match *self {
            DateLabel::Exact(exact) => exact == date,
            DateLabel::MonthDay { month, day } => date.month() == month && date.day() == day,
        }
    }
}
