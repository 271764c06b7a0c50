//! Local-calendar helpers: day and month keys plus the strict date parsing
//! every temporal view goes through.

use std::fmt;

use chrono::{Datelike, NaiveDate};

/// One calendar month, the bucket month-scoped views key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Strict `YYYY-MM-DD` parse. Full ISO datetimes are accepted by taking the
/// calendar segment before `T`; anything else is rejected rather than
/// guessed, so a record with a damaged date simply drops out of the temporal
/// views.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let date_part = match trimmed.find('T') {
        Some(index) => &trimmed[..index],
        None => trimmed,
    };
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// `YYYY-MM-DD`, the stored `date` format.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `YYYY-MM` label for the month containing `date`.
pub fn month_label(date: NaiveDate) -> String {
    MonthKey::of(date).to_string()
}

/// `15 Mar 2025`, the list-row date.
pub fn format_day(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// `15 Mar`, the compact variant for tight rows.
pub fn format_day_short(date: NaiveDate) -> String {
    date.format("%d %b").to_string()
}

/// `Saturday, 15 March 2025`, the detail-header date.
pub fn format_day_full(date: NaiveDate) -> String {
    date.format("%A, %d %B %Y").to_string()
}

/// `March 2025`, the month heading.
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
