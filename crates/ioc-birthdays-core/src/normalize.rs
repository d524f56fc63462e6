//! Birth date normalization.
//!
//! The roster stores birth dates as `DD-Mon-YY` text (e.g. `31-Mar-85`).
//! Anything that does not fit that layout, or names a day the calendar does
//! not have, becomes [`BirthDate::Unknown`] instead of failing the load.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{BirthDate, KnownBirthDate};

/// Two-digit years at or above this pivot belong to the 1900s, the rest to
/// the 2000s (`69` → 1969, `68` → 2068).
pub const DEFAULT_CENTURY_PIVOT: u8 = 69;

/// Layout of the roster's `born` column: day, abbreviated month, two-digit
/// year, separated by dashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDateFormat {
    century_pivot: u8,
}

impl BirthDateFormat {
    /// A pivot of 0 maps every year to the 1900s; 100 maps every year to
    /// the 2000s. Larger values are clamped to 100.
    pub fn new(century_pivot: u8) -> Self {
        Self {
            century_pivot: century_pivot.min(100),
        }
    }

    pub fn century_pivot(&self) -> u8 {
        self.century_pivot
    }

    /// Expand a two-digit year using the pivot.
    pub fn resolve_year(&self, two_digit_year: u8) -> i32 {
        let yy = i32::from(two_digit_year);
        if two_digit_year >= self.century_pivot {
            1900 + yy
        } else {
            2000 + yy
        }
    }

    fn parse(&self, text: &str) -> Option<NaiveDate> {
        let mut parts = text.split('-');
        let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }

        let day_ok = (1..=2).contains(&day.len()) && day.bytes().all(|b| b.is_ascii_digit());
        let month_ok = month.len() == 3 && month.bytes().all(|b| b.is_ascii_alphabetic());
        let year_ok = year.len() == 2 && year.bytes().all(|b| b.is_ascii_digit());
        if !(day_ok && month_ok && year_ok) {
            return None;
        }

        let full_year = self.resolve_year(year.parse().ok()?);
        NaiveDate::parse_from_str(&format!("{}-{}-{}", day, month, full_year), "%d-%b-%Y").ok()
    }
}

impl Default for BirthDateFormat {
    fn default() -> Self {
        Self::new(DEFAULT_CENTURY_PIVOT)
    }
}

/// Normalize a raw `born` cell.
pub fn normalize(raw_birth_text: &str, format: &BirthDateFormat) -> BirthDate {
    let text = raw_birth_text.trim();
    if text.is_empty() {
        return BirthDate::Unknown;
    }

    match format.parse(text) {
        Some(date) => BirthDate::Known(KnownBirthDate::from_date(date)),
        None => {
            debug!(raw = %text, "Unparseable birth date, treating as unknown");
            BirthDate::Unknown
        }
    }
}
