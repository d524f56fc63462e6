use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Shown wherever a birthday could not be parsed.
pub const UNKNOWN_BIRTHDAY: &str = "—";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English name for a 1-based month number, empty when out of range.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
        .unwrap_or("")
}

/// Three-letter month abbreviation ("Jan", "Feb", ...).
pub fn month_abbreviation(month: u32) -> &'static str {
    let name = month_name(month);
    name.get(..3).unwrap_or(name)
}

/// A position in the calendar year with the year stripped off.
///
/// Ordering is month first, then day, which is the same order as the
/// zero-padded `MM-DD` sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Build a month/day pair, rejecting values no calendar can hold.
    /// Feb 29 is accepted since it exists in leap years.
    pub fn new(month: u32, day: u32) -> Option<Self> {
        // 2000 is a leap year, so every real month/day pair fits in it
        NaiveDate::from_ymd_opt(2000, month, day).map(Self::of)
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Zero-padded `MM-DD`, e.g. `03-31`.
    pub fn sort_key(&self) -> String {
        format!("{:02}-{:02}", self.month, self.day)
    }

    /// Human-readable `DD Mon`, e.g. `31 Mar`.
    pub fn display(&self) -> String {
        format!("{:02} {}", self.day, month_abbreviation(self.month))
    }
}

/// A successfully parsed birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KnownBirthDate {
    month_day: MonthDay,
    source_year: i32,
}

impl KnownBirthDate {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month_day: MonthDay::of(date),
            source_year: date.year(),
        }
    }

    pub fn day(&self) -> u32 {
        self.month_day.day
    }

    pub fn month(&self) -> u32 {
        self.month_day.month
    }

    /// Resolved birth year. Reference only: matching never looks at it.
    pub fn source_year(&self) -> i32 {
        self.source_year
    }

    pub fn month_day(&self) -> MonthDay {
        self.month_day
    }

    pub fn display(&self) -> String {
        self.month_day.display()
    }

    pub fn sort_key(&self) -> String {
        self.month_day.sort_key()
    }

    /// Format back into the roster's `DD-Mon-YY` layout.
    pub fn to_source_text(&self) -> String {
        format!(
            "{:02}-{}-{:02}",
            self.day(),
            month_abbreviation(self.month()),
            self.source_year.rem_euclid(100)
        )
    }
}

/// Normalized birth date attached to a roster member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BirthDate {
    Known(KnownBirthDate),
    #[default]
    Unknown,
}

impl BirthDate {
    pub fn is_valid(&self) -> bool {
        matches!(self, BirthDate::Known(_))
    }

    pub fn known(&self) -> Option<&KnownBirthDate> {
        match self {
            BirthDate::Known(date) => Some(date),
            BirthDate::Unknown => None,
        }
    }

    pub fn month_day(&self) -> Option<MonthDay> {
        self.known().map(KnownBirthDate::month_day)
    }

    pub fn display(&self) -> Option<String> {
        self.known().map(KnownBirthDate::display)
    }

    pub fn sort_key(&self) -> Option<String> {
        self.known().map(KnownBirthDate::sort_key)
    }

    /// `DD Mon`, or the unknown-birthday placeholder.
    pub fn display_or_placeholder(&self) -> String {
        self.display()
            .unwrap_or_else(|| UNKNOWN_BIRTHDAY.to_string())
    }
}
