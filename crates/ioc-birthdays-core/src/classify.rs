//! Birthday classification relative to a reference date.
//!
//! Every comparison is on month and day only. Birth years never take part,
//! so someone born in 1950 and someone born in 1999 on the same calendar day
//! land in exactly the same views.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::models::{month_name, KnownBirthDate, Member, MonthDay};

/// Default length of the upcoming-birthday window, in days after today.
pub const DEFAULT_WINDOW_DAYS: u32 = 15;

/// Any run of this many consecutive days contains every month/day, Feb 29
/// included (leap days can be eight years apart, e.g. 2096 to 2104).
pub const FULL_CALENDAR_DAYS: u32 = 8 * 366 + 2;

/// The month after `month`, wrapping December to January.
pub fn next_month(month: u32) -> u32 {
    month % 12 + 1
}

/// The `window_days` calendar dates following `today`, starting tomorrow.
///
/// Dates are produced by stepping one day at a time, so month and year
/// rollover (and Feb 29 only in leap years) fall out of the calendar.
pub fn upcoming_dates(today: NaiveDate, window_days: u32) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(window_days.min(FULL_CALENDAR_DAYS) as usize);
    let mut current = today;
    for _ in 0..window_days {
        match current.succ_opt() {
            Some(next) => {
                dates.push(next);
                current = next;
            }
            None => break,
        }
    }
    dates
}

/// Per-record classification result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub is_today: bool,
    pub is_in_upcoming_window: bool,
    pub month_bucket: u32,
    pub sort_key: String,
}

/// Members of one calendar month, ordered by day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup<'a> {
    pub month: u32,
    pub members: Vec<&'a Member>,
}

impl MonthGroup<'_> {
    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }
}

/// The four birthday views for one reference date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayViews<'a> {
    pub today: NaiveDate,
    pub window_days: u32,
    /// Birthdays falling on today's day and month, in roster order
    pub todays: Vec<&'a Member>,
    pub this_month: MonthGroup<'a>,
    pub next_month: MonthGroup<'a>,
    /// Birthdays within the window after today, ordered by `MM-DD`
    pub upcoming: Vec<&'a Member>,
}

/// Classifies birth dates against a fixed reference date and window.
#[derive(Debug, Clone)]
pub struct BirthdayClassifier {
    today: NaiveDate,
    window_days: u32,
    window: HashSet<MonthDay>,
}

impl BirthdayClassifier {
    /// Windows longer than [`FULL_CALENDAR_DAYS`] match the same month/days
    /// as one of exactly that length, so only that many days are walked.
    pub fn new(today: NaiveDate, window_days: u32) -> Self {
        let window = upcoming_dates(today, window_days.min(FULL_CALENDAR_DAYS))
            .into_iter()
            .map(MonthDay::of)
            .collect();
        Self {
            today,
            window_days,
            window,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    pub fn is_today(&self, month_day: MonthDay) -> bool {
        month_day == MonthDay::of(self.today)
    }

    pub fn is_upcoming(&self, month_day: MonthDay) -> bool {
        self.window.contains(&month_day)
    }

    pub fn classify(&self, date: &KnownBirthDate) -> Classification {
        let month_day = date.month_day();
        Classification {
            is_today: self.is_today(month_day),
            is_in_upcoming_window: self.is_upcoming(month_day),
            month_bucket: month_day.month(),
            sort_key: month_day.sort_key(),
        }
    }

    /// Partition `members` into the four views. Members with an unknown
    /// birthday are left out of every view.
    pub fn views<'a>(&self, members: &'a [Member]) -> BirthdayViews<'a> {
        let this_month = self.today.month();
        let following_month = next_month(this_month);

        let mut views = BirthdayViews {
            today: self.today,
            window_days: self.window_days,
            todays: Vec::new(),
            this_month: MonthGroup {
                month: this_month,
                members: Vec::new(),
            },
            next_month: MonthGroup {
                month: following_month,
                members: Vec::new(),
            },
            upcoming: Vec::new(),
        };

        for member in members {
            let Some(date) = member.birth_date.known() else {
                continue;
            };
            let classification = self.classify(date);

            if classification.is_today {
                views.todays.push(member);
            }
            if classification.month_bucket == this_month {
                views.this_month.members.push(member);
            }
            if classification.month_bucket == following_month {
                views.next_month.members.push(member);
            }
            if classification.is_in_upcoming_window {
                views.upcoming.push(member);
            }
        }

        // Stable sorts: equal keys keep roster order
        views.this_month.members.sort_by_key(|m| m.birth_date.month_day());
        views.next_month.members.sort_by_key(|m| m.birth_date.month_day());
        views.upcoming.sort_by_key(|m| m.birth_date.month_day());

        views
    }
}

/// Build the four birthday views for `today`.
pub fn classify(members: &[Member], today: NaiveDate, window_days: u32) -> BirthdayViews<'_> {
    BirthdayClassifier::new(today, window_days).views(members)
}
