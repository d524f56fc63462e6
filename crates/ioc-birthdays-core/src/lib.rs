//! Core library for ioc-birthdays.
//!
//! Loads the IOC member roster from CSV, normalizes each member's `DD-Mon-YY`
//! birth date, and sorts members into birthday views relative to a reference
//! date:
//!
//! - today's birthdays (day and month match, any year)
//! - this month and next month
//! - an upcoming window of N days after today (15 by default)
//!
//! plus a searchable, sortable full listing. Nothing here renders anything;
//! the views are plain data for a presentation layer.

pub mod classify;
pub mod config;
pub mod error;
pub mod listing;
pub mod models;
pub mod normalize;
pub mod report;
pub mod roster;
pub mod store;
pub mod utils;

pub use classify::{classify, BirthdayClassifier, BirthdayViews, Classification, MonthGroup, DEFAULT_WINDOW_DAYS};
pub use config::Config;
pub use error::RosterError;
pub use listing::{full_listing, ListingQuery};
pub use normalize::{normalize, BirthDateFormat};
pub use report::BirthdayReport;
pub use roster::Roster;
pub use store::{RosterSource, RosterStore};
