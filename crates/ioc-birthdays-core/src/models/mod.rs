//! Data models for the IOC member roster.
//!
//! - `MemberRecord`: one CSV row as written in the file
//! - `Member`: a record paired with its normalized `BirthDate`
//! - `MonthDay`, `KnownBirthDate`: year-agnostic calendar positions
//! - `BirthdayCard`, `ListingRow`: shapes handed to the presentation layer

pub mod birth_date;
pub mod member;
pub mod view;

pub use birth_date::{month_abbreviation, month_name, BirthDate, KnownBirthDate, MonthDay, UNKNOWN_BIRTHDAY};
pub use member::{Member, MemberRecord, RosterSortColumn};
pub use view::{BirthdayCard, ListingRow};
