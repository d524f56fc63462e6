use serde::{Deserialize, Serialize};

use crate::models::view::{BirthdayCard, ListingRow};
use crate::models::BirthDate;
use crate::normalize::{normalize, BirthDateFormat};

/// One row of the roster CSV, as written in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub name: String,
    #[serde(default)]
    pub classification: String,
    #[serde(rename = "born", default)]
    pub raw_birth_text: String,
    // Empty cells come through as None
    #[serde(default)]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub mugshot_url: Option<String>,
    #[serde(default)]
    pub entry_in_ioc: String,
    #[serde(default)]
    pub games_participated: String,
}

/// A roster member with its birth date already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub record: MemberRecord,
    pub birth_date: BirthDate,
}

impl Member {
    pub fn new(record: MemberRecord, format: &BirthDateFormat) -> Self {
        let birth_date = normalize(&record.raw_birth_text, format);
        Self { record, birth_date }
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn classification(&self) -> &str {
        &self.record.classification
    }

    pub fn profile_url(&self) -> Option<&str> {
        self.record.profile_url.as_deref().filter(|u| !u.is_empty())
    }

    pub fn mugshot_url(&self) -> Option<&str> {
        self.record.mugshot_url.as_deref().filter(|u| !u.is_empty())
    }

    /// `DD Mon`, or the unknown-birthday placeholder.
    pub fn birthday_display(&self) -> String {
        self.birth_date.display_or_placeholder()
    }

    pub fn to_card(&self) -> BirthdayCard {
        BirthdayCard {
            classification: self.record.classification.clone(),
            name: self.record.name.clone(),
            profile_url: self.profile_url().map(str::to_string),
            mugshot_url: self.mugshot_url().map(str::to_string),
            birthday: self.birthday_display(),
        }
    }

    pub fn to_listing_row(&self) -> ListingRow {
        ListingRow {
            name: self.record.name.clone(),
            classification: self.record.classification.clone(),
            birthday: self.birthday_display(),
            entry_in_ioc: self.record.entry_in_ioc.clone(),
            games_participated: self.record.games_participated.clone(),
            profile_url: self.profile_url().map(str::to_string),
        }
    }
}

// Sorting options for the full roster listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RosterSortColumn {
    #[default]
    Birthday,
    Name,
    MemberType,
    EntryInIoc,
    GamesParticipated,
}

impl RosterSortColumn {
    pub fn title(&self) -> &'static str {
        match self {
            RosterSortColumn::Birthday => "Birthday",
            RosterSortColumn::Name => "Name",
            RosterSortColumn::MemberType => "Member Type",
            RosterSortColumn::EntryInIoc => "Entry in IOC",
            RosterSortColumn::GamesParticipated => "Games Participated",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            RosterSortColumn::Birthday => RosterSortColumn::Name,
            RosterSortColumn::Name => RosterSortColumn::MemberType,
            RosterSortColumn::MemberType => RosterSortColumn::EntryInIoc,
            RosterSortColumn::EntryInIoc => RosterSortColumn::GamesParticipated,
            RosterSortColumn::GamesParticipated => RosterSortColumn::Birthday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNKNOWN_BIRTHDAY;

    fn record(name: &str, born: &str) -> MemberRecord {
        MemberRecord {
            name: name.to_string(),
            classification: "Member".to_string(),
            raw_birth_text: born.to_string(),
            profile_url: Some("https://olympics.com/ioc/members/x".to_string()),
            mugshot_url: Some(String::new()),
            entry_in_ioc: "1999".to_string(),
            games_participated: "3".to_string(),
        }
    }

    #[test]
    fn test_member_normalizes_birth_date() {
        let member = Member::new(record("A", "20-Jul-60"), &BirthDateFormat::default());
        assert!(member.birth_date.is_valid());
        assert_eq!(member.birthday_display(), "20 Jul");
    }

    #[test]
    fn test_member_unknown_birth_date_uses_placeholder() {
        let member = Member::new(record("B", "not-a-date"), &BirthDateFormat::default());
        assert!(!member.birth_date.is_valid());
        assert_eq!(member.to_listing_row().birthday, UNKNOWN_BIRTHDAY);
        assert_eq!(member.to_card().birthday, UNKNOWN_BIRTHDAY);
    }

    #[test]
    fn test_empty_urls_are_absent() {
        let member = Member::new(record("C", "01-Jan-50"), &BirthDateFormat::default());
        assert_eq!(member.mugshot_url(), None);
        assert!(member.profile_url().is_some());

        let card = member.to_card();
        assert_eq!(card.mugshot_url, None);
        assert_eq!(card.name, "C");
        assert_eq!(card.classification, "Member");
    }

    #[test]
    fn test_listing_row_shape() {
        let row = Member::new(record("D", "05-Aug-90"), &BirthDateFormat::default()).to_listing_row();
        assert_eq!(row.name, "D");
        assert_eq!(row.birthday, "05 Aug");
        assert_eq!(row.entry_in_ioc, "1999");
        assert_eq!(row.games_participated, "3");
    }

    #[test]
    fn test_sort_column_next_wraps() {
        let mut column = RosterSortColumn::default();
        assert_eq!(column, RosterSortColumn::Birthday);
        for _ in 0..5 {
            column = column.next();
        }
        assert_eq!(column, RosterSortColumn::Birthday);
        assert_eq!(RosterSortColumn::Name.next(), RosterSortColumn::MemberType);
    }
}
