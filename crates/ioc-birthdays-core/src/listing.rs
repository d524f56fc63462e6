//! The full roster listing: name search plus column sort.
//!
//! Filtering and sorting are independent; [`full_listing`] applies both, but
//! each can be used alone.

use std::cmp::Ordering;

use crate::models::{Member, RosterSortColumn};
use crate::utils::{cmp_ignore_case, contains_ignore_case};

/// Search text and sort settings for the full listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub search: String,
    pub sort_column: RosterSortColumn,
    pub ascending: bool,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_column: RosterSortColumn::Birthday,
            ascending: true,
        }
    }
}

impl ListingQuery {
    pub fn with_search(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Self::default()
        }
    }

    /// If already sorting by this column, flip direction;
    /// otherwise switch to this column ascending.
    pub fn toggle_sort(&mut self, column: RosterSortColumn) {
        if self.sort_column == column {
            self.ascending = !self.ascending;
        } else {
            self.sort_column = column;
            self.ascending = true;
        }
    }
}

/// Case-insensitive substring match on the member name. The query is used
/// as typed, surrounding spaces included.
pub fn matches_name(member: &Member, query: &str) -> bool {
    contains_ignore_case(member.name(), &query.to_lowercase())
}

/// Keep members whose name contains `query`. An empty query keeps everyone.
pub fn filter_by_name<'a>(mut members: Vec<&'a Member>, query: &str) -> Vec<&'a Member> {
    if !query.is_empty() {
        members.retain(|m| matches_name(m, query));
    }
    members
}

/// Year-agnostic birthday order. Unknown birthdays go after every known one.
pub fn cmp_birthday(a: &Member, b: &Member) -> Ordering {
    match (a.birth_date.month_day(), b.birth_date.month_day()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Count-like cells ("1996", "12") compare by value. Cells that don't parse
/// as a whole number go after those that do and compare as text.
pub fn cmp_numeric_text(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<u64>(), b.trim().parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => cmp_ignore_case(a, b),
    }
}

/// Stable sort; ties keep their current order.
pub fn sort_members(members: &mut [&Member], column: RosterSortColumn, ascending: bool) {
    members.sort_by(|a, b| {
        let cmp = match column {
            RosterSortColumn::Birthday => cmp_birthday(a, b),
            RosterSortColumn::Name => cmp_ignore_case(a.name(), b.name()),
            RosterSortColumn::MemberType => {
                cmp_ignore_case(a.classification(), b.classification())
            }
            RosterSortColumn::EntryInIoc => {
                cmp_numeric_text(&a.record.entry_in_ioc, &b.record.entry_in_ioc)
            }
            RosterSortColumn::GamesParticipated => {
                cmp_numeric_text(&a.record.games_participated, &b.record.games_participated)
            }
        };

        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// The roster filtered by `query.search` and sorted by its column.
pub fn full_listing<'a>(members: &'a [Member], query: &ListingQuery) -> Vec<&'a Member> {
    let mut listing = filter_by_name(members.iter().collect(), &query.search);
    sort_members(&mut listing, query.sort_column, query.ascending);
    listing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MemberRecord;
    use crate::normalize::BirthDateFormat;

    fn member(name: &str, born: &str) -> Member {
        let record = MemberRecord {
            name: name.to_string(),
            raw_birth_text: born.to_string(),
            ..Default::default()
        };
        Member::new(record, &BirthDateFormat::default())
    }

    fn names(members: &[&Member]) -> Vec<String> {
        members.iter().map(|m| m.name().to_string()).collect()
    }

    fn sample() -> Vec<Member> {
        vec![
            member("Zeta Ortiz", "15-Mar-70"),
            member("Nobody Known", "not-a-date"),
            member("Anna Bach", "01-Jan-99"),
            member("Carl Lewis", "20-Jul-60"),
            member("Bea Adams", "01-Jan-50"),
        ]
    }

    // -------------------------------------------------------------------------
    // Birthday Order
    // -------------------------------------------------------------------------

    #[test]
    fn test_birthday_sort_ignores_year_and_is_stable() {
        let roster = sample();
        let listing = full_listing(&roster, &ListingQuery::default());
        assert_eq!(
            names(&listing),
            vec!["Anna Bach", "Bea Adams", "Zeta Ortiz", "Carl Lewis", "Nobody Known"]
        );
    }

    #[test]
    fn test_unknown_birthdays_tie_break_by_input_order() {
        let roster = vec![
            member("u1", ""),
            member("k", "02-Feb-80"),
            member("u2", "garbage"),
        ];
        let listing = full_listing(&roster, &ListingQuery::default());
        assert_eq!(names(&listing), vec!["k", "u1", "u2"]);
    }

    #[test]
    fn test_birthday_sort_descending() {
        let roster = sample();
        let mut query = ListingQuery::default();
        query.toggle_sort(RosterSortColumn::Birthday);
        assert!(!query.ascending);

        let listing = full_listing(&roster, &query);
        assert_eq!(listing.first().map(|m| m.name()), Some("Nobody Known"));
        assert_eq!(listing.get(1).map(|m| m.name()), Some("Carl Lewis"));
    }

    // -------------------------------------------------------------------------
    // Column Sort
    // -------------------------------------------------------------------------

    #[test]
    fn test_toggle_sort_new_column_resets_ascending() {
        let mut query = ListingQuery::default();
        query.toggle_sort(RosterSortColumn::Birthday);
        assert!(!query.ascending);
        query.toggle_sort(RosterSortColumn::Name);
        assert_eq!(query.sort_column, RosterSortColumn::Name);
        assert!(query.ascending);
    }

    #[test]
    fn test_name_sort_case_insensitive() {
        let roster = vec![member("bob", ""), member("Alice", ""), member("carol", "")];
        let mut query = ListingQuery::default();
        query.toggle_sort(RosterSortColumn::Name);
        assert_eq!(names(&full_listing(&roster, &query)), vec!["Alice", "bob", "carol"]);
    }

    #[test]
    fn test_entry_sort() {
        let mut roster = vec![member("a", ""), member("b", ""), member("c", "")];
        roster[0].record.entry_in_ioc = "2012".to_string();
        roster[1].record.entry_in_ioc = "1996".to_string();
        roster[2].record.entry_in_ioc = "2002".to_string();

        let mut listing: Vec<&Member> = roster.iter().collect();
        sort_members(&mut listing, RosterSortColumn::EntryInIoc, true);
        assert_eq!(names(&listing), vec!["b", "c", "a"]);
        sort_members(&mut listing, RosterSortColumn::EntryInIoc, false);
        assert_eq!(names(&listing), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_games_sort_by_value() {
        let mut roster = vec![
            member("five", ""),
            member("twelve", ""),
            member("two", ""),
            member("blank", ""),
        ];
        roster[0].record.games_participated = "5".to_string();
        roster[1].record.games_participated = "12".to_string();
        roster[2].record.games_participated = "2".to_string();

        let mut listing: Vec<&Member> = roster.iter().collect();
        sort_members(&mut listing, RosterSortColumn::GamesParticipated, true);
        assert_eq!(names(&listing), vec!["two", "five", "twelve", "blank"]);
        sort_members(&mut listing, RosterSortColumn::GamesParticipated, false);
        assert_eq!(names(&listing), vec!["blank", "twelve", "five", "two"]);
    }

    #[test]
    fn test_cmp_numeric_text() {
        assert_eq!(cmp_numeric_text("9", "10"), Ordering::Less);
        assert_eq!(cmp_numeric_text(" 7 ", "7"), Ordering::Equal);
        assert_eq!(cmp_numeric_text("10", "1a"), Ordering::Less);
        assert_eq!(cmp_numeric_text("1a", "9"), Ordering::Greater);
        assert_eq!(cmp_numeric_text("abc", "ABD"), Ordering::Less);
    }

    // -------------------------------------------------------------------------
    // Name Search
    // -------------------------------------------------------------------------

    #[test]
    fn test_search_case_insensitive_substring() {
        let roster = sample();
        let listing = full_listing(&roster, &ListingQuery::with_search("BACH"));
        assert_eq!(names(&listing), vec!["Anna Bach"]);

        let listing = full_listing(&roster, &ListingQuery::with_search("a"));
        assert_eq!(listing.len(), 4);
    }

    #[test]
    fn test_empty_search_returns_everyone() {
        let roster = sample();
        assert_eq!(full_listing(&roster, &ListingQuery::with_search("")).len(), roster.len());
    }

    #[test]
    fn test_search_uses_query_as_typed() {
        let roster = sample();
        assert!(full_listing(&roster, &ListingQuery::with_search("Lewis ")).is_empty());
        assert!(full_listing(&roster, &ListingQuery::with_search("   ")).is_empty());
        assert_eq!(
            names(&full_listing(&roster, &ListingQuery::with_search("l L"))),
            vec!["Carl Lewis"]
        );
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let roster = sample();
        assert!(full_listing(&roster, &ListingQuery::with_search("xyz")).is_empty());
    }

    #[test]
    fn test_filter_and_sort_commute() {
        let roster = sample();

        let mut sort_then_filter: Vec<&Member> = roster.iter().collect();
        sort_members(&mut sort_then_filter, RosterSortColumn::Birthday, true);
        let sort_then_filter = filter_by_name(sort_then_filter, "a");

        let filter_then_sort = full_listing(&roster, &ListingQuery::with_search("a"));
        assert_eq!(names(&sort_then_filter), names(&filter_then_sort));
    }

    #[test]
    fn test_matches_name() {
        let m = member("Carl Lewis", "");
        assert!(matches_name(&m, "LEW"));
        assert!(matches_name(&m, ""));
        assert!(!matches_name(&m, "bolt"));
        assert!(!matches_name(&m, " Carl"));
    }
}
