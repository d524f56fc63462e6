//! Serializable snapshot of every view, for `--dump` style output.

use serde::Serialize;

use crate::classify::{BirthdayViews, MonthGroup};
use crate::models::{BirthdayCard, ListingRow, Member};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthReport {
    pub month: u32,
    pub month_name: String,
    pub members: Vec<BirthdayCard>,
}

impl From<&MonthGroup<'_>> for MonthReport {
    fn from(group: &MonthGroup<'_>) -> Self {
        Self {
            month: group.month,
            month_name: group.month_name().to_string(),
            members: cards(&group.members),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthdayReport {
    /// Reference date, `YYYY-MM-DD`
    pub today: String,
    pub window_days: u32,
    pub today_birthdays: Vec<BirthdayCard>,
    pub upcoming: Vec<BirthdayCard>,
    pub this_month: MonthReport,
    pub next_month: MonthReport,
    pub roster: Vec<ListingRow>,
}

impl BirthdayReport {
    pub fn new(views: &BirthdayViews<'_>, listing: &[&Member]) -> Self {
        Self {
            today: views.today.format("%Y-%m-%d").to_string(),
            window_days: views.window_days,
            today_birthdays: cards(&views.todays),
            upcoming: cards(&views.upcoming),
            this_month: MonthReport::from(&views.this_month),
            next_month: MonthReport::from(&views.next_month),
            roster: listing.iter().map(|m| m.to_listing_row()).collect(),
        }
    }
}

fn cards(members: &[&Member]) -> Vec<BirthdayCard> {
    members.iter().map(|m| m.to_card()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::listing::{full_listing, ListingQuery};
    use crate::normalize::BirthDateFormat;
    use crate::roster::Roster;
    use chrono::NaiveDate;

    #[test]
    fn test_report_from_views() {
        let csv = "name,classification,born,profile_url\n\
                   A,Member,20-Jul-60,https://olympics.com/a\n\
                   B,Honorary Member,25-Jul-70,\n\
                   C,Member,05-Aug-90,\n\
                   D,Member,not-a-date,\n";
        let roster = Roster::from_reader(csv.as_bytes(), &BirthDateFormat::default()).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 7, 20).unwrap();

        let views = classify(roster.members(), today, 15);
        let listing = full_listing(roster.members(), &ListingQuery::default());
        let report = BirthdayReport::new(&views, &listing);

        assert_eq!(report.today, "2025-07-20");
        assert_eq!(report.window_days, 15);
        assert_eq!(report.today_birthdays.len(), 1);
        assert_eq!(report.today_birthdays[0].profile_url.as_deref(), Some("https://olympics.com/a"));
        assert_eq!(report.upcoming[0].name, "B");
        assert_eq!(report.this_month.month_name, "July");
        assert_eq!(report.next_month.members[0].birthday, "05 Aug");
        assert_eq!(report.roster.len(), 4);
        assert_eq!(report.roster[3].name, "D");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["next_month"]["month"], 8);
        assert_eq!(json["roster"][3]["birthday"], "—");
    }
}
