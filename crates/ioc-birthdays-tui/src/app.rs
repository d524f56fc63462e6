//! Application state management for the IOC birthdays TUI.
//!
//! `App` holds the current roster snapshot, the reference date, and all UI
//! state: active tab, roster search and sort, and selection.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::debug;

use ioc_birthdays_core::models::{Member, RosterSortColumn};
use ioc_birthdays_core::{
    classify, full_listing, BirthdayClassifier, BirthdayViews, Config, ListingQuery, Roster,
    RosterStore,
};

// ============================================================================
// Constants
// ============================================================================

/// Maximum length for the roster search query.
const MAX_SEARCH_LENGTH: usize = 50;

/// Number of rows to scroll on page up/down.
pub const PAGE_SCROLL_SIZE: usize = 10;

// ============================================================================
// UI State Types
// ============================================================================

/// Main navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Birthdays,
    Months,
    Roster,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Birthdays, Tab::Months, Tab::Roster];

    /// Get the display title for this tab.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Birthdays => "Birthdays",
            Tab::Months => "Months",
            Tab::Roster => "Roster",
        }
    }

    /// Get the next tab (wrapping around)
    pub fn next(&self) -> Self {
        match self {
            Tab::Birthdays => Tab::Months,
            Tab::Months => Tab::Roster,
            Tab::Roster => Tab::Birthdays,
        }
    }

    /// Get the previous tab (wrapping around)
    pub fn prev(&self) -> Self {
        match self {
            Tab::Birthdays => Tab::Roster,
            Tab::Months => Tab::Birthdays,
            Tab::Roster => Tab::Months,
        }
    }
}

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    Searching,
    ShowingHelp,
    ConfirmingQuit,
    Quitting,
}

// ============================================================================
// Main Application Struct
// ============================================================================

pub struct App {
    pub config: Config,
    store: &'static RosterStore,
    pub roster: Arc<Roster>,

    /// Fixed reference date from `--date`; `None` means the local date
    pub reference_date: Option<NaiveDate>,
    pub window_days: u32,

    // UI State
    pub state: AppState,
    pub current_tab: Tab,
    pub listing: ListingQuery,
    pub roster_selection: usize,

    pub status_message: Option<String>,
}

impl App {
    pub fn new(
        config: Config,
        store: &'static RosterStore,
        reference_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            window_days: config.window_days,
            config,
            store,
            roster: store.snapshot(),
            reference_date,
            state: AppState::Normal,
            current_tab: Tab::Birthdays,
            listing: ListingQuery::default(),
            roster_selection: 0,
            status_message: None,
        }
    }

    /// The date birthdays are measured against.
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn classifier(&self) -> BirthdayClassifier {
        BirthdayClassifier::new(self.today(), self.window_days)
    }

    pub fn birthday_views(&self) -> BirthdayViews<'_> {
        classify(self.roster.members(), self.today(), self.window_days)
    }

    /// Roster filtered by the search query and sorted by the current column.
    pub fn sorted_roster(&self) -> Vec<&Member> {
        full_listing(self.roster.members(), &self.listing)
    }

    pub fn selected_member(&self) -> Option<&Member> {
        self.sorted_roster().get(self.roster_selection).copied()
    }

    pub fn roster_caption(&self) -> Option<&str> {
        self.config.roster_caption.as_deref()
    }

    /// Reload the roster file through the store. A failed reload keeps the
    /// roster already on screen.
    pub fn reload(&mut self) {
        match self.store.refresh() {
            Ok(roster) => {
                debug!(members = roster.len(), "Swapping in reloaded roster");
                self.status_message = Some(if roster.skipped_rows() > 0 {
                    format!(
                        "Loaded {} members ({} rows skipped)",
                        roster.len(),
                        roster.skipped_rows()
                    )
                } else {
                    format!("Loaded {} members", roster.len())
                });
                self.roster = roster;
                self.clamp_selection();
            }
            Err(e) => {
                self.status_message = Some(format!("Could not load roster: {}", e));
            }
        }
    }

    // =========================================================================
    // Roster navigation
    // =========================================================================

    fn roster_len(&self) -> usize {
        self.sorted_roster().len()
    }

    fn clamp_selection(&mut self) {
        let len = self.roster_len();
        if self.roster_selection >= len {
            self.roster_selection = len.saturating_sub(1);
        }
    }

    pub fn select_next(&mut self, step: usize) {
        let len = self.roster_len();
        if len > 0 {
            self.roster_selection = (self.roster_selection + step).min(len - 1);
        }
    }

    pub fn select_prev(&mut self, step: usize) {
        self.roster_selection = self.roster_selection.saturating_sub(step);
    }

    pub fn select_first(&mut self) {
        self.roster_selection = 0;
    }

    pub fn select_last(&mut self) {
        self.roster_selection = self.roster_len().saturating_sub(1);
    }

    /// Toggle roster sort column - if already sorting by this column, flip
    /// direction; otherwise switch to it ascending. Resets selection to 0.
    pub fn toggle_roster_sort(&mut self, column: RosterSortColumn) {
        self.listing.toggle_sort(column);
        self.roster_selection = 0;
    }

    pub fn cycle_roster_sort(&mut self) {
        let next = self.listing.sort_column.next();
        self.toggle_roster_sort(next);
    }

    // =========================================================================
    // Search
    // =========================================================================

    pub fn start_search(&mut self) {
        self.current_tab = Tab::Roster;
        self.state = AppState::Searching;
    }

    pub fn push_search_char(&mut self, c: char) {
        if can_add_search_char(self.listing.search.chars().count(), c) {
            self.listing.search.push(c);
            self.roster_selection = 0;
        }
    }

    pub fn pop_search_char(&mut self) {
        if self.listing.search.pop().is_some() {
            self.roster_selection = 0;
        }
    }

    pub fn clear_search(&mut self) {
        self.listing.search.clear();
        self.roster_selection = 0;
    }
}

// ============================================================================
// Input validation helpers
// ============================================================================

/// Check if a character is valid for input (no control characters)
fn is_valid_input_char(c: char) -> bool {
    !c.is_control()
}

/// Check if a search character should be accepted
pub fn can_add_search_char(current_len: usize, c: char) -> bool {
    current_len < MAX_SEARCH_LENGTH && is_valid_input_char(c)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use ioc_birthdays_core::models::MemberRecord;
    use ioc_birthdays_core::{BirthDateFormat, RosterSource};

    fn member(name: &str, born: &str) -> Member {
        Member::new(
            MemberRecord {
                name: name.to_string(),
                classification: "Member".to_string(),
                raw_birth_text: born.to_string(),
                ..Default::default()
            },
            &BirthDateFormat::default(),
        )
    }

    fn test_app(members: Vec<Member>) -> App {
        let store = Box::leak(Box::new(RosterStore::with_roster(
            RosterSource {
                path: PathBuf::from("does-not-exist.csv"),
                format: BirthDateFormat::default(),
            },
            Roster::from_members(members),
        )));
        App::new(Config::default(), store, NaiveDate::from_ymd_opt(2025, 7, 20))
    }

    // -------------------------------------------------------------------------
    // Tab Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_tab_next() {
        assert_eq!(Tab::Birthdays.next(), Tab::Months);
        assert_eq!(Tab::Months.next(), Tab::Roster);
        assert_eq!(Tab::Roster.next(), Tab::Birthdays); // Wraps around
    }

    #[test]
    fn test_tab_prev() {
        assert_eq!(Tab::Birthdays.prev(), Tab::Roster); // Wraps around
        assert_eq!(Tab::Roster.prev(), Tab::Months);
        assert_eq!(Tab::Months.prev(), Tab::Birthdays);
    }

    // -------------------------------------------------------------------------
    // App Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_reference_date_drives_views() {
        let app = test_app(vec![
            member("Today", "20-Jul-60"),
            member("Soon", "25-Jul-70"),
            member("Later", "10-Sep-80"),
        ]);
        assert_eq!(app.today(), NaiveDate::from_ymd_opt(2025, 7, 20).unwrap());

        let views = app.birthday_views();
        assert_eq!(views.todays.len(), 1);
        assert_eq!(views.upcoming.len(), 1);
        assert_eq!(views.upcoming[0].name(), "Soon");
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = test_app(vec![
            member("A", "01-Jan-60"),
            member("B", "02-Jan-60"),
            member("C", "03-Jan-60"),
        ]);
        app.select_next(PAGE_SCROLL_SIZE);
        assert_eq!(app.roster_selection, 2);
        app.select_prev(1);
        assert_eq!(app.roster_selection, 1);
        app.select_prev(PAGE_SCROLL_SIZE);
        assert_eq!(app.roster_selection, 0);
        app.select_last();
        assert_eq!(app.selected_member().map(Member::name), Some("C"));
    }

    #[test]
    fn test_search_filters_and_resets_selection() {
        let mut app = test_app(vec![member("Thomas Bach", "29-Dec-53"), member("Anne Smith", "")]);
        app.select_last();
        for c in "bach".chars() {
            app.push_search_char(c);
        }
        assert_eq!(app.roster_selection, 0);
        assert_eq!(app.sorted_roster().len(), 1);

        app.clear_search();
        assert_eq!(app.sorted_roster().len(), 2);
    }

    #[test]
    fn test_toggle_roster_sort() {
        let mut app = test_app(vec![member("B", "01-Jan-60"), member("A", "02-Jan-60")]);
        app.toggle_roster_sort(RosterSortColumn::Name);
        assert_eq!(app.sorted_roster()[0].name(), "A");
        app.toggle_roster_sort(RosterSortColumn::Name);
        assert!(!app.listing.ascending);
        assert_eq!(app.sorted_roster()[0].name(), "B");
    }

    #[test]
    fn test_failed_reload_keeps_roster() {
        let mut app = test_app(vec![member("A", "01-Jan-60")]);
        app.reload();
        assert_eq!(app.roster.len(), 1);
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Could not load roster")));
    }

    // -------------------------------------------------------------------------
    // Input Validation Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_can_add_search_char() {
        assert!(can_add_search_char(0, 'a'));
        assert!(can_add_search_char(49, 'é'));
        assert!(!can_add_search_char(50, 'a'));
        assert!(!can_add_search_char(0, '\x00'));
        assert!(!can_add_search_char(0, '\n'));
    }
}
