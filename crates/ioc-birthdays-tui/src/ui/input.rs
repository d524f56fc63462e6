//! Keyboard input handling for the TUI.
//!
//! Translates key events into application state changes.

use crossterm::event::{KeyCode, KeyEvent};

use ioc_birthdays_core::models::RosterSortColumn;

use crate::app::{App, AppState, Tab, PAGE_SCROLL_SIZE};

/// Handle keyboard input. Returns true if the app should quit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    match app.state {
        AppState::ShowingHelp => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.state = AppState::Normal;
            }
            false
        }
        AppState::ConfirmingQuit => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
                true
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
                false
            }
            _ => false,
        },
        AppState::Searching => {
            handle_search_input(app, key);
            false
        }
        AppState::Quitting => true,
        AppState::Normal => {
            handle_normal_input(app, key);
            false
        }
    }
}

fn handle_normal_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.state = AppState::ConfirmingQuit,
        KeyCode::Char('?') => app.state = AppState::ShowingHelp,
        KeyCode::Char('1') => app.current_tab = Tab::Birthdays,
        KeyCode::Char('2') => app.current_tab = Tab::Months,
        KeyCode::Char('3') => app.current_tab = Tab::Roster,
        KeyCode::Left | KeyCode::BackTab => app.current_tab = app.current_tab.prev(),
        KeyCode::Right | KeyCode::Tab => app.current_tab = app.current_tab.next(),
        KeyCode::Char('u') => app.reload(),
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Esc => {
            app.clear_search();
            app.status_message = None;
        }
        _ => {
            if app.current_tab == Tab::Roster {
                handle_roster_input(app, key);
            }
        }
    }
}

fn handle_search_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.state = AppState::Normal;
            app.clear_search();
        }
        KeyCode::Enter => {
            // Keep search query active
            app.state = AppState::Normal;
        }
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(c) => app.push_search_char(c),
        _ => {}
    }
}

fn handle_roster_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(1),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(1),
        KeyCode::PageUp => app.select_prev(PAGE_SCROLL_SIZE),
        KeyCode::PageDown => app.select_next(PAGE_SCROLL_SIZE),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),
        KeyCode::Char('b') => app.toggle_roster_sort(RosterSortColumn::Birthday),
        KeyCode::Char('n') => app.toggle_roster_sort(RosterSortColumn::Name),
        KeyCode::Char('t') => app.toggle_roster_sort(RosterSortColumn::MemberType),
        KeyCode::Char('e') => app.toggle_roster_sort(RosterSortColumn::EntryInIoc),
        KeyCode::Char('g') => app.toggle_roster_sort(RosterSortColumn::GamesParticipated),
        KeyCode::Char('s') => app.cycle_roster_sort(),
        _ => {}
    }
}
