use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use ioc_birthdays_core::models::{Member, RosterSortColumn};
use ioc_birthdays_core::utils::{format_optional, truncate};
use ioc_birthdays_core::BirthdayClassifier;

use crate::app::App;
use crate::ui::styles;

const NAME_WIDTH: usize = 32;

/// Render the Roster tab - table with sortable columns plus a detail panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let members = app.sorted_roster();
    let classifier = app.classifier();

    render_table(frame, app, &members, &classifier, chunks[0]);
    render_detail(frame, app.selected_member(), &classifier, chunks[1]);
}

fn sort_indicator(app: &App, column: RosterSortColumn) -> &'static str {
    if app.listing.sort_column == column {
        if app.listing.ascending { " ▲" } else { " ▼" }
    } else {
        ""
    }
}

fn table_title(app: &App, shown: usize) -> String {
    let total = app.roster.len();
    let count = if shown == total {
        total.to_string()
    } else {
        format!("{}/{}", shown, total)
    };
    let mut title = format!(" Roster ({}) - [b]irthday [n]ame [t]ype [e]ntry [g]ames ", count);
    if let Some(caption) = app.roster_caption() {
        title.push_str(&format!("- {} ", caption));
    }
    title
}

fn render_table(
    frame: &mut Frame,
    app: &App,
    members: &[&Member],
    classifier: &BirthdayClassifier,
    area: Rect,
) {
    let block = Block::default()
        .title(table_title(app, members.len()))
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    if members.is_empty() {
        let message = empty_message(&app.listing.search);
        let paragraph = Paragraph::new(Span::styled(message, styles::muted_style())).block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new([
        Cell::from(format!("Name{}", sort_indicator(app, RosterSortColumn::Name))),
        Cell::from(format!("Member Type{}", sort_indicator(app, RosterSortColumn::MemberType))),
        Cell::from(format!("Born{}", sort_indicator(app, RosterSortColumn::Birthday))),
        Cell::from(format!("Entry{}", sort_indicator(app, RosterSortColumn::EntryInIoc))),
        Cell::from(format!("Games{}", sort_indicator(app, RosterSortColumn::GamesParticipated))),
    ])
    .style(styles::title_style())
    .height(1);

    let rows: Vec<Row> = members
        .iter()
        .map(|member| {
            let celebrating = member
                .birth_date
                .known()
                .is_some_and(|date| classifier.classify(date).is_today);
            let style = if celebrating {
                styles::celebrant_style()
            } else {
                styles::list_item_style()
            };

            let row = member.to_listing_row();
            Row::new(vec![
                Cell::from(truncate(&row.name, NAME_WIDTH)),
                Cell::from(row.classification),
                Cell::from(row.birthday),
                Cell::from(row.entry_in_ioc),
                Cell::from(row.games_participated),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(35),
        Constraint::Fill(2),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Fill(1),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(styles::selected_style());

    let mut state = TableState::default();
    state.select(Some(app.roster_selection));

    frame.render_stateful_widget(table, area, &mut state);
}

fn empty_message(search: &str) -> String {
    if search.is_empty() {
        "The roster is empty.".to_string()
    } else {
        format!("No members match \"{}\".", search)
    }
}

fn render_detail(
    frame: &mut Frame,
    selected: Option<&Member>,
    classifier: &BirthdayClassifier,
    area: Rect,
) {
    let block = Block::default()
        .title(" Details ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    let lines = match selected {
        Some(member) => detail_lines(member, classifier),
        None => vec![Line::from(Span::styled(
            "No member selected",
            styles::muted_style(),
        ))],
    };

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, styles::muted_style()),
        Span::raw(value),
    ])
}

fn detail_lines(member: &Member, classifier: &BirthdayClassifier) -> Vec<Line<'static>> {
    let placeholder = "-";
    let record = &member.record;

    let mut lines = vec![
        Line::from(Span::styled(member.name().to_string(), styles::title_style())),
        Line::from(""),
        field("Member Type: ", format_optional(Some(member.classification()), placeholder)),
        field("Birthday:    ", member.birthday_display()),
        field("Entry:       ", format_optional(Some(record.entry_in_ioc.as_str()), placeholder)),
        field("Games:       ", format_optional(Some(record.games_participated.as_str()), placeholder)),
    ];

    match member.birth_date.known() {
        Some(date) => {
            let classification = classifier.classify(date);
            if classification.is_today {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Birthday today!",
                    styles::celebrant_style(),
                )));
            } else if classification.is_in_upcoming_window {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("Birthday in the next {} days", classifier.window_days()),
                    styles::highlight_style(),
                )));
            }
        }
        None => {
            let raw = record.raw_birth_text.trim();
            let message = if raw.is_empty() {
                "No birth date on file".to_string()
            } else {
                format!("Birth date not recognized: \"{}\"", raw)
            };
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(message, styles::error_style())));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Links", styles::highlight_style())));
    lines.push(field(
        "Profile: ",
        format_optional(member.profile_url(), placeholder),
    ));
    lines.push(field(
        "Photo:   ",
        format_optional(member.mugshot_url(), placeholder),
    ));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ioc_birthdays_core::models::MemberRecord;
    use ioc_birthdays_core::BirthDateFormat;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn member(born: &str) -> Member {
        Member::new(
            MemberRecord {
                name: "Nawal El Moutawakel".to_string(),
                classification: "Member".to_string(),
                raw_birth_text: born.to_string(),
                mugshot_url: Some("https://img.olympics.com/nawal.jpg".to_string()),
                entry_in_ioc: "1998".to_string(),
                ..Default::default()
            },
            &BirthDateFormat::default(),
        )
    }

    fn classifier() -> BirthdayClassifier {
        BirthdayClassifier::new(NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(), 15)
    }

    #[test]
    fn test_detail_lines_today() {
        let lines = text(&detail_lines(&member("15-Apr-62"), &classifier()));
        assert_eq!(lines[0], "Nawal El Moutawakel");
        assert!(lines.contains(&"Birthday:    15 Apr".to_string()));
        assert!(lines.contains(&"Birthday today!".to_string()));
        assert!(lines.contains(&"Games:       -".to_string()));
        assert!(lines.contains(&"Profile: -".to_string()));
        assert!(lines.contains(&"Photo:   https://img.olympics.com/nawal.jpg".to_string()));
    }

    #[test]
    fn test_detail_lines_upcoming() {
        let lines = text(&detail_lines(&member("20-Apr-62"), &classifier()));
        assert!(lines.contains(&"Birthday in the next 15 days".to_string()));
    }

    #[test]
    fn test_detail_lines_unknown_birthday() {
        let lines = text(&detail_lines(&member("sometime"), &classifier()));
        assert!(lines.contains(&"Birthday:    —".to_string()));
        assert!(lines.contains(&"Birth date not recognized: \"sometime\"".to_string()));

        let lines = text(&detail_lines(&member(""), &classifier()));
        assert!(lines.contains(&"No birth date on file".to_string()));
    }

    #[test]
    fn test_empty_message_quotes_search_as_typed() {
        assert_eq!(empty_message(""), "The roster is empty.");
        assert_eq!(empty_message("Lewis "), "No members match \"Lewis \".");
        assert_eq!(empty_message("  "), "No members match \"  \".");
    }
}
