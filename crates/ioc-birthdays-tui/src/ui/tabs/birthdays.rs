//! Birthdays and Months tabs: card lists of members grouped by when their
//! birthday falls.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use ioc_birthdays_core::models::{BirthdayCard, Member};
use ioc_birthdays_core::MonthGroup;

use crate::app::App;
use crate::ui::styles;

/// Render the Birthdays tab - today on the left, the upcoming window on the right
pub fn render_birthdays(frame: &mut Frame, app: &App, area: Rect) {
    let views = app.birthday_views();
    let chunks = split_columns(area);

    let today_title = format!(
        " Today - {} ({}) ",
        views.today.format("%d %b"),
        views.todays.len()
    );
    let today_lines = card_list_lines(
        &views.todays,
        "No IOC member has a birthday today.",
        true,
    );
    render_panel(frame, chunks[0], today_title, today_lines);

    let upcoming_title = format!(
        " Next {} days ({}) ",
        views.window_days,
        views.upcoming.len()
    );
    let empty = format!(
        "No IOC member birthdays in the next {} days.",
        views.window_days
    );
    let upcoming_lines = card_list_lines(&views.upcoming, &empty, false);
    render_panel(frame, chunks[1], upcoming_title, upcoming_lines);
}

/// Render the Months tab - this month and next month side by side
pub fn render_months(frame: &mut Frame, app: &App, area: Rect) {
    let views = app.birthday_views();
    let chunks = split_columns(area);

    for (chunk, (label, group)) in chunks.iter().zip([
        ("This month", &views.this_month),
        ("Next month", &views.next_month),
    ]) {
        let title = format!(
            " {} - {} ({}) ",
            label,
            group.month_name(),
            group.members.len()
        );
        render_panel(frame, *chunk, title, month_lines(group));
    }
}

fn split_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
}

fn render_panel(frame: &mut Frame, area: Rect, title: String, lines: Vec<Line<'static>>) {
    let block = Block::default()
        .title(title)
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// One card per member, separated by blank lines.
fn card_list_lines(members: &[&Member], empty_message: &str, celebrating: bool) -> Vec<Line<'static>> {
    if members.is_empty() {
        return vec![Line::from(Span::styled(
            empty_message.to_string(),
            styles::muted_style(),
        ))];
    }

    let mut lines = Vec::new();
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(card_lines(&member.to_card(), celebrating));
    }
    lines
}

fn card_lines(card: &BirthdayCard, celebrating: bool) -> Vec<Line<'static>> {
    let name_style = if celebrating {
        styles::celebrant_style()
    } else {
        styles::title_style()
    };

    let mut lines = vec![
        Line::from(Span::styled(card.name.clone(), name_style)),
        field_line("Member Type: ", card.classification.clone()),
        field_line("Birthday:    ", card.birthday.clone()),
    ];
    if let Some(ref url) = card.profile_url {
        lines.push(field_line("Profile:     ", url.clone()));
    }
    if let Some(ref url) = card.mugshot_url {
        lines.push(field_line("Photo:       ", url.clone()));
    }
    lines
}

fn field_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, styles::muted_style()),
        Span::raw(value),
    ])
}

/// Compact one-line-per-member listing for a calendar month.
fn month_lines(group: &MonthGroup<'_>) -> Vec<Line<'static>> {
    if group.members.is_empty() {
        return vec![Line::from(Span::styled(
            format!("No IOC member birthdays in {}.", group.month_name()),
            styles::muted_style(),
        ))];
    }

    group
        .members
        .iter()
        .map(|member| {
            Line::from(vec![
                Span::styled(format!("{:<8}", member.birthday_display()), styles::highlight_style()),
                Span::styled(member.name().to_string(), styles::list_item_style()),
                Span::styled(format!("  {}", member.classification()), styles::muted_style()),
            ])
        })
        .collect()
}
