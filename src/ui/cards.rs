//! Service card grid rendering.
//!
//! One card per service, laid out in a responsive grid. Each card shows the
//! status icon, name, url, uppercased status badge, and whichever optional
//! fields are present; absent fields are simply not shown.

use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::ServiceStatus;
use crate::ui::common::render_empty_hint;

/// Fixed card height in rows (including borders).
const CARD_HEIGHT: u16 = 7;
/// Minimum usable card width; the grid adds columns as width allows.
const MIN_CARD_WIDTH: u16 = 36;

/// Render the card grid, scrolled so the selected card stays visible.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if app.services.is_empty() {
        render_empty_hint(frame, app, area);
        return;
    }

    let columns = (area.width / MIN_CARD_WIDTH).max(1) as usize;
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let selected_row = app.selected_index / columns;
    let first_row = if selected_row >= visible_rows {
        selected_row + 1 - visible_rows
    } else {
        0
    };

    let row_constraints = vec![Constraint::Length(CARD_HEIGHT); visible_rows];
    let row_areas = Layout::vertical(row_constraints).split(area);
    let column_constraints = vec![Constraint::Fill(1); columns];

    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::horizontal(column_constraints.clone()).split(*row_area);
        for (column, cell) in cells.iter().enumerate() {
            let index = (first_row + row_offset) * columns + column;
            let Some(service) = app.services.get(index) else {
                return;
            };
            render_card(frame, app, service, index == app.selected_index, *cell);
        }
    }
}

fn render_card(frame: &mut Frame, app: &App, service: &ServiceStatus, selected: bool, area: Rect) {
    let status_style = app.theme.status_style(service.status);
    let border_style = if selected {
        app.theme.selected
    } else {
        Style::default().fg(app.theme.border)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", service.status.icon()), status_style),
            Span::styled(
                service.status.badge(),
                status_style.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            service.url.clone(),
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    if let Some(response_time) = service.response_time {
        lines.push(Line::from(vec![
            Span::raw("Response: "),
            Span::styled(
                format!("{}ms", response_time),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    if let Some(ref last_checked) = service.last_checked {
        lines.push(Line::from(Span::styled(
            format!("Checked: {}", format_last_checked(last_checked)),
            Style::default().add_modifier(Modifier::DIM),
        )));
    }

    if let Some(ref message) = service.message {
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().add_modifier(Modifier::DIM),
        )));
    }

    let card = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", service.name))
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(border_style),
    );

    frame.render_widget(card, area);
}

/// Format an ISO-8601 timestamp as a local wall-clock time.
///
/// Unparseable values are shown as-is rather than hidden.
fn format_last_checked(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.with_timezone(&Local).format("%H:%M:%S").to_string(),
        Err(_) => raw.to_string(),
    }
}
