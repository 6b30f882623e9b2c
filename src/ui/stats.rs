//! Stats panel rendering.
//!
//! Four tiles derived from the current service list: total count, healthy
//! count, unhealthy count, and average response time.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the stats panel as a row of four tiles.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let stats = app.stats();

    let chunks = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .split(area);

    tile(
        frame,
        app,
        chunks[0],
        "Total Services",
        stats.total.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    );
    tile(
        frame,
        app,
        chunks[1],
        "Healthy",
        stats.healthy.to_string(),
        Style::default().fg(app.theme.healthy).add_modifier(Modifier::BOLD),
    );
    tile(
        frame,
        app,
        chunks[2],
        "Unhealthy",
        stats.unhealthy.to_string(),
        Style::default().fg(app.theme.unhealthy).add_modifier(Modifier::BOLD),
    );
    tile(
        frame,
        app,
        chunks[3],
        "Avg Response",
        format!("{}ms", stats.avg_response_time),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    );
}

fn tile(frame: &mut Frame, app: &App, area: Rect, label: &str, value: String, value_style: Style) {
    let lines = vec![
        Line::from(Span::styled(
            label.to_string(),
            Style::default().add_modifier(Modifier::DIM),
        )),
        Line::from(Span::styled(value, value_style)),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border)),
    );

    frame.render_widget(paragraph, area);
}
