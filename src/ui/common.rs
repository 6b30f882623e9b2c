//! Common UI components shared across the dashboard.
//!
//! This module contains the header bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the header bar with the overall health overview.
///
/// Displays: status indicator, service counts by health, average response
/// time, and a refresh spinner while a cycle is in flight.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    if app.services.is_empty() && app.last_updated.is_none() {
        let line = Line::from(vec![
            Span::styled(
                " SERVICE HEALTH ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("| Loading..."),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let stats = app.stats();
    let unknown = stats.total - stats.healthy - stats.unhealthy;
    let overall = app.overall_status();

    let mut spans = vec![
        Span::styled(format!(" {} ", overall.icon()), app.theme.status_style(overall)),
        Span::styled(
            "SERVICE HEALTH ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled(
            format!("{}", stats.healthy),
            Style::default().fg(app.theme.healthy),
        ),
        Span::raw(" healthy "),
        if stats.unhealthy > 0 {
            Span::styled(
                format!("{}", stats.unhealthy),
                Style::default().fg(app.theme.unhealthy).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("0", Style::default().add_modifier(Modifier::DIM))
        },
        Span::raw(" unhealthy "),
        if unknown > 0 {
            Span::styled(
                format!("{}", unknown),
                Style::default().fg(app.theme.unknown),
            )
        } else {
            Span::styled("0", Style::default().add_modifier(Modifier::DIM))
        },
        Span::raw(" unknown │ "),
        Span::styled(
            format!("{}", stats.total),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" services │ "),
        Span::raw(format!("avg {}ms", stats.avg_response_time)),
    ];

    if app.refreshing {
        spans.push(Span::styled(
            " │ ⟳ refreshing",
            Style::default().fg(app.theme.highlight),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the status bar at the bottom.
///
/// Shows: data source, time since last update, available controls.
/// Also displays temporary status messages and errors.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let status = if let Some(last_updated) = app.last_updated {
        let controls = "r:refresh c:configure e:export ?:help q:quit";
        match app.load_error {
            Some(ref err) => format!(
                " {} | Error: {} | {}",
                app.source_description(),
                err,
                controls
            ),
            None => format!(
                " {} | Updated {:.1}s ago | {}",
                app.source_description(),
                last_updated.elapsed().as_secs_f64(),
                controls
            ),
        }
    } else {
        format!(" {} | Loading... | q:quit", app.source_description())
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ↑/↓ j/k     Move card selection"),
        Line::from("  Home/End    Jump to first/last"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Dashboard",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  r         Refresh now"),
        Line::from("  c         Configure backend URL"),
        Line::from("  e         Export snapshot to JSON"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ?         Toggle help"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 42u16.min(area.width.saturating_sub(4));
    let help_height = 20u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

/// Render the empty-state hint when no services are available.
pub fn render_empty_hint(frame: &mut Frame, app: &App, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No services to display.",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Configure your backend URL to get started (press c).",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ])
    .alignment(ratatui::layout::Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border)),
    );
    frame.render_widget(msg, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Status;

    #[test]
    fn test_status_icons_are_distinct() {
        let icons = [
            Status::Healthy.icon(),
            Status::Unhealthy.icon(),
            Status::Checking.icon(),
            Status::Unknown.icon(),
        ];
        for (i, a) in icons.iter().enumerate() {
            for b in icons.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
