//! Settings overlay rendering.
//!
//! A centered modal holding the pending backend-URL input. The pending
//! value only becomes the committed configuration on Enter.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

/// Minimum width required for the overlay to render properly.
const MIN_OVERLAY_WIDTH: u16 = 40;

/// Render the backend configuration modal.
pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    if area.width < MIN_OVERLAY_WIDTH || area.height < 10 {
        return;
    }

    let overlay_width = (area.width * 3 / 4).clamp(MIN_OVERLAY_WIDTH, 80);
    let overlay_height = 9;
    let x = area.x + (area.width.saturating_sub(overlay_width)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_height)) / 2;
    let overlay_area = Rect::new(x, y, overlay_width, overlay_height);

    frame.render_widget(Clear, overlay_area);

    let lines = vec![
        Line::from(Span::styled(
            "Backend URL",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!("{}_", app.pending_url),
                Style::default().fg(app.theme.highlight),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter the full URL of your backend healthcheck endpoint",
            Style::default().add_modifier(Modifier::DIM),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Enter:save  Esc:cancel  Ctrl+u:clear ",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Backend Configuration ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}
