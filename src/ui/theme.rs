//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::Status;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for healthy services.
    pub healthy: Color,
    /// Color for unhealthy services.
    pub unhealthy: Color,
    /// Color for services with a check in flight.
    pub checking: Color,
    /// Color for services in an unknown state.
    pub unknown: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for panel labels and titles.
    pub header: Style,
    /// Style for the selected card border.
    pub selected: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            healthy: Color::Green,
            unhealthy: Color::Red,
            checking: Color::Cyan,
            unknown: Color::Gray,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            selected: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            healthy: Color::Green,
            unhealthy: Color::Red,
            checking: Color::Blue,
            unknown: Color::DarkGray,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get style for a service status
    pub fn status_style(&self, status: Status) -> Style {
        match status {
            Status::Healthy => Style::default().fg(self.healthy),
            Status::Unhealthy => {
                Style::default().fg(self.unhealthy).add_modifier(Modifier::BOLD)
            }
            Status::Checking => Style::default().fg(self.checking),
            Status::Unknown => Style::default().fg(self.unknown),
        }
    }
}
