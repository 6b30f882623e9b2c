use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind,
};

use crate::app::App;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // If the settings overlay is open, it captures all input
    if app.show_settings {
        handle_settings_input(app, key);
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),

        // Manual refresh (ignored while a cycle is in flight)
        KeyCode::Char('r') => app.refresh(),

        // Open the backend configuration overlay
        KeyCode::Char('c') => app.open_settings(),

        // Navigation across cards
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        // Export
        KeyCode::Char('e') => {
            let export_path = std::path::PathBuf::from("health_export.json");
            match app.export_state(&export_path) {
                Ok(()) => {
                    app.set_status_message(format!("Exported to {}", export_path.display()));
                }
                Err(e) => {
                    app.set_status_message(format!("Export failed: {}", e));
                }
            }
        }

        _ => {}
    }
}

/// Handle key input while the settings overlay is open
fn handle_settings_input(app: &mut App, key: KeyEvent) {
    match key.code {
        // Commit the pending URL
        KeyCode::Enter => app.apply_settings(),

        // Discard the pending URL
        KeyCode::Esc => app.cancel_settings(),

        // Clear the whole input
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.pending_url.clear();
        }

        // Backspace
        KeyCode::Backspace => app.pending_pop(),

        // Type characters
        KeyCode::Char(c) => app.pending_push(c),

        _ => {}
    }
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.select_prev(),
        MouseEventKind::ScrollDown => app.select_next(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ChannelSource;

    fn test_app() -> (App, tempfile::TempDir) {
        let (_tx, source) = ChannelSource::create("test");
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(
            Box::new(source),
            "http://initial/health".to_string(),
            dir.path().join("config.json"),
        );
        (app, dir)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_key() {
        let (mut app, _dir) = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_settings_overlay_captures_typing() {
        let (mut app, _dir) = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('c')));
        assert!(app.show_settings);

        // 'q' is input now, not quit.
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.running);
        assert!(app.pending_url.ends_with('q'));

        handle_key_event(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.pending_url, "http://initial/health");

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.show_settings);
    }

    #[test]
    fn test_settings_enter_commits() {
        let (mut app, dir) = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('c')));
        app.pending_url = "http://new/health".to_string();
        handle_key_event(&mut app, key(KeyCode::Enter));

        assert!(!app.show_settings);
        assert_eq!(app.backend_url, "http://new/health");
        assert!(dir.path().join("config.json").exists());
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let (mut app, _dir) = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key_event(&mut app, key(KeyCode::Char('x')));
        assert!(!app.show_help);
    }
}
