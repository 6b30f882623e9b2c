//! Application state and controller logic.
//!
//! [`App`] is the single owner of mutable dashboard state: the current
//! service list, the busy flag, the committed backend URL, and overlay
//! state. Poll events are drained on the UI thread, so each cycle's
//! service-list replacement is atomic from the UI's perspective.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use crate::config::Settings;
use crate::data::{DashboardStats, ServiceStatus, Status};
use crate::source::{DataSource, PollEvent};
use crate::ui::Theme;

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    // Data source and the latest snapshot
    source: Box<dyn DataSource>,
    pub services: Vec<ServiceStatus>,
    pub last_updated: Option<Instant>,
    /// Advisory busy flag: disables the manual refresh control while a
    /// cycle is in flight. It does not block the timer-triggered fetch.
    pub refreshing: bool,
    pub load_error: Option<String>,

    // Committed configuration
    pub backend_url: String,
    settings_path: PathBuf,

    // Settings overlay; `pending_url` is transient input, distinct from
    // the committed `backend_url` until explicitly applied.
    pub show_settings: bool,
    pub pending_url: String,

    // Card selection
    pub selected_index: usize,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback, the toast analog)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App with the given data source and committed URL.
    pub fn new(source: Box<dyn DataSource>, backend_url: String, settings_path: PathBuf) -> Self {
        Self {
            running: true,
            show_help: false,
            source,
            services: Vec::new(),
            last_updated: None,
            refreshing: false,
            load_error: None,
            backend_url,
            settings_path,
            show_settings: false,
            pending_url: String::new(),
            selected_index: 0,
            theme: Theme::auto_detect(),
            status_message: None,
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Derive the stats panel numbers from the current list.
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_services(&self.services)
    }

    /// Overall status for the header dot: worst state wins.
    pub fn overall_status(&self) -> Status {
        if self.services.is_empty() {
            Status::Unknown
        } else if self.services.iter().any(|s| s.status == Status::Unhealthy) {
            Status::Unhealthy
        } else if self.services.iter().any(|s| s.status == Status::Unknown) {
            Status::Unknown
        } else if self.services.iter().any(|s| s.status == Status::Checking) {
            Status::Checking
        } else {
            Status::Healthy
        }
    }

    /// Drain pending poll events from the data source.
    ///
    /// Every finished cycle replaces the service list wholesale, clears the
    /// busy flag, and emits a status message; failures substitute the
    /// placeholder list instead of propagating.
    pub fn pump_source(&mut self) {
        while let Some(event) = self.source.poll() {
            match event {
                PollEvent::Started => self.refreshing = true,
                PollEvent::Finished(outcome) => {
                    self.refreshing = false;
                    self.services = outcome.services;
                    self.last_updated = Some(Instant::now());
                    if self.selected_index >= self.services.len() {
                        self.selected_index = self.services.len().saturating_sub(1);
                    }
                    match outcome.error {
                        None => {
                            self.load_error = None;
                            self.set_status_message(
                                "Status Updated: health check completed".to_string(),
                            );
                        }
                        Some(err) => {
                            self.load_error = Some(err);
                            self.set_status_message(format!(
                                "Connection Error: could not reach {}. Showing example data.",
                                outcome.url
                            ));
                        }
                    }
                }
            }
        }

        if let Some(err) = self.source.error() {
            self.load_error = Some(err);
        }
    }

    /// Request an immediate fetch cycle.
    ///
    /// Ignored while a cycle is already in flight (the busy flag is
    /// advisory; the repeat timer itself is unaffected).
    pub fn refresh(&mut self) {
        if !self.refreshing {
            self.source.request_refresh();
        }
    }

    /// Open the settings overlay, seeding the pending input from the
    /// committed URL.
    pub fn open_settings(&mut self) {
        self.show_settings = true;
        self.pending_url = self.backend_url.clone();
    }

    /// Close the settings overlay, discarding the pending input.
    pub fn cancel_settings(&mut self) {
        self.show_settings = false;
    }

    /// Append a character to the pending URL input.
    pub fn pending_push(&mut self, c: char) {
        self.pending_url.push(c);
    }

    /// Remove the last character from the pending URL input.
    pub fn pending_pop(&mut self) {
        self.pending_url.pop();
    }

    /// Commit the pending URL: persist it, repoint the poller, and confirm.
    ///
    /// The poller is only repointed when the URL actually changed; saving
    /// an unchanged value still persists and confirms.
    pub fn apply_settings(&mut self) {
        self.show_settings = false;
        let url = self.pending_url.clone();

        let settings = Settings {
            backend_url: url.clone(),
        };
        if let Err(e) = settings.save(&self.settings_path) {
            self.set_status_message(format!("Save failed: {}", e));
            return;
        }

        if url != self.backend_url {
            self.backend_url = url;
            self.source.set_url(&self.backend_url);
        }
        self.set_status_message("Configuration Saved: backend URL updated".to_string());
    }

    /// Move selection down by one card.
    pub fn select_next(&mut self) {
        let max = self.services.len().saturating_sub(1);
        self.selected_index = (self.selected_index + 1).min(max);
    }

    /// Move selection up by one card.
    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Jump to the first card.
    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    /// Jump to the last card.
    pub fn select_last(&mut self) {
        self.selected_index = self.services.len().saturating_sub(1);
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < std::time::Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export the current snapshot and stats to a JSON file.
    pub fn export_state(&self, path: &std::path::Path) -> Result<()> {
        let export = serde_json::json!({
            "stats": self.stats(),
            "services": self.services,
        });
        std::fs::write(path, serde_json::to_string_pretty(&export)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{placeholder_services, ChannelSource, PollOutcome};
    use tokio::sync::mpsc::UnboundedSender;

    fn test_app() -> (UnboundedSender<PollEvent>, App, tempfile::TempDir) {
        let (tx, source) = ChannelSource::create("test");
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(
            Box::new(source),
            "http://initial/health".to_string(),
            dir.path().join("config.json"),
        );
        (tx, app, dir)
    }

    fn healthy(name: &str, response_time: Option<u64>) -> ServiceStatus {
        ServiceStatus {
            name: name.to_string(),
            url: format!("http://{}.local", name),
            status: Status::Healthy,
            response_time,
            last_checked: None,
            message: None,
        }
    }

    fn success(services: Vec<ServiceStatus>) -> PollEvent {
        PollEvent::Finished(PollOutcome {
            services,
            url: "http://initial/health".to_string(),
            error: None,
        })
    }

    #[test]
    fn test_busy_flag_follows_cycle() {
        let (tx, mut app, _dir) = test_app();

        tx.send(PollEvent::Started).unwrap();
        app.pump_source();
        assert!(app.refreshing);

        tx.send(success(vec![healthy("a", None)])).unwrap();
        app.pump_source();
        assert!(!app.refreshing);
    }

    #[test]
    fn test_busy_flag_clears_on_failure_too() {
        let (tx, mut app, _dir) = test_app();

        tx.send(PollEvent::Started).unwrap();
        tx.send(PollEvent::Finished(PollOutcome {
            services: placeholder_services("boom"),
            url: "http://initial/health".to_string(),
            error: Some("boom".to_string()),
        }))
        .unwrap();
        app.pump_source();

        assert!(!app.refreshing);
        assert_eq!(app.load_error.as_deref(), Some("boom"));
        assert_eq!(app.services.len(), 2);
        assert!(app.services.iter().all(|s| s.status == Status::Unknown));
        assert!(app
            .get_status_message()
            .unwrap()
            .contains("http://initial/health"));
    }

    #[test]
    fn test_list_replaced_wholesale() {
        let (tx, mut app, _dir) = test_app();

        tx.send(success(vec![healthy("a", None), healthy("b", None)])).unwrap();
        app.pump_source();
        assert_eq!(app.services.len(), 2);

        // A later cycle replaces, never merges.
        tx.send(success(vec![healthy("c", None)])).unwrap();
        app.pump_source();
        assert_eq!(app.services.len(), 1);
        assert_eq!(app.services[0].name, "c");
        assert!(app.load_error.is_none());
    }

    #[test]
    fn test_selection_clamped_after_replacement() {
        let (tx, mut app, _dir) = test_app();

        tx.send(success(vec![
            healthy("a", None),
            healthy("b", None),
            healthy("c", None),
        ]))
        .unwrap();
        app.pump_source();
        app.select_last();
        assert_eq!(app.selected_index, 2);

        tx.send(success(vec![healthy("a", None)])).unwrap();
        app.pump_source();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_overall_status_precedence() {
        let (tx, mut app, _dir) = test_app();
        assert_eq!(app.overall_status(), Status::Unknown);

        let mut services = vec![healthy("a", None), healthy("b", None)];
        tx.send(success(services.clone())).unwrap();
        app.pump_source();
        assert_eq!(app.overall_status(), Status::Healthy);

        services.push(ServiceStatus {
            status: Status::Unhealthy,
            ..healthy("c", None)
        });
        tx.send(success(services)).unwrap();
        app.pump_source();
        assert_eq!(app.overall_status(), Status::Unhealthy);
    }

    #[test]
    fn test_pending_url_is_distinct_until_applied() {
        let (_tx, mut app, _dir) = test_app();

        app.open_settings();
        assert_eq!(app.pending_url, "http://initial/health");

        for c in "x".chars() {
            app.pending_push(c);
        }
        assert_eq!(app.backend_url, "http://initial/health");

        app.cancel_settings();
        assert_eq!(app.backend_url, "http://initial/health");
        assert!(!app.show_settings);
    }

    #[test]
    fn test_apply_settings_persists_and_confirms() {
        let (_tx, mut app, dir) = test_app();

        app.open_settings();
        app.pending_url = "http://x/health".to_string();
        app.apply_settings();

        assert!(!app.show_settings);
        assert_eq!(app.backend_url, "http://x/health");
        assert!(app.get_status_message().unwrap().contains("Configuration Saved"));

        // A fresh read of configuration returns the committed value.
        let loaded = Settings::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(loaded.backend_url, "http://x/health");
    }

    #[test]
    fn test_status_message_expires() {
        let (_tx, mut app, _dir) = test_app();
        app.set_status_message("hello".to_string());
        assert_eq!(app.get_status_message(), Some("hello"));

        app.status_message = Some((
            "hello".to_string(),
            Instant::now() - std::time::Duration::from_secs(4),
        ));
        assert!(app.get_status_message().is_none());
    }
}
