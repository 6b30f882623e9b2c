//! Data source abstraction for receiving health snapshots.
//!
//! This module provides a trait-based abstraction between the acquisition
//! side (the HTTP poller) and the app, so the poller can be swapped for a
//! channel-backed source in tests and embeddings.

mod channel;
mod http;

pub use channel::ChannelSource;
pub use http::{fetch_once, HttpSource};

use std::fmt::Debug;
use std::time::Duration;

use crate::data::{ServiceStatus, Status};

/// Default interval between poll cycles.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// One event emitted by a data source.
#[derive(Debug, Clone)]
pub enum PollEvent {
    /// A fetch cycle has begun; the manual refresh control should be
    /// disabled until the matching [`PollEvent::Finished`] arrives.
    Started,
    /// A fetch cycle has settled, successfully or not.
    Finished(PollOutcome),
}

/// The settled result of one fetch cycle.
///
/// Failures are folded into placeholder data here rather than surfaced as
/// errors; every cycle replaces the service list wholesale.
#[derive(Debug, Clone)]
pub struct PollOutcome {
    /// The complete replacement service list.
    pub services: Vec<ServiceStatus>,
    /// The URL the cycle ran against.
    pub url: String,
    /// Error text when the cycle failed (transport, HTTP status, or body
    /// parse failure - all collapsed into one connection-error outcome).
    pub error: Option<String>,
}

/// Trait for receiving health data from various sources.
///
/// # Example
///
/// ```
/// use pulsewatch::{ChannelSource, DataSource};
///
/// let (tx, mut source) = ChannelSource::create("test feed");
/// assert!(source.poll().is_none());
/// ```
pub trait DataSource: Send + Debug {
    /// Drain the next pending event, if any. Non-blocking.
    fn poll(&mut self) -> Option<PollEvent>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the status bar.
    fn description(&self) -> &str;

    /// The last source-level error, if any.
    fn error(&self) -> Option<String>;

    /// Request an immediate fetch cycle. No-op for push-based sources.
    fn request_refresh(&mut self) {}

    /// Point the source at a new endpoint URL. No-op for push-based sources.
    fn set_url(&mut self, _url: &str) {}
}

/// Fixed placeholder records shown when the backend cannot be reached.
///
/// Exactly two entries, both `Unknown`; the first carries the error detail.
pub fn placeholder_services(error: &str) -> Vec<ServiceStatus> {
    vec![
        ServiceStatus {
            name: "Example Service 1".to_string(),
            url: "https://api.example.com/v1".to_string(),
            status: Status::Unknown,
            response_time: None,
            last_checked: None,
            message: Some(format!("Cannot connect to backend: {}", error)),
        },
        ServiceStatus {
            name: "Example Service 2".to_string(),
            url: "https://api.example2.com/v1".to_string(),
            status: Status::Unknown,
            response_time: None,
            last_checked: None,
            message: Some("Waiting for backend connection...".to_string()),
        },
    ]
}
