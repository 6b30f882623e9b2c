//! HTTP polling data source.
//!
//! Owns the configured endpoint URL and a background task that fetches it
//! immediately on spawn and then on a fixed cadence. URL changes and manual
//! refreshes interrupt the pending sleep and fetch at once, so only one
//! timer is ever active. In-flight requests are not cancelled when a newer
//! cycle starts; the service list is last-write-wins.

use std::time::Duration;

use anyhow::{bail, Result};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::{placeholder_services, DataSource, PollEvent, PollOutcome};
use crate::data::{normalize, ServiceStatus};

#[derive(Debug)]
enum PollCommand {
    Refresh,
    SetUrl(String),
}

/// A data source that polls an HTTP health endpoint.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use pulsewatch::HttpSource;
///
/// # tokio_test::block_on(async {
/// let source = HttpSource::spawn("http://localhost:3000/health", Duration::from_secs(30));
/// # });
/// ```
#[derive(Debug)]
pub struct HttpSource {
    events: mpsc::UnboundedReceiver<PollEvent>,
    commands: mpsc::UnboundedSender<PollCommand>,
    description: String,
    task: tokio::task::JoinHandle<()>,
}

impl HttpSource {
    /// Spawn the polling task against `url`, fetching once immediately and
    /// then every `interval`.
    ///
    /// Must be called from within a tokio runtime. The task is aborted when
    /// the source is dropped.
    pub fn spawn(url: &str, interval: Duration) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(poll_loop(url.to_string(), interval, event_tx, cmd_rx));

        Self {
            events: event_rx,
            commands: cmd_tx,
            description: format!("http: {}", url),
            task,
        }
    }
}

impl Drop for HttpSource {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl DataSource for HttpSource {
    fn poll(&mut self) -> Option<PollEvent> {
        self.events.try_recv().ok()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<String> {
        // Fetch failures arrive as placeholder outcomes, not source errors.
        None
    }

    fn request_refresh(&mut self) {
        let _ = self.commands.send(PollCommand::Refresh);
    }

    fn set_url(&mut self, url: &str) {
        self.description = format!("http: {}", url);
        let _ = self.commands.send(PollCommand::SetUrl(url.to_string()));
    }
}

async fn poll_loop(
    mut url: String,
    interval: Duration,
    events: mpsc::UnboundedSender<PollEvent>,
    mut commands: mpsc::UnboundedReceiver<PollCommand>,
) {
    let client = reqwest::Client::new();

    loop {
        if events.send(PollEvent::Started).is_err() {
            return;
        }
        let outcome = run_cycle(&client, &url).await;
        if events.send(PollEvent::Finished(outcome)).is_err() {
            return;
        }

        // Wait out the interval unless a command interrupts it. Either
        // command falls through to an immediate fetch at the top of the
        // loop, which also restarts the cadence.
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            cmd = commands.recv() => match cmd {
                Some(PollCommand::Refresh) => {}
                Some(PollCommand::SetUrl(new_url)) => url = new_url,
                None => return,
            }
        }
    }
}

/// Run one fetch cycle. Failures of any kind collapse into the placeholder
/// outcome; this never returns an error to the caller.
async fn run_cycle(client: &reqwest::Client, url: &str) -> PollOutcome {
    match fetch_services(client, url).await {
        Ok(services) => {
            debug!(url, count = services.len(), "health fetch succeeded");
            PollOutcome {
                services,
                url: url.to_string(),
                error: None,
            }
        }
        Err(e) => {
            warn!(url, error = %e, "health fetch failed");
            PollOutcome {
                services: placeholder_services(&e.to_string()),
                url: url.to_string(),
                error: Some(e.to_string()),
            }
        }
    }
}

async fn fetch_services(client: &reqwest::Client, url: &str) -> Result<Vec<ServiceStatus>> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        bail!("HTTP error! status: {}", response.status());
    }
    let data: serde_json::Value = response.json().await?;
    Ok(normalize(&data))
}

/// Run a single fetch cycle outside the TUI (used by `--export`).
pub async fn fetch_once(url: &str) -> PollOutcome {
    run_cycle(&reqwest::Client::new(), url).await
}
