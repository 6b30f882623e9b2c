//! Channel-based data source.
//!
//! Receives poll events via a tokio mpsc channel. This is useful for tests
//! and for embedding the dashboard behind a push-based feed instead of the
//! HTTP poller.

use tokio::sync::mpsc;

use super::{DataSource, PollEvent};

/// A data source that receives poll events from a channel.
///
/// # Example
///
/// ```
/// use pulsewatch::ChannelSource;
///
/// let (tx, source) = ChannelSource::create("scripted feed");
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: mpsc::UnboundedReceiver<PollEvent>,
    description: String,
}

impl ChannelSource {
    /// Create a new channel source from the receiving end.
    pub fn new(receiver: mpsc::UnboundedReceiver<PollEvent>, source_description: &str) -> Self {
        Self {
            receiver,
            description: format!("channel: {}", source_description),
        }
    }

    /// Create a channel pair for pushing events to a ChannelSource.
    pub fn create(source_description: &str) -> (mpsc::UnboundedSender<PollEvent>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self::new(rx, source_description))
    }
}

impl DataSource for ChannelSource {
    fn poll(&mut self) -> Option<PollEvent> {
        self.receiver.try_recv().ok()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<String> {
        // Connection errors would be handled by the producer side.
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{placeholder_services, PollOutcome};

    #[test]
    fn test_channel_source_poll() {
        let (tx, mut source) = ChannelSource::create("test");

        // Nothing pushed yet.
        assert!(source.poll().is_none());

        tx.send(PollEvent::Started).unwrap();
        tx.send(PollEvent::Finished(PollOutcome {
            services: placeholder_services("boom"),
            url: "http://test/health".to_string(),
            error: Some("boom".to_string()),
        }))
        .unwrap();

        assert!(matches!(source.poll(), Some(PollEvent::Started)));
        let Some(PollEvent::Finished(outcome)) = source.poll() else {
            panic!("expected a finished event");
        };
        assert_eq!(outcome.services.len(), 2);
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_channel_source_description() {
        let (_tx, source) = ChannelSource::create("scripted feed");
        assert_eq!(source.description(), "channel: scripted feed");
    }
}
