// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # pulsewatch
//!
//! A terminal dashboard and library for monitoring HTTP service-health
//! endpoints.
//!
//! The dashboard polls a configurable backend URL on a fixed interval,
//! normalizes whatever JSON shape the backend returns into a uniform list
//! of service records, and renders aggregate stats plus one status card
//! per service.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐  │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│  │
//! │  │ (state) │    │(normalize)    │(render) │    │         │  │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘  │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── HttpSource | ChannelSource                  │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! │       ▲                                                     │
//! │  ┌────┴────┐                                                │
//! │  │ config  │  persisted backend URL                         │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, poll-event pumping, settings commit
//! - **[`source`]**: Data source abstraction ([`DataSource`] trait) with the
//!   HTTP poller and a channel-based source for tests/embedding
//! - **[`data`]**: The [`ServiceStatus`] model, response normalization, and
//!   derived [`DashboardStats`]
//! - **[`config`]**: The persisted backend URL (file, then environment,
//!   then a hard-coded fallback)
//! - **[`ui`]**: Terminal rendering using ratatui
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Poll the saved (or default) backend every 30 seconds
//! pulsewatch
//!
//! # Poll a specific endpoint every 10 seconds
//! pulsewatch --url http://localhost:8080/healthcheck --refresh 10
//!
//! # One-shot: fetch, write the normalized snapshot as JSON, exit
//! pulsewatch --export snapshot.json
//! ```
//!
//! ### As a library with the HTTP poller
//!
//! ```no_run
//! use std::time::Duration;
//! use pulsewatch::{App, HttpSource, Settings};
//!
//! # tokio_test::block_on(async {
//! let url = "http://localhost:3000/health";
//! let source = HttpSource::spawn(url, Duration::from_secs(30));
//! let app = App::new(Box::new(source), url.to_string(), Settings::default_path());
//! # });
//! ```
//!
//! ### As a library with a channel source (push-based feeds, tests)
//!
//! ```
//! use pulsewatch::{App, ChannelSource, Settings};
//!
//! let (tx, source) = ChannelSource::create("scripted feed");
//! let app = App::new(
//!     Box::new(source),
//!     "http://localhost:3000/health".to_string(),
//!     Settings::default_path(),
//! );
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod events;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use config::{Settings, DEFAULT_BACKEND_URL};
pub use data::{normalize, DashboardStats, ServiceStatus, Status};
pub use source::{
    fetch_once, placeholder_services, ChannelSource, DataSource, HttpSource, PollEvent,
    PollOutcome, DEFAULT_POLL_INTERVAL,
};
