//! Terminal rendering using ratatui.
//!
//! - [`common`]: header bar, status bar, help overlay, empty-state hint
//! - [`stats`]: the four aggregate stat tiles
//! - [`cards`]: the per-service card grid
//! - [`settings`]: the backend configuration modal
//! - [`theme`]: light/dark color themes

pub mod cards;
pub mod common;
pub mod settings;
pub mod stats;
pub mod theme;

pub use theme::Theme;
