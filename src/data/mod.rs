//! Data models and normalization for health responses.
//!
//! ## Submodules
//!
//! - [`service`]: Core model ([`ServiceStatus`], [`Status`]) and derived
//!   [`DashboardStats`]
//! - [`normalize`]: Folds the two accepted response shapes (array form and
//!   map form) into a uniform service list
//!
//! ## Data Flow
//!
//! ```text
//! JSON body (array or map form)
//!        │
//!        ▼
//! normalize::normalize()
//!        │
//!        ├──▶ Vec<ServiceStatus> (replaced wholesale each poll cycle)
//!        │
//!        └──▶ DashboardStats::from_services() (for the stats panel)
//! ```

pub mod normalize;
pub mod service;

pub use normalize::normalize;
pub use service::{DashboardStats, ServiceStatus, Status};
