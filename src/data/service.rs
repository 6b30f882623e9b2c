//! Service status model and derived dashboard statistics.
//!
//! [`ServiceStatus`] is the single domain entity: one monitored service as
//! reported by the health endpoint. The full list of records is replaced
//! wholesale on every poll cycle; only the latest snapshot is kept.

use serde::{Deserialize, Serialize};

/// Health state reported for a single service.
///
/// `Checking` is a transient state reserved for a per-service in-flight
/// indicator. The normalizer never produces it, and `Unknown` only appears
/// on the connection-error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Healthy,
    Unhealthy,
    Checking,
    #[default]
    Unknown,
}

impl Status {
    /// Returns the uppercased badge text for display.
    pub fn badge(&self) -> &'static str {
        match self {
            Status::Healthy => "HEALTHY",
            Status::Unhealthy => "UNHEALTHY",
            Status::Checking => "CHECKING",
            Status::Unknown => "UNKNOWN",
        }
    }

    /// Returns a short status icon for display.
    pub fn icon(&self) -> &'static str {
        match self {
            Status::Healthy => "✔",
            Status::Unhealthy => "✘",
            Status::Checking => "◌",
            Status::Unknown => "○",
        }
    }
}

/// One monitored service as reported by the health endpoint.
///
/// Field names follow the wire format produced by the backend
/// (`responseTime`, `lastChecked`). Records in array-form responses are
/// trusted rather than validated, so every field tolerates absence and an
/// unrecognized status string falls back to `Unknown` instead of failing
/// the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceStatus {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, deserialize_with = "status_or_unknown")]
    pub status: Status,
    /// Response time in milliseconds.
    #[serde(
        rename = "responseTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub response_time: Option<u64>,
    /// ISO-8601 timestamp of the last check.
    #[serde(
        rename = "lastChecked",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_checked: Option<String>,
    /// Human-readable error detail or status note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn status_or_unknown<'de, D>(deserializer: D) -> Result<Status, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Status::deserialize(deserializer).unwrap_or_default())
}

/// Aggregate statistics derived from the current service list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub healthy: usize,
    pub unhealthy: usize,
    /// Average response time in milliseconds, rounded to nearest.
    ///
    /// The divisor is the total service count, not the count of services
    /// that report a time, so entries without one drag the average down.
    pub avg_response_time: u64,
}

impl DashboardStats {
    /// Derive stats from a service list.
    pub fn from_services(services: &[ServiceStatus]) -> Self {
        let total = services.len();
        let healthy = services.iter().filter(|s| s.status == Status::Healthy).count();
        let unhealthy = services.iter().filter(|s| s.status == Status::Unhealthy).count();

        let avg_response_time = if total > 0 {
            let sum: u64 = services.iter().filter_map(|s| s.response_time).sum();
            (sum as f64 / total as f64).round() as u64
        } else {
            0
        };

        Self {
            total,
            healthy,
            unhealthy,
            avg_response_time,
        }
    }
}
