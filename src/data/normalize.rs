//! Health response normalization.
//!
//! Backends report health in two shapes: an explicit `{"services": [...]}`
//! array, and a looser map of service name to info object. Both are folded
//! into a single `Vec<ServiceStatus>` here, so everything downstream deals
//! with one uniform type.

use chrono::Utc;
use serde_json::Value;

use super::service::{ServiceStatus, Status};

/// Convert an arbitrary parsed health response into service records.
///
/// If `data.services` is an array it is returned as-is; records are trusted
/// to already match the model. Otherwise `data` is treated as a map from
/// service name to info object and rebuilt field by field:
///
/// - `url`: `info.url`, then `info.endpoint`, then empty.
/// - `status`: `Healthy` iff `info.status == "up"` or `info.healthy` is
///   truthy, else `Unhealthy`. This branch never yields `Unknown` or
///   `Checking`; only the connection-error path does.
/// - `response_time`: `info.responseTime`, then `info.latency`.
/// - `last_checked`: `info.lastCheck`, then the current timestamp.
/// - `message`: `info.message`, then `info.error`.
///
/// No schema validation beyond these fallbacks; malformed entries propagate
/// whatever values are present.
pub fn normalize(data: &Value) -> Vec<ServiceStatus> {
    if let Some(services) = data.get("services").and_then(Value::as_array) {
        return services.iter().map(service_from_value).collect();
    }

    let Some(entries) = data.as_object() else {
        return Vec::new();
    };

    entries
        .iter()
        .map(|(name, info)| {
            let status = if str_field(info, "status").as_deref() == Some("up")
                || truthy(info.get("healthy"))
            {
                Status::Healthy
            } else {
                Status::Unhealthy
            };

            ServiceStatus {
                name: name.clone(),
                url: str_field(info, "url")
                    .or_else(|| str_field(info, "endpoint"))
                    .unwrap_or_default(),
                status,
                response_time: num_field(info, "responseTime")
                    .or_else(|| num_field(info, "latency")),
                last_checked: str_field(info, "lastCheck")
                    .or_else(|| Some(Utc::now().to_rfc3339())),
                message: str_field(info, "message").or_else(|| str_field(info, "error")),
            }
        })
        .collect()
}

/// Array-form records are trusted; anything that still fails to map onto the
/// model becomes a default (unknown) record rather than poisoning the list.
fn service_from_value(value: &Value) -> ServiceStatus {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

/// JS-style truthiness for the `healthy` flag in map-form responses.
fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn str_field(info: &Value, key: &str) -> Option<String> {
    info.get(key).and_then(Value::as_str).map(str::to_string)
}

fn num_field(info: &Value, key: &str) -> Option<u64> {
    info.get(key).and_then(Value::as_u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_form_passes_through() {
        let data = json!({
            "services": [
                {
                    "name": "auth",
                    "url": "https://auth.example.com",
                    "status": "healthy",
                    "responseTime": 120,
                    "lastChecked": "2024-01-01T12:00:00Z",
                    "message": "ok"
                },
                {
                    "name": "db",
                    "url": "https://db.example.com",
                    "status": "unhealthy"
                }
            ],
            "timestamp": "2024-01-01T12:00:00Z"
        });

        let services = normalize(&data);
        assert_eq!(services.len(), 2);
        assert_eq!(services[0].name, "auth");
        assert_eq!(services[0].status, Status::Healthy);
        assert_eq!(services[0].response_time, Some(120));
        assert_eq!(services[1].name, "db");
        assert_eq!(services[1].status, Status::Unhealthy);
        assert!(services[1].response_time.is_none());
    }

    #[test]
    fn test_map_form_status_up() {
        let data = json!({"auth": {"status": "up"}});
        let services = normalize(&data);
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].status, Status::Healthy);
    }

    #[test]
    fn test_map_form_healthy_flag() {
        let data = json!({"auth": {"healthy": true}});
        assert_eq!(normalize(&data)[0].status, Status::Healthy);

        let data = json!({"auth": {"healthy": false}});
        assert_eq!(normalize(&data)[0].status, Status::Unhealthy);
    }

    #[test]
    fn test_map_form_truthy_healthy_values() {
        // Anything JS would consider truthy counts as healthy.
        for healthy in [json!(1), json!("yes"), json!([1]), json!({"a": 1})] {
            let data = json!({"svc": {"healthy": healthy}});
            assert_eq!(normalize(&data)[0].status, Status::Healthy, "{healthy}");
        }
        for healthy in [json!(0), json!(""), json!(null)] {
            let data = json!({"svc": {"healthy": healthy}});
            assert_eq!(normalize(&data)[0].status, Status::Unhealthy, "{healthy}");
        }
    }

    #[test]
    fn test_map_form_neither_yields_unhealthy() {
        // Anything but "up"/truthy-healthy is unhealthy, never unknown.
        let data = json!({"auth": {"status": "down"}, "db": {}});
        let services = normalize(&data);
        assert!(services.iter().all(|s| s.status == Status::Unhealthy));
    }

    #[test]
    fn test_map_form_url_fallbacks() {
        let data = json!({
            "a": {"url": "http://a"},
            "b": {"endpoint": "http://b"},
            "c": {}
        });
        let services = normalize(&data);
        let by_name = |n: &str| services.iter().find(|s| s.name == n).unwrap();
        assert_eq!(by_name("a").url, "http://a");
        assert_eq!(by_name("b").url, "http://b");
        assert_eq!(by_name("c").url, "");
    }

    #[test]
    fn test_map_form_response_time_fallbacks() {
        let data = json!({
            "a": {"responseTime": 100},
            "b": {"latency": 200},
            "c": {}
        });
        let services = normalize(&data);
        let by_name = |n: &str| services.iter().find(|s| s.name == n).unwrap();
        assert_eq!(by_name("a").response_time, Some(100));
        assert_eq!(by_name("b").response_time, Some(200));
        assert!(by_name("c").response_time.is_none());
    }

    #[test]
    fn test_map_form_last_checked_defaults_to_now() {
        let data = json!({
            "a": {"lastCheck": "2024-01-01T12:00:00Z"},
            "b": {}
        });
        let services = normalize(&data);
        let by_name = |n: &str| services.iter().find(|s| s.name == n).unwrap();
        assert_eq!(by_name("a").last_checked.as_deref(), Some("2024-01-01T12:00:00Z"));
        // Absent lastCheck is stamped at normalization time.
        assert!(by_name("b").last_checked.is_some());
    }

    #[test]
    fn test_map_form_message_fallbacks() {
        let data = json!({
            "a": {"message": "note"},
            "b": {"error": "boom"},
            "c": {}
        });
        let services = normalize(&data);
        let by_name = |n: &str| services.iter().find(|s| s.name == n).unwrap();
        assert_eq!(by_name("a").message.as_deref(), Some("note"));
        assert_eq!(by_name("b").message.as_deref(), Some("boom"));
        assert!(by_name("c").message.is_none());
    }

    #[test]
    fn test_map_form_non_object_info() {
        // Non-object entries produce a record built entirely from fallbacks.
        let data = json!({"weird": "just a string"});
        let services = normalize(&data);
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].name, "weird");
        assert_eq!(services[0].url, "");
        assert_eq!(services[0].status, Status::Unhealthy);
    }

    #[test]
    fn test_non_object_top_level() {
        assert!(normalize(&json!(42)).is_empty());
        assert!(normalize(&json!([1, 2, 3])).is_empty());
        assert!(normalize(&json!(null)).is_empty());
    }

    #[test]
    fn test_services_key_not_array_falls_back_to_map_form() {
        // A non-array "services" key is just another map entry.
        let data = json!({"services": {"healthy": true}});
        let services = normalize(&data);
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].name, "services");
        assert_eq!(services[0].status, Status::Healthy);
    }
}
