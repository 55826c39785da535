use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use utoipa::ToSchema;

/// # Health Status Response
///
/// Liveness payload returned by `GET /health`.
///
/// ## Fields
/// - `status`: always `"OK"` while the process can answer
/// - `timestamp`: ISO 8601 UTC timestamp with millisecond precision
/// - `uptime`: seconds since the server started, fractional
///
/// ## Example JSON
/// ```json
/// {
///   "status": "OK",
///   "timestamp": "2024-03-10T15:30:45.123Z",
///   "uptime": 42.317
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: f64,
}

impl HealthResponse {
    pub fn ok(uptime: Duration) -> Self {
        Self {
            status: "OK".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            uptime: uptime.as_secs_f64(),
        }
    }
}
