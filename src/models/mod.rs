/// Request and response bodies for the validation endpoints, plus the
/// shared error envelope.
pub mod email;

/// # Health Status Response
///
/// Status, timestamp and uptime returned by the liveness probe.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "OK",
///   "timestamp": "2024-03-10T15:30:45.123Z",
///   "uptime": 12.5
/// }
/// ```
pub mod health;

pub mod info;

pub use email::{EmailRequest, EmailValidationResponse, ErrorResponse};
pub use health::HealthResponse;
pub use info::ApiInfo;
