use crate::error::ApiError;
use actix_web::{HttpResponse, web};

/// # Health Check Endpoint
///
/// Returns status, timestamp and process uptime.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "OK",
///   "timestamp": "2023-10-05T12:34:56.789Z",
///   "uptime": 12.03
/// }
/// ```
pub mod health;

/// # Email Validation Endpoints
///
/// Syntactic validation of a single address, from a request body
/// (`POST /validate`) or a path segment (`GET /validate/{email}`).
///
/// ## Responses
/// - **200 OK**: verdict with `isValid` and a human readable `message`
/// - **400 Bad Request**: no email supplied
pub mod email;

/// API name, version and endpoint map served at `/`.
pub mod info;


/// # API Route Configuration
///
/// Mounts every endpoint at the root path and answers anything else with the
/// JSON 404 body.
///
/// ```text
/// GET  /                 - API information
/// POST /validate         - Email validation from the request body
/// GET  /validate/{email} - Email validation from the URL
/// GET  /health           - Service health status
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    info::configure_routes(cfg);
    email::configure_routes(cfg);
    health::configure_routes(cfg);
    cfg.default_service(web::to(not_found));
}

async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound)
}
