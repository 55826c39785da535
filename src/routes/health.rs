use crate::models::HealthResponse;
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, route, web};

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp
/// and the process uptime.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: JSON object with `status` ("OK"), `timestamp` (ISO 8601) and
///     `uptime` (seconds)
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "OK",
///   "timestamp": "2023-10-05T12:34:56.789Z",
///   "uptime": 93.051
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[route("/health", method = "GET", method = "HEAD")]
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::ok(state.uptime()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use chrono::DateTime;

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());

        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present");
        assert_eq!(content_type, "application/json");

        let health_response: HealthResponse = test::read_body_json(resp).await;
        assert_eq!(health_response.status, "OK");
        assert!(health_response.uptime >= 0.0);
        DateTime::parse_from_rfc3339(&health_response.timestamp)
            .expect("Timestamp should be a valid RFC 3339 / ISO 8601 date");
    }
}
