use crate::models::ApiInfo;
use actix_web::{HttpResponse, Responder, route, web};

/// # API Information
///
/// Name, version and the map of available endpoints.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API information", body = ApiInfo)
    ),
    tag = "API Information"
)]
#[route("/", method = "GET", method = "HEAD")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(ApiInfo::current())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
}
