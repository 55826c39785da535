use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::Uri;
use actix_web::http::uri::PathAndQuery;
use actix_web::middleware::{Logger, Next, NormalizePath};

/// CORS policy: any origin, method and header. Responses carry a wildcard
/// `Access-Control-Allow-Origin`.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

/// Route matching ignores a trailing slash (`/health/` is `/health`).
pub fn normalize_path() -> NormalizePath {
    NormalizePath::trim()
}

/// Makes route names case-insensitive by lowercasing the first path segment.
/// Later segments, such as the address in `/validate/{email}`, keep their case.
///
/// Use with [`actix_web::middleware::from_fn`].
pub async fn fold_route_case(
    mut req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    if let Some(uri) = lowercase_first_segment(req.uri()) {
        req.match_info_mut().get_mut().update(&uri);
        req.head_mut().uri = uri;
    }
    next.call(req).await
}

fn lowercase_first_segment(uri: &Uri) -> Option<Uri> {
    let rest = uri.path().strip_prefix('/')?;
    let end = rest.find('/').unwrap_or(rest.len());
    let (segment, tail) = rest.split_at(end);
    if !segment.bytes().any(|b| b.is_ascii_uppercase()) {
        return None;
    }

    let mut rewritten = format!("/{}{}", segment.to_ascii_lowercase(), tail);
    if let Some(query) = uri.query() {
        rewritten.push('?');
        rewritten.push_str(query);
    }

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(rewritten).ok()?);
    Uri::from_parts(parts).ok()
}

/// Access log line per request.
pub fn request_logger() -> Logger {
    Logger::new(r#"%a "%r" %s %b %Dms"#)
}
