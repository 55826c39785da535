use crate::error::ApiError;
use crate::models::email::{EmailRequest, EmailValidationResponse, ErrorResponse};
use actix_web::{HttpMessage, HttpRequest, HttpResponse, post, route, web};
use serde_json::Value;

/// # Email Validation Endpoint
///
/// Checks the syntax of the address given in the request body.
///
/// ## Request
/// - Method: POST
/// - Body: `application/json` (`{ "email": "..." }`) or
///   `application/x-www-form-urlencoded` (`email=...`)
///
/// ## Responses
/// - **200 OK**: verdict, valid or not
/// - **400 Bad Request**: `email` missing or empty
/// - **500 Internal Server Error**: body could not be read or parsed
///
/// ## Example Request
/// ```json
/// { "email": "user@example.com" }
/// ```
#[utoipa::path(
    post,
    path = "/validate",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Validation verdict", body = EmailValidationResponse),
        (status = 400, description = "Email address is required", body = ErrorResponse),
        (status = 500, description = "Unexpected server error", body = ErrorResponse)
    ),
    tag = "Email Validation"
)]
#[post("/validate")]
pub async fn validate_email(
    req: HttpRequest,
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, ApiError> {
    let body = body.map_err(|e| ApiError::Payload(e.to_string()))?;
    let request = parse_body(&req, &body)?;
    respond(request)
}

/// # Email Validation via URL
///
/// Same verdict as `POST /validate`, with the candidate taken from the
/// (percent-decoded) path segment.
#[utoipa::path(
    get,
    path = "/validate/{email}",
    params(
        ("email" = String, Path, description = "Email address to validate")
    ),
    responses(
        (status = 200, description = "Validation verdict", body = EmailValidationResponse),
        (status = 400, description = "Email address is required", body = ErrorResponse)
    ),
    tag = "Email Validation"
)]
#[route("/validate/{email}", method = "GET", method = "HEAD")]
pub async fn validate_email_path(path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    respond(EmailRequest {
        email: Some(Value::String(path.into_inner())),
    })
}

fn respond(request: EmailRequest) -> Result<HttpResponse, ApiError> {
    let email = request.into_candidate().ok_or(ApiError::MissingEmail)?;
    let response = EmailValidationResponse::for_candidate(email);
    tracing::debug!(email = %response.email, is_valid = response.is_valid, "validated email");
    Ok(HttpResponse::Ok().json(response))
}

/// Decodes the request body according to its content type. Bodies of any
/// other type, and empty bodies, carry no candidate.
fn parse_body(req: &HttpRequest, body: &[u8]) -> Result<EmailRequest, ApiError> {
    let content_type = req.content_type();

    if is_json(content_type) {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(EmailRequest::default());
        }
        return match serde_json::from_slice::<Value>(body)? {
            object @ Value::Object(_) => Ok(serde_json::from_value(object)?),
            Value::Array(_) => Ok(EmailRequest::default()),
            _ => Err(ApiError::MalformedBody(
                "JSON body must be an object or an array".to_string(),
            )),
        };
    }

    if content_type.eq_ignore_ascii_case("application/x-www-form-urlencoded") {
        let raw = std::str::from_utf8(body).map_err(|e| ApiError::MalformedBody(e.to_string()))?;
        let pairs = web::Query::<Vec<(String, String)>>::from_query(raw)
            .map_err(|e| ApiError::MalformedBody(e.to_string()))?
            .into_inner();
        return Ok(EmailRequest {
            email: form_email(pairs),
        });
    }

    Ok(EmailRequest::default())
}

/// A single `email` field becomes a string, a repeated one an array of strings.
fn form_email(pairs: Vec<(String, String)>) -> Option<Value> {
    let mut values: Vec<Value> = pairs
        .into_iter()
        .filter(|(key, _)| key == "email")
        .map(|(_, value)| Value::String(value))
        .collect();

    match values.len() {
        0 => None,
        1 => values.pop(),
        _ => Some(Value::Array(values)),
    }
}

fn is_json(content_type: &str) -> bool {
    let content_type = content_type.to_ascii_lowercase();
    content_type == "application/json"
        || (content_type.starts_with("application/") && content_type.ends_with("+json"))
}

/// Registers the validation endpoints.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(validate_email).service(validate_email_path);
}
