use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `utoipa::path` annotations on the route
/// handlers. Served as JSON at `/api-docs/openapi.json` and rendered by the
/// Swagger UI at `/swagger-ui/`.
///
/// # Endpoints
/// - API information: `GET /`
/// - Email validation: `POST /validate`, `GET /validate/{email}`
/// - Health check: `GET /health`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::info::index,
        crate::routes::email::validate_email,
        crate::routes::email::validate_email_path,
        crate::routes::health::health,
    ),
    components(
        schemas(
            crate::models::info::ApiInfo,
            crate::models::email::EmailRequest,
            crate::models::email::EmailValidationResponse,
            crate::models::email::ErrorResponse,
            crate::models::health::HealthResponse
        )
    ),
    tags(
        (name = "API Information", description = "Service description"),
        (name = "Email Validation", description = "Email address syntax validation endpoints"),
        (name = "Health Check", description = "Service health monitoring endpoints")
    ),
    info(
        description = "Syntactic email address validation over HTTP/JSON",
        title = "Email Validator API",
        version = "1.0.0",
    )
)]
pub struct ApiDoc;
