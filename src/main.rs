use actix_web::middleware::from_fn;
use actix_web::{App, HttpServer, web::Data};
use chrono::{SecondsFormat, Utc};
use email_validator::config::ServerConfig;
use email_validator::middleware::{cors, fold_route_case, normalize_path, request_logger};
use email_validator::openapi::ApiDoc;
use email_validator::state::AppState;
use email_validator::telemetry::init_logger;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Email Validator Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - JSON validation endpoints at the root path
/// - Swagger UI for API documentation
/// - CORS open to any origin
/// - Route names matched case-insensitively, trailing slash ignored
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - API information: `/`
/// - Validation: `/validate`, `/validate/{email}`
/// - Health: `/health`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - `HOST` (default `0.0.0.0`) and `PORT` (default `3000`)
/// - `RUST_LOG` for log filtering
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    init_logger();

    let config = ServerConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "invalid server configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;
    let state = AppState::new();
    let openapi = ApiDoc::openapi();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(Data::new(state))
            .wrap(cors())
            .wrap(normalize_path())
            .wrap(from_fn(fold_route_case))
            .wrap(request_logger())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(email_validator::routes::configure)
    })
    .bind((config.host.as_str(), config.port))?;

    tracing::info!("Email Validator API is running on port {}", config.port);
    tracing::info!(
        "Server started at: {}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    );
    tracing::info!("Health check: http://localhost:{}/health", config.port);
    tracing::info!("API documentation: http://localhost:{}/", config.port);

    server.run().await
}
