use crate::models::email::ErrorResponse;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

pub const MISSING_EMAIL_MESSAGE: &str = "Email address is required";
pub const NOT_FOUND_MESSAGE: &str = "Endpoint not found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";

/// Errors surfaced by the HTTP handlers.
///
/// Client errors carry a fixed public message. Server errors are logged in
/// full and answered with [`INTERNAL_ERROR_MESSAGE`] only.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("email address is required")]
    MissingEmail,

    #[error("endpoint not found")]
    NotFound,

    #[error("failed to read request body: {0}")]
    Payload(String),

    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedBody(err.to_string())
    }
}

impl ApiError {
    fn public_message(&self) -> &'static str {
        match self {
            ApiError::MissingEmail => MISSING_EMAIL_MESSAGE,
            ApiError::NotFound => NOT_FOUND_MESSAGE,
            ApiError::Payload(_) | ApiError::MalformedBody(_) => {
                INTERNAL_ERROR_MESSAGE
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingEmail => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Payload(_) | ApiError::MalformedBody(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        HttpResponse::build(status).json(ErrorResponse::new(self.public_message()))
    }
}

/// Startup configuration failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?} ({reason})")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },
}
