use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

pub const API_NAME: &str = "Email Validator API";

/// Static description of the API served at `GET /`.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}

impl ApiInfo {
    pub fn current() -> Self {
        let endpoints = [
            ("GET /", "API information"),
            ("POST /validate", "Validate email address"),
            (
                "GET /validate/:email",
                "Validate email address via URL parameter",
            ),
        ]
        .into_iter()
        .map(|(route, description)| (route.to_string(), description.to_string()))
        .collect();

        Self {
            message: API_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints,
        }
    }
}
