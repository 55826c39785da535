use crate::validation::syntax::is_valid_candidate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

pub const VALID_MESSAGE: &str = "Email is valid";
pub const INVALID_MESSAGE: &str = "Email is invalid";

/// Body of `POST /validate`.
///
/// `email` is kept as a raw JSON value: non-string candidates are accepted
/// and reported as invalid rather than rejected at deserialization.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct EmailRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "user@example.com")]
    pub email: Option<Value>,
}

impl EmailRequest {
    /// Takes the candidate out of the request unless it is absent or falsy
    /// (`null`, `false`, `0`, `""`).
    pub fn into_candidate(self) -> Option<Value> {
        self.email.filter(is_truthy)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Verdict for a single candidate.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmailValidationResponse {
    pub success: bool,
    #[schema(value_type = String, example = "user@example.com")]
    pub email: Value,
    pub is_valid: bool,
    pub message: String,
}

impl EmailValidationResponse {
    pub fn for_candidate(email: Value) -> Self {
        let is_valid = is_valid_candidate(&email);
        Self {
            success: true,
            email,
            is_valid,
            message: (if is_valid { VALID_MESSAGE } else { INVALID_MESSAGE }).to_string(),
        }
    }
}

/// Error envelope shared by every non-2xx response.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_email_deserialization() {
        let json = r#"{"email": "user@example.com"}"#;
        let email_request: EmailRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            email_request.into_candidate(),
            Some(json!("user@example.com"))
        );
    }

    #[test]
    fn test_missing_email_field() {
        let email_request: EmailRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(email_request.into_candidate(), None);
    }

    #[test]
    fn test_falsy_values_are_missing() {
        for body in [
            r#"{"email": null}"#,
            r#"{"email": ""}"#,
            r#"{"email": 0}"#,
            r#"{"email": 0.0}"#,
            r#"{"email": false}"#,
        ] {
            let email_request: EmailRequest = serde_json::from_str(body).unwrap();
            assert_eq!(email_request.into_candidate(), None, "{body}");
        }
    }

    #[test]
    fn test_truthy_non_strings_are_kept() {
        for (body, expected) in [
            (r#"{"email": 123}"#, json!(123)),
            (r#"{"email": true}"#, json!(true)),
            (r#"{"email": []}"#, json!([])),
            (r#"{"email": {}}"#, json!({})),
        ] {
            let email_request: EmailRequest = serde_json::from_str(body).unwrap();
            assert_eq!(email_request.into_candidate(), Some(expected), "{body}");
        }
    }

    #[test]
    fn test_email_with_whitespace_is_untouched() {
        let json = r#"{"email": "  user@example.com  "}"#;
        let email_request: EmailRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            email_request.into_candidate(),
            Some(json!("  user@example.com  "))
        );
    }

    #[test]
    fn test_extra_fields_ignored() {
        let json = r#"{"email": "user@example.com", "extra": "ignored"}"#;
        let email_request: EmailRequest = serde_json::from_str(json).unwrap();
        assert!(email_request.into_candidate().is_some());
    }

    #[test]
    fn test_malformed_json() {
        let json = r#"{"email": "user@example.com""#;
        let result: Result<EmailRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_response_for_valid_candidate() {
        let response = EmailValidationResponse::for_candidate(json!("test@example.com"));
        assert!(response.success);
        assert!(response.is_valid);
        assert_eq!(response.message, VALID_MESSAGE);
    }

    #[test]
    fn test_response_for_non_string_candidate() {
        let response = EmailValidationResponse::for_candidate(json!(123));
        assert!(response.success);
        assert!(!response.is_valid);
        assert_eq!(response.email, json!(123));
        assert_eq!(response.message, INVALID_MESSAGE);
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let response = EmailValidationResponse::for_candidate(json!("invalid-email"));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "email": "invalid-email",
                "isValid": false,
                "message": "Email is invalid"
            })
        );
    }

    #[test]
    fn test_error_response_shape() {
        let value = serde_json::to_value(ErrorResponse::new("Endpoint not found")).unwrap();
        assert_eq!(
            value,
            json!({ "success": false, "error": "Endpoint not found" })
        );
    }
}
