//! HTTP-specific error types for the HubSpot Contacts client.
//!
//! # Error Taxonomy
//!
//! - [`RequestError`]: the HTTP status was outside 2xx
//! - [`ApiError`]: the API reported an error inside a nominally successful
//!   response body (HubSpot sometimes wraps batch failures in a 200)
//! - [`InvalidRequestError`]: a request failed validation before sending
//! - [`HttpError`]: unified error type encompassing all of the above
//!
//! All errors propagate synchronously to the caller; nothing is swallowed
//! or retried internally.
//!
//! # Example
//!
//! ```rust,ignore
//! match client.find_by_id(9_999_999).await {
//!     Ok(contact) => println!("found {}", contact.vid()),
//!     Err(HttpError::Response(e)) => println!("HTTP {}: {}", e.code, e.body),
//!     Err(HttpError::Api(e)) => println!("API error: {e}"),
//!     Err(e) => println!("other failure: {e}"),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

/// Error returned when a request receives a non-2xx response.
///
/// Carries the HTTP status and the parsed response body for diagnostics.
///
/// # Example
///
/// ```rust
/// use hubspot_contacts::clients::RequestError;
///
/// let error = RequestError {
///     code: 404,
///     body: serde_json::json!({"status": "error", "message": "contact does not exist"}),
/// };
///
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Debug, Error)]
#[error("HubSpot request failed with status {code}: {body}")]
pub struct RequestError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The parsed JSON response body.
    pub body: Value,
}

/// Error returned when the API signals failure inside a successful response.
///
/// HubSpot's contacts API has been observed to wrap batch errors in an HTTP
/// 200 whose body carries an error envelope (`"status": "error"`). This
/// error is raised by inspecting the response body shape, never the status
/// code alone.
#[derive(Debug, Error)]
#[error("HubSpot API error (HTTP {code}): {}", message.as_deref().unwrap_or("unknown error"))]
pub struct ApiError {
    /// The HTTP status code of the response (often 200).
    pub code: u16,
    /// The `status` field of the error envelope, when present.
    pub status: Option<String>,
    /// The `message` field of the error envelope, when present.
    pub message: Option<String>,
    /// The `correlationId` field of the error envelope, when present.
    pub correlation_id: Option<String>,
    /// The full parsed response body.
    pub body: Value,
}

impl ApiError {
    /// Builds an `ApiError` from a response body that matched the error
    /// envelope shape.
    #[must_use]
    pub fn from_body(code: u16, body: &Value) -> Self {
        let field = |name: &str| {
            body.get(name)
                .and_then(Value::as_str)
                .map(ToString::to_string)
        };
        Self {
            code,
            status: field("status"),
            message: field("message"),
            correlation_id: field("correlationId"),
            body: body.clone(),
        }
    }
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// A POST request was built without a body.
    #[error("Cannot use {method} without specifying a body.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related failures.
///
/// Use pattern matching to distinguish transport failures from API-level
/// ones. [`ApiError`] is the body-shape counterpart to [`RequestError`]:
/// the former means the API said "error" in a 2xx body, the latter means
/// the status code itself was a failure.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Non-2xx HTTP response.
    #[error(transparent)]
    Response(#[from] RequestError),

    /// Error envelope inside a nominally successful response.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Request validation failed before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// Network or connection error from the transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not have the expected shape.
    #[error("Unexpected response body: {reason}")]
    UnexpectedBody {
        /// Description of what was missing or malformed.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_error_message_includes_status_and_body() {
        let error = RequestError {
            code: 404,
            body: json!({"status": "error", "message": "contact does not exist"}),
        };
        let message = error.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("contact does not exist"));
    }

    #[test]
    fn test_api_error_from_body_extracts_envelope_fields() {
        let body = json!({
            "status": "error",
            "message": "internal error",
            "correlationId": "6d2a8c28-6322-4c37-bbbb-9b52f9e17f92"
        });
        let error = ApiError::from_body(200, &body);

        assert_eq!(error.code, 200);
        assert_eq!(error.status.as_deref(), Some("error"));
        assert_eq!(error.message.as_deref(), Some("internal error"));
        assert_eq!(
            error.correlation_id.as_deref(),
            Some("6d2a8c28-6322-4c37-bbbb-9b52f9e17f92")
        );
    }

    #[test]
    fn test_api_error_message_falls_back_when_absent() {
        let error = ApiError::from_body(200, &json!({"status": "error"}));
        assert!(error.to_string().contains("unknown error"));
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying a body.");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let request_error: &dyn std::error::Error = &RequestError {
            code: 400,
            body: json!({}),
        };
        let _ = request_error;

        let api_error: &dyn std::error::Error = &ApiError::from_body(200, &json!({}));
        let _ = api_error;
    }

    #[test]
    fn test_http_error_wraps_request_error_transparently() {
        let error = HttpError::from(RequestError {
            code: 409,
            body: json!({"message": "contact already exists"}),
        });
        assert!(error.to_string().contains("409"));
        assert!(matches!(error, HttpError::Response(_)));
    }
}
