//! HTTP response types for the HubSpot Contacts client.
//!
//! This module provides the [`HttpResponse`] type along with the in-band
//! error-envelope detection the contacts API requires: the remote side has
//! been observed to report failures inside HTTP 200 responses, so error
//! classification inspects the body shape, not just the status code.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::errors::ApiError;

/// Returns true when a response body matches HubSpot's error envelope.
///
/// The envelope is a JSON object whose top-level `status` field equals
/// `"error"` (typically alongside `message` and `correlationId`). This check
/// is deliberately a standalone function: the API's in-band error reporting
/// is a body-shape heuristic, not a status-code table, and callers that need
/// a different boundary can apply their own inspection to
/// [`HttpResponse::body`].
///
/// # Example
///
/// ```rust
/// use hubspot_contacts::clients::body_reports_error;
/// use serde_json::json;
///
/// assert!(body_reports_error(&json!({"status": "error", "message": "boom"})));
/// assert!(!body_reports_error(&json!({"vid": 82325, "properties": {}})));
/// ```
#[must_use]
pub fn body_reports_error(body: &Value) -> bool {
    body.get("status").and_then(Value::as_str) == Some("error")
}

/// A parsed HTTP response from the HubSpot API.
///
/// # Example
///
/// ```rust
/// use hubspot_contacts::clients::HttpResponse;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(200, HashMap::new(), serde_json::json!({"vid": 82325}));
/// assert!(response.is_ok());
/// assert!(response.api_error().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase header name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed JSON body. Empty bodies parse to an empty object;
    /// non-JSON bodies are wrapped as `{"raw_body": text}`.
    pub body: Value,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Value) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns true if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `ApiError` carried in the body, if the body matches the
    /// error envelope shape.
    ///
    /// Note this is independent of [`is_ok`](Self::is_ok): a 200 response
    /// can still carry an error envelope.
    #[must_use]
    pub fn api_error(&self) -> Option<ApiError> {
        if body_reports_error(&self.body) {
            Some(ApiError::from_body(self.code, &self.body))
        } else {
            None
        }
    }
}
