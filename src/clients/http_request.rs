//! HTTP request types for the HubSpot Contacts client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests against the contacts API.

use std::fmt;

use crate::clients::errors::InvalidRequestError;

/// HTTP methods used by the contacts API.
///
/// The contacts v1 API uses GET for reads, POST for writes (including
/// updates), and DELETE for removal; there is no PUT.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving contacts.
    Get,
    /// HTTP POST method for creating and updating contacts.
    Post,
    /// HTTP DELETE method for removing contacts.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// An HTTP request to be sent to the HubSpot API.
///
/// Query parameters are kept as an ordered list of pairs rather than a map:
/// the batch lookup endpoints take the same key repeated
/// (`vid=1&vid=2&vid=3`), which a map cannot represent.
///
/// # Example
///
/// ```rust
/// use hubspot_contacts::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/contacts/v1/contact/vids/batch/")
///     .query_param("vid", "82325")
///     .query_param("vid", "82326")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.query.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The path relative to the base URL, starting with `/`.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters, in insertion order, repeated keys permitted.
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::MissingBody`] if the method is POST
    /// and no body was provided.
    pub fn verify(&self) -> Result<(), InvalidRequestError> {
        if matches!(self.method, HttpMethod::Post) && self.body.is_none() {
            return Err(InvalidRequestError::MissingBody {
                method: self.method.to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Vec<(String, String)>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: Vec::new(),
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Appends a single query parameter. May be called repeatedly with the
    /// same key.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Builds and validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if validation fails; see
    /// [`HttpRequest::verify`].
    pub fn build(self) -> Result<HttpRequest, InvalidRequestError> {
        let request = HttpRequest {
            method: self.method,
            path: self.path,
            body: self.body,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_request_builds_without_body() {
        let request = HttpRequest::builder(HttpMethod::Get, "/contacts/v1/contact/vid/1/profile")
            .build()
            .unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert!(request.body.is_none());
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_post_request_requires_body() {
        let result = HttpRequest::builder(HttpMethod::Post, "/contacts/v1/contact").build();
        assert!(matches!(
            result,
            Err(InvalidRequestError::MissingBody { .. })
        ));
    }

    #[test]
    fn test_post_request_with_body_builds() {
        let request = HttpRequest::builder(HttpMethod::Post, "/contacts/v1/contact")
            .body(json!({"properties": []}))
            .build()
            .unwrap();
        assert!(request.body.is_some());
    }

    #[test]
    fn test_delete_request_needs_no_body() {
        let request = HttpRequest::builder(HttpMethod::Delete, "/contacts/v1/contact/vid/1")
            .build()
            .unwrap();
        assert_eq!(request.method, HttpMethod::Delete);
    }

    #[test]
    fn test_repeated_query_keys_are_preserved_in_order() {
        let request = HttpRequest::builder(HttpMethod::Get, "/contacts/v1/contact/vids/batch/")
            .query_param("vid", "1")
            .query_param("vid", "2")
            .query_param("vid", "3")
            .build()
            .unwrap();

        let values: Vec<&str> = request
            .query
            .iter()
            .filter(|(k, _)| k == "vid")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(values, ["1", "2", "3"]);
    }

    #[test]
    fn test_http_method_display_is_lowercase() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }
}
