//! HTTP client for HubSpot API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests against the configured base URL. Each call is a single
//! synchronous round trip: there is no retry, caching, or rate-limit
//! handling.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, RequestError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{AuthMethod, HubspotConfig};

/// Library version from Cargo.toml, reported in the User-Agent header.
pub const LIB_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the HubSpot API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Credential attachment: `hapikey` query parameter or
///   `Authorization: Bearer` header, per the configuration
/// - Connect/read timeouts passed to the underlying transport
/// - JSON body parsing and error classification, including HubSpot's
///   in-band error envelope inside 2xx responses
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api.hubapi.com`), no trailing slash.
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Query parameter appended to every request in api-key mode.
    auth_param: Option<(&'static str, String)>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// Bearer-token configurations get an `Authorization` header on every
    /// request and no `hapikey` parameter; api-key configurations get the
    /// reverse.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &HubspotConfig) -> Self {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("HubSpot Contacts Library v{LIB_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let auth_param = match config.auth() {
            AuthMethod::ApiKey(key) => Some(("hapikey", key.as_ref().to_string())),
            AuthMethod::BearerToken(token) => {
                default_headers.insert(
                    "Authorization".to_string(),
                    format!("Bearer {}", token.as_ref()),
                );
                None
            }
        };

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.read_timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.open_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            default_headers,
            auth_param,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns true if this client authenticates with a `hapikey` query
    /// parameter (as opposed to a bearer header).
    #[must_use]
    pub const fn uses_api_key(&self) -> bool {
        self.auth_param.is_some()
    }

    /// Sends a request and classifies the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    /// - A 2xx response body carries HubSpot's error envelope (`Api`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_url, request.path);
        tracing::debug!(method = %request.method, path = %request.path, "sending request");

        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        // Repeated keys are meaningful for the batch endpoints, so the
        // query is a list of pairs, credential appended last.
        let mut query = request.query.clone();
        if let Some((key, value)) = &self.auth_param {
            query.push(((*key).to_string(), value.clone()));
        }
        req_builder = req_builder.query(&query);

        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();
        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            // Gateways can answer with HTML or plain text; keep the raw
            // text so error bodies stay diagnosable.
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        let response = HttpResponse::new(code, headers, body);
        tracing::debug!(path = %request.path, code, "Response: {code}");

        if !response.is_ok() {
            tracing::warn!(path = %request.path, code, "request failed");
            return Err(HttpError::Response(RequestError {
                code,
                body: response.body,
            }));
        }

        // The API sometimes reports failure inside a 200 body.
        if let Some(api_error) = response.api_error() {
            tracing::warn!(path = %request.path, code, "API reported an error in the response body");
            return Err(HttpError::Api(api_error));
        }

        Ok(response)
    }

    /// Parses response headers into a map keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
