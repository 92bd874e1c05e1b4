//! HTTP client types for HubSpot API communication.
//!
//! This module provides the foundational HTTP layer for making authenticated
//! requests against the configured base URL: request building, response
//! parsing, and error classification (including HubSpot's in-band error
//! envelope inside 2xx responses).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, DELETE)
//! - [`RequestError`], [`ApiError`], [`HttpError`]: The error taxonomy
//!
//! # Example
//!
//! ```rust,ignore
//! use hubspot_contacts::clients::{HttpClient, HttpMethod, HttpRequest};
//! use hubspot_contacts::{ApiKey, HubspotConfig};
//!
//! let config = HubspotConfig::builder()
//!     .api_key(ApiKey::new("demo").unwrap())
//!     .build()?;
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/contacts/v1/contact/vid/82325/profile")
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Failure Behavior
//!
//! Every call is exactly one HTTP round trip. There is no retry, caching,
//! or rate-limit handling: a failed or slow request simply fails or blocks
//! the caller for the configured timeout.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ApiError, HttpError, InvalidRequestError, RequestError};
pub use http_client::{HttpClient, LIB_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{body_reports_error, HttpResponse};
