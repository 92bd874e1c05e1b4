//! # HubSpot Contacts API client
//!
//! A thin, typed Rust client for the HubSpot CRM Contacts v1 REST API:
//! create, read, update, delete, search, merge, and batch lookup of
//! contacts.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`HubspotConfig`] and [`HubspotConfigBuilder`]
//! - Validated newtypes for credentials and the base URL
//! - Authentication via an API key query parameter or a bearer token header
//!   (mutually exclusive, validated at build time)
//! - An async HTTP layer that classifies failures into typed errors,
//!   including HubSpot's in-band error envelope inside 200 responses
//! - The [`Contact`] record type and the [`ContactsClient`] operations
//!
//! ## Quick Start
//!
//! ```rust
//! use hubspot_contacts::{ApiKey, HubspotConfig};
//!
//! let config = HubspotConfig::builder()
//!     .api_key(ApiKey::new("demo").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.hubapi.com");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use hubspot_contacts::{BearerToken, ContactsClient, HubspotConfig};
//! use serde_json::{json, Map};
//!
//! let config = HubspotConfig::builder()
//!     .bearer_token(BearerToken::new("my-access-token")?)
//!     .build()?;
//! let client = ContactsClient::new(&config);
//!
//! // Look up a contact three ways
//! let by_id = client.find_by_id(82325).await?;
//! let by_email = client.find_by_email("testingapis@hubspot.com").await?;
//! let by_utk = client.find_by_utk("f844d2217850188692f2610c717c2e9b").await?;
//!
//! // Create, update, destroy
//! let mut properties = Map::new();
//! properties.insert("firstname".to_string(), json!("Leslie"));
//! let mut contact = client.create("leslie@example.com", properties).await?;
//!
//! let mut update = Map::new();
//! update.insert("firstname".to_string(), json!("Ben"));
//! client.update(&mut contact, update).await?;
//! assert_eq!(contact["firstname"], json!("Ben"));
//!
//! client.destroy(&mut contact).await?;
//! assert!(contact.destroyed());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed to the
//!   client on construction
//! - **Fail-fast validation**: credentials are validated at build time;
//!   exactly one of api key or bearer token must be set
//! - **Typed errors**: non-2xx responses, in-band API errors, and transport
//!   failures are distinct variants, never swallowed or retried
//! - **Thread-safe**: configuration and clients are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//!
//! Out of scope by design: connection pooling, retry/backoff, rate-limit
//! handling, streaming, and caching. Each call is one HTTP round trip.

pub mod clients;
pub mod config;
pub mod contacts;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, AuthMethod, BaseUrl, BearerToken, HubspotConfig, HubspotConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidRequestError, RequestError,
};

// Re-export the contacts resource types
pub use contacts::{
    Contact, ContactPage, ContactUpsert, ContactsClient, ListParams, SearchParams, SearchResults,
};
