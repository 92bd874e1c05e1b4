//! Configuration error types for the HubSpot Contacts client.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. A configuration error is always raised before any
//! request is issued.
//!
//! # Example
//!
//! ```rust
//! use hubspot_contacts::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building or validating the client configuration.
///
/// Each variant provides a clear, actionable message. Credential validation
/// enforces that exactly one of the API key or bearer token is configured.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither an API key nor a bearer token was provided.
    #[error("You must provide either an api_key or a bearer_token.")]
    MissingCredentials,

    /// Both an API key and a bearer token were provided.
    #[error("api_key and bearer_token are mutually exclusive. Provide exactly one.")]
    ConflictingCredentials,

    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid HubSpot API key.")]
    EmptyApiKey,

    /// Bearer token cannot be empty.
    #[error("Bearer token cannot be empty. Please provide a valid HubSpot access token.")]
    EmptyBearerToken,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme (e.g., 'https://api.hubapi.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
