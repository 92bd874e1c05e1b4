//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages.

use std::fmt;

use crate::error::ConfigError;

/// A validated HubSpot API key (`hapikey`).
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output, since the key is a credential that grants full API access.
///
/// # Example
///
/// ```rust
/// use hubspot_contacts::ApiKey;
///
/// let key = ApiKey::new("demo").unwrap();
/// assert_eq!(key.as_ref(), "demo");
/// assert_eq!(format!("{key:?}"), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated OAuth bearer token.
///
/// Mutually exclusive with [`ApiKey`] at configuration time. The value is
/// masked in debug output.
///
/// # Example
///
/// ```rust
/// use hubspot_contacts::BearerToken;
///
/// let token = BearerToken::new("CJSP5qf1KhICAQEYs-gDIIGOBii1hQIyGQAf3xBKmlwHjX7OIpuIFEavB2-qYAGQsF4").unwrap();
/// assert_eq!(format!("{token:?}"), "BearerToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Creates a new validated bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBearerToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyBearerToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for BearerToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(*****)")
    }
}

/// A validated API base URL.
///
/// Accepts `http://` and `https://` URLs; trailing slashes are stripped so
/// request paths can always be appended verbatim. The default production
/// host is available via [`BaseUrl::default`].
///
/// # Example
///
/// ```rust
/// use hubspot_contacts::BaseUrl;
///
/// let url = BaseUrl::new("https://api.hubapi.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.hubapi.com");
///
/// assert_eq!(BaseUrl::default().as_ref(), "https://api.hubapi.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// The production HubSpot API host.
    pub const DEFAULT: &'static str = "https://api.hubapi.com";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is empty or does
    /// not start with an `http://` or `https://` scheme.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        if url.is_empty() || !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self(url))
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
