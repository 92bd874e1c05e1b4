//! Configuration types for the HubSpot Contacts client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HubspotConfig`]: The configuration struct holding all client settings
//! - [`HubspotConfigBuilder`]: A builder for constructing [`HubspotConfig`] instances
//! - [`AuthMethod`]: The credential attached to outgoing requests
//! - [`ApiKey`], [`BearerToken`], [`BaseUrl`]: Validated newtypes
//!
//! Configuration is instance-based and passed to the client on construction:
//! there is no process-wide singleton. The "configure once, use everywhere"
//! ergonomics come from building one `HubspotConfig` and sharing it.
//!
//! # Example
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

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl, BearerToken};

use std::time::Duration;

use crate::error::ConfigError;

/// The credential a client attaches to outgoing requests.
///
/// Exactly one authentication method is configured per [`HubspotConfig`]:
/// an API key sent as the `hapikey` query parameter, or an OAuth access
/// token sent as an `Authorization: Bearer` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthMethod {
    /// Authenticate with a `hapikey` query parameter on every request.
    ApiKey(ApiKey),
    /// Authenticate with an `Authorization: Bearer <token>` header.
    BearerToken(BearerToken),
}

/// Configuration for the HubSpot Contacts client.
///
/// Holds the credential, base URL, and transport timeouts, plus passthrough
/// OAuth app settings that HubSpot accepts but this client does not use for
/// request building.
///
/// # Thread Safety
///
/// `HubspotConfig` is `Clone`, `Send`, and `Sync`, and immutable after
/// construction. "Resetting" the configuration means dropping it and
/// building a fresh one from defaults; a builder without a credential fails
/// validation, so no request can be issued from a reset state.
///
/// # Example
///
/// ```rust
/// use hubspot_contacts::{BearerToken, HubspotConfig};
/// use std::time::Duration;
///
/// let config = HubspotConfig::builder()
///     .bearer_token(BearerToken::new("my-access-token").unwrap())
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
///
/// assert!(config.api_key().is_none());
/// assert_eq!(config.read_timeout(), Some(Duration::from_secs(10)));
/// ```
#[derive(Clone, Debug)]
pub struct HubspotConfig {
    auth: AuthMethod,
    base_url: BaseUrl,
    portal_id: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    redirect_uri: Option<String>,
    read_timeout: Option<Duration>,
    open_timeout: Option<Duration>,
}

impl HubspotConfig {
    /// Creates a new builder for constructing a `HubspotConfig`.
    #[must_use]
    pub fn builder() -> HubspotConfigBuilder {
        HubspotConfigBuilder::new()
    }

    /// Returns the configured authentication method.
    #[must_use]
    pub const fn auth(&self) -> &AuthMethod {
        &self.auth
    }

    /// Returns the API key, if API-key authentication is configured.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        match &self.auth {
            AuthMethod::ApiKey(key) => Some(key),
            AuthMethod::BearerToken(_) => None,
        }
    }

    /// Returns the bearer token, if bearer-token authentication is configured.
    #[must_use]
    pub const fn bearer_token(&self) -> Option<&BearerToken> {
        match &self.auth {
            AuthMethod::BearerToken(token) => Some(token),
            AuthMethod::ApiKey(_) => None,
        }
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the portal (account) identifier, if configured.
    ///
    /// The portal id is a passthrough setting: recognized and stored, but
    /// not used when building requests.
    #[must_use]
    pub fn portal_id(&self) -> Option<&str> {
        self.portal_id.as_deref()
    }

    /// Returns the OAuth client id, if configured (passthrough).
    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Returns the OAuth client secret, if configured (passthrough).
    #[must_use]
    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    /// Returns the OAuth redirect URI, if configured (passthrough).
    #[must_use]
    pub fn redirect_uri(&self) -> Option<&str> {
        self.redirect_uri.as_deref()
    }

    /// Returns the read timeout applied to each request, if configured.
    #[must_use]
    pub const fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout
    }

    /// Returns the connection-open timeout, if configured.
    #[must_use]
    pub const fn open_timeout(&self) -> Option<Duration> {
        self.open_timeout
    }
}

// Verify HubspotConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HubspotConfig>();
};

/// Builder for constructing [`HubspotConfig`] instances.
///
/// Exactly one of [`api_key`](Self::api_key) and
/// [`bearer_token`](Self::bearer_token) must be set; all other fields have
/// defaults.
///
/// # Defaults
///
/// - `base_url`: `https://api.hubapi.com`
/// - `portal_id`, `client_id`, `client_secret`, `redirect_uri`: `None`
/// - `read_timeout` / `open_timeout`: `None`, individually overridable;
///   [`timeout`](Self::timeout) fills whichever per-phase value is absent
#[derive(Debug, Default)]
pub struct HubspotConfigBuilder {
    api_key: Option<ApiKey>,
    bearer_token: Option<BearerToken>,
    base_url: Option<BaseUrl>,
    portal_id: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    redirect_uri: Option<String>,
    timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    open_timeout: Option<Duration>,
}

impl HubspotConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key credential.
    ///
    /// Mutually exclusive with [`bearer_token`](Self::bearer_token).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the bearer token credential.
    ///
    /// Mutually exclusive with [`api_key`](Self::api_key).
    #[must_use]
    pub fn bearer_token(mut self, token: BearerToken) -> Self {
        self.bearer_token = Some(token);
        self
    }

    /// Sets the API base URL. Defaults to the production host.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the portal (account) identifier.
    #[must_use]
    pub fn portal_id(mut self, portal_id: impl Into<String>) -> Self {
        self.portal_id = Some(portal_id.into());
        self
    }

    /// Sets the OAuth client id (passthrough).
    #[must_use]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Sets the OAuth client secret (passthrough).
    #[must_use]
    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Sets the OAuth redirect URI (passthrough).
    #[must_use]
    pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Sets a shared timeout used for both read and open phases.
    ///
    /// Per-phase values set via [`read_timeout`](Self::read_timeout) or
    /// [`open_timeout`](Self::open_timeout) take precedence.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the read timeout for each request.
    #[must_use]
    pub const fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Sets the connection-open timeout.
    #[must_use]
    pub const fn open_timeout(mut self, timeout: Duration) -> Self {
        self.open_timeout = Some(timeout);
        self
    }

    /// Builds the [`HubspotConfig`], validating the credential settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if neither an API key nor
    /// a bearer token was set, and [`ConfigError::ConflictingCredentials`]
    /// if both were.
    pub fn build(self) -> Result<HubspotConfig, ConfigError> {
        let auth = match (self.api_key, self.bearer_token) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingCredentials),
            (None, None) => return Err(ConfigError::MissingCredentials),
            (Some(key), None) => AuthMethod::ApiKey(key),
            (None, Some(token)) => AuthMethod::BearerToken(token),
        };

        Ok(HubspotConfig {
            auth,
            base_url: self.base_url.unwrap_or_default(),
            portal_id: self.portal_id,
            client_id: self.client_id,
            client_secret: self.client_secret,
            redirect_uri: self.redirect_uri,
            read_timeout: self.read_timeout.or(self.timeout),
            open_timeout: self.open_timeout.or(self.timeout),
        })
    }
}
