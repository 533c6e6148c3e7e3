//! Configuration types for the merchant portal.
//!
//! This module provides the process-wide configuration struct and the
//! validated newtypes it is built from. Configuration is loaded once (either
//! from the environment or through the builder), kept immutable, and passed
//! explicitly to the components that need it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`PortalConfig`]: The immutable configuration struct
//! - [`PortalConfigBuilder`]: A builder for constructing [`PortalConfig`] instances
//! - [`ApiKey`] / [`ApiSecretKey`]: Validated Shopify credentials
//! - [`ClientId`] / [`ClientSecret`]: Validated Google OAuth credentials
//! - [`SessionSecret`]: The session token signing secret
//! - [`ShopDomain`]: A shop domain validated for non-emptiness
//! - [`HostUrl`]: The validated application base URL
//!
//! All provider credentials are optional at build time; the operation that
//! needs a missing value reports the [`ConfigError`](crate::ConfigError) at
//! its point of use.
//!
//! # Example
//!
//! ```rust
//! use portal_auth::{PortalConfig, ApiKey, ApiSecretKey, HostUrl};
//!
//! let config = PortalConfig::builder()
//!     .shopify_api_key(ApiKey::new("my-api-key").unwrap())
//!     .shopify_api_secret(ApiSecretKey::new("my-secret").unwrap())
//!     .app_url(HostUrl::new("https://portal.example.com").unwrap())
//!     .build();
//!
//! assert!(config.shopify_api_key().is_some());
//! assert!(config.google_client_id().is_none());
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiSecretKey, ClientId, ClientSecret, HostUrl, SessionSecret, ShopDomain};

use crate::error::ConfigError;

/// Immutable configuration for the merchant portal.
///
/// Holds the Shopify app credentials, the Google OAuth client credentials,
/// the application base URL, and the session signing secret. Every field is
/// optional: a deployment that only uses Google sign-in never has to supply
/// Shopify keys, and vice versa. Operations that require a missing value
/// fail with a [`ConfigError`] when they are called.
///
/// # Thread Safety
///
/// `PortalConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks. It is never mutated after construction.
///
/// # Example
///
/// ```rust
/// use portal_auth::{PortalConfig, ApiKey};
///
/// let config = PortalConfig::builder()
///     .shopify_api_key(ApiKey::new("key").unwrap())
///     .build();
///
/// assert_eq!(config.shopify_api_key().unwrap().as_ref(), "key");
/// ```
#[derive(Clone, Debug, Default)]
pub struct PortalConfig {
    shopify_api_key: Option<ApiKey>,
    shopify_api_secret: Option<ApiSecretKey>,
    app_url: Option<HostUrl>,
    google_client_id: Option<ClientId>,
    google_client_secret: Option<ClientSecret>,
    session_secret: Option<SessionSecret>,
}

impl PortalConfig {
    /// Creates a new builder for constructing a `PortalConfig`.
    #[must_use]
    pub fn builder() -> PortalConfigBuilder {
        PortalConfigBuilder::new()
    }

    /// Loads configuration from the process environment.
    ///
    /// Reads `SHOPIFY_API_KEY`, `SHOPIFY_API_SECRET`, `SHOPIFY_APP_URL`
    /// (falling back to `APP_URL`), `GOOGLE_CLIENT_ID`,
    /// `GOOGLE_CLIENT_SECRET`, and `SESSION_SECRET`. Unset or empty
    /// variables leave the corresponding field unconfigured; missing values
    /// surface later, at the operation that needs them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the application base URL
    /// is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        fn non_empty_var(name: &str) -> Option<String> {
            std::env::var(name)
                .ok()
                .filter(|value| !value.trim().is_empty())
        }

        let mut builder = Self::builder();

        if let Some(key) = non_empty_var("SHOPIFY_API_KEY") {
            builder = builder.shopify_api_key(ApiKey::new(key)?);
        }
        if let Some(secret) = non_empty_var("SHOPIFY_API_SECRET") {
            builder = builder.shopify_api_secret(ApiSecretKey::new(secret)?);
        }
        if let Some(url) = non_empty_var("SHOPIFY_APP_URL").or_else(|| non_empty_var("APP_URL")) {
            builder = builder.app_url(HostUrl::new(url)?);
        }
        if let Some(id) = non_empty_var("GOOGLE_CLIENT_ID") {
            builder = builder.google_client_id(ClientId::new(id)?);
        }
        if let Some(secret) = non_empty_var("GOOGLE_CLIENT_SECRET") {
            builder = builder.google_client_secret(ClientSecret::new(secret)?);
        }
        if let Some(secret) = non_empty_var("SESSION_SECRET") {
            builder = builder.session_secret(SessionSecret::new(secret)?);
        }

        Ok(builder.build())
    }

    /// Returns the Shopify API key, if configured.
    #[must_use]
    pub const fn shopify_api_key(&self) -> Option<&ApiKey> {
        self.shopify_api_key.as_ref()
    }

    /// Returns the Shopify API secret, if configured.
    #[must_use]
    pub const fn shopify_api_secret(&self) -> Option<&ApiSecretKey> {
        self.shopify_api_secret.as_ref()
    }

    /// Returns the application base URL, if configured.
    #[must_use]
    pub const fn app_url(&self) -> Option<&HostUrl> {
        self.app_url.as_ref()
    }

    /// Returns the Google OAuth client ID, if configured.
    #[must_use]
    pub const fn google_client_id(&self) -> Option<&ClientId> {
        self.google_client_id.as_ref()
    }

    /// Returns the Google OAuth client secret, if configured.
    #[must_use]
    pub const fn google_client_secret(&self) -> Option<&ClientSecret> {
        self.google_client_secret.as_ref()
    }

    /// Returns the session signing secret, if configured.
    #[must_use]
    pub const fn session_secret(&self) -> Option<&SessionSecret> {
        self.session_secret.as_ref()
    }
}

// Verify PortalConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PortalConfig>();
};

/// Builder for constructing [`PortalConfig`] instances.
///
/// Every field is optional, so `build()` cannot fail; operations that need
/// an unset value report it when they run.
///
/// # Example
///
/// ```rust
/// use portal_auth::{PortalConfig, ApiKey, ApiSecretKey, HostUrl, SessionSecret};
///
/// let config = PortalConfig::builder()
///     .shopify_api_key(ApiKey::new("key").unwrap())
///     .shopify_api_secret(ApiSecretKey::new("secret").unwrap())
///     .app_url(HostUrl::new("https://portal.example.com").unwrap())
///     .session_secret(SessionSecret::new("signing-secret").unwrap())
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct PortalConfigBuilder {
    shopify_api_key: Option<ApiKey>,
    shopify_api_secret: Option<ApiSecretKey>,
    app_url: Option<HostUrl>,
    google_client_id: Option<ClientId>,
    google_client_secret: Option<ClientSecret>,
    session_secret: Option<SessionSecret>,
}

impl PortalConfigBuilder {
    /// Creates a new builder with no values set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Shopify API key.
    #[must_use]
    pub fn shopify_api_key(mut self, key: ApiKey) -> Self {
        self.shopify_api_key = Some(key);
        self
    }

    /// Sets the Shopify API secret.
    #[must_use]
    pub fn shopify_api_secret(mut self, secret: ApiSecretKey) -> Self {
        self.shopify_api_secret = Some(secret);
        self
    }

    /// Sets the application base URL used to build OAuth callback URLs.
    #[must_use]
    pub fn app_url(mut self, url: HostUrl) -> Self {
        self.app_url = Some(url);
        self
    }

    /// Sets the Google OAuth client ID.
    #[must_use]
    pub fn google_client_id(mut self, id: ClientId) -> Self {
        self.google_client_id = Some(id);
        self
    }

    /// Sets the Google OAuth client secret.
    #[must_use]
    pub fn google_client_secret(mut self, secret: ClientSecret) -> Self {
        self.google_client_secret = Some(secret);
        self
    }

    /// Sets the session token signing secret.
    #[must_use]
    pub fn session_secret(mut self, secret: SessionSecret) -> Self {
        self.session_secret = Some(secret);
        self
    }

    /// Builds the [`PortalConfig`].
    #[must_use]
    pub fn build(self) -> PortalConfig {
        PortalConfig {
            shopify_api_key: self.shopify_api_key,
            shopify_api_secret: self.shopify_api_secret,
            app_url: self.app_url,
            google_client_id: self.google_client_id,
            google_client_secret: self.google_client_secret,
            session_secret: self.session_secret,
        }
    }
}
