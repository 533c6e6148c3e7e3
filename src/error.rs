//! Error types for portal configuration.
//!
//! This module contains the configuration error type used throughout the
//! crate. Configuration problems indicate a deployment defect, not a
//! request-level failure: they are raised at the point of use and must not
//! be retried.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages name the environment variable or
//! builder method that needs attention.
//!
//! # Example
//!
//! ```rust
//! use portal_auth::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building or using portal configuration.
///
/// This enum covers both malformed values rejected at construction and
/// required values found to be absent at the point of use. Each variant
/// provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Shopify API key cannot be empty.
    #[error("Shopify API key cannot be empty. Please provide a valid API key.")]
    EmptyApiKey,

    /// Shopify API secret key cannot be empty.
    #[error("Shopify API secret key cannot be empty. Please provide a valid API secret key.")]
    EmptyApiSecretKey,

    /// Google client ID cannot be empty.
    #[error("Google client ID cannot be empty. Please provide a valid OAuth client ID.")]
    EmptyClientId,

    /// Google client secret cannot be empty.
    #[error("Google client secret cannot be empty. Please provide a valid OAuth client secret.")]
    EmptyClientSecret,

    /// Session signing secret cannot be empty.
    #[error("Session signing secret cannot be empty. Please provide a non-empty secret.")]
    EmptySessionSecret,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. The shop domain must be a non-empty domain string.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://portal.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Shopify API key is not configured.
    #[error("Shopify API key is not configured. Set SHOPIFY_API_KEY or call shopify_api_key() on the builder.")]
    MissingShopifyApiKey,

    /// Shopify API secret is not configured.
    #[error("Shopify API secret is not configured. Set SHOPIFY_API_SECRET or call shopify_api_secret() on the builder.")]
    MissingShopifyApiSecret,

    /// Application base URL is not configured.
    #[error("Application base URL is not configured. Set SHOPIFY_APP_URL or call app_url() on the builder.")]
    MissingAppUrl,

    /// Google client ID is not configured.
    #[error("Google client ID is not configured. Set GOOGLE_CLIENT_ID or call google_client_id() on the builder.")]
    MissingGoogleClientId,

    /// Google client secret is not configured.
    #[error("Google client secret is not configured. Set GOOGLE_CLIENT_SECRET or call google_client_secret() on the builder.")]
    MissingGoogleClientSecret,

    /// Session signing secret is not configured.
    #[error("Session signing secret is not configured. Set SESSION_SECRET or call session_secret() on the builder.")]
    MissingSessionSecret,
}
