//! Shopify authorization URL generation.
//!
//! This module provides the [`begin_auth`] function for generating the
//! Shopify OAuth authorization URL and the [`BeginAuthResult`] struct
//! containing that URL plus the callback URL registered with Shopify.
//!
//! # Overview
//!
//! `begin_auth` is the first step of the authorization code flow: the
//! merchant is redirected to `https://{shop}/admin/oauth/authorize`, grants
//! the requested scopes, and Shopify redirects back to the callback URL with
//! an authorization code.
//!
//! # Example
//!
//! ```rust
//! use portal_auth::{PortalConfig, ApiKey, HostUrl, ShopDomain};
//! use portal_auth::auth::shopify::begin_auth;
//!
//! let config = PortalConfig::builder()
//!     .shopify_api_key(ApiKey::new("your-api-key").unwrap())
//!     .app_url(HostUrl::new("https://portal.example.com").unwrap())
//!     .build();
//!
//! let shop = ShopDomain::new("acme.myshopify.com").unwrap();
//! let result = begin_auth(&config, &shop).unwrap();
//!
//! assert!(result.auth_url.starts_with("https://acme.myshopify.com/admin/oauth/authorize?"));
//! assert_eq!(result.callback_url, "https://portal.example.com/api/auth/callback/shopify");
//! ```

use crate::config::{PortalConfig, ShopDomain};
use crate::error::ConfigError;

/// OAuth scopes requested from every connected store, in the order they
/// appear on the authorization URL.
pub const ACCESS_SCOPES: [&str; 3] = ["read_products", "write_products", "read_orders"];

/// Path on the application that receives the Shopify OAuth callback.
const CALLBACK_PATH: &str = "/api/auth/callback/shopify";

/// Result of initiating Shopify authorization.
///
/// Contains the authorization URL to redirect the merchant to and the
/// callback URL Shopify will redirect back to once access is granted. The
/// callback URL must match one of the redirect URLs registered on the
/// Shopify app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeginAuthResult {
    /// The full authorization URL to redirect the merchant to.
    pub auth_url: String,

    /// The callback URL embedded in `auth_url` as its `redirect_uri`.
    pub callback_url: String,
}

/// Builds the Shopify authorization URL pair for a shop.
///
/// The authorization URL carries three query parameters: `client_id` (the
/// configured API key), `scope` (the fixed comma-joined [`ACCESS_SCOPES`]
/// list, left unencoded as Shopify expects), and `redirect_uri` (the
/// percent-encoded callback URL).
///
/// # Arguments
///
/// * `config` - Portal configuration (must have the Shopify API key and the
///   application base URL set)
/// * `shop` - The shop domain to authorize against
///
/// # Errors
///
/// Returns [`ConfigError::MissingShopifyApiKey`] or
/// [`ConfigError::MissingAppUrl`] if the corresponding configuration is
/// absent. Both indicate a deployment defect rather than a bad request.
///
/// # Example
///
/// ```rust
/// use portal_auth::{PortalConfig, ApiKey, HostUrl, ShopDomain};
/// use portal_auth::auth::shopify::begin_auth;
///
/// let config = PortalConfig::builder()
///     .shopify_api_key(ApiKey::new("api-key").unwrap())
///     .app_url(HostUrl::new("https://portal.example.com").unwrap())
///     .build();
///
/// let shop = ShopDomain::new("acme.myshopify.com").unwrap();
/// let result = begin_auth(&config, &shop).unwrap();
/// assert!(result.auth_url.contains("scope=read_products,write_products,read_orders"));
/// ```
pub fn begin_auth(
    config: &PortalConfig,
    shop: &ShopDomain,
) -> Result<BeginAuthResult, ConfigError> {
    let api_key = config
        .shopify_api_key()
        .ok_or(ConfigError::MissingShopifyApiKey)?;
    let app_url = config.app_url().ok_or(ConfigError::MissingAppUrl)?;

    let callback_url = format!("{}{CALLBACK_PATH}", app_url.as_ref());

    // Shopify expects the comma-joined scope list verbatim; only the
    // redirect_uri value is percent-encoded.
    let auth_url = format!(
        "https://{}/admin/oauth/authorize?client_id={}&scope={}&redirect_uri={}",
        shop.as_ref(),
        api_key.as_ref(),
        ACCESS_SCOPES.join(","),
        urlencoding::encode(&callback_url),
    );

    Ok(BeginAuthResult {
        auth_url,
        callback_url,
    })
}

// Verify BeginAuthResult is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BeginAuthResult>();
};
