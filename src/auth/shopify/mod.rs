//! Shopify OAuth for connecting a merchant's store.
//!
//! This module implements the two halves of the Shopify authorization code
//! flow the portal uses:
//!
//! 1. **Authorization initiation** ([`begin_auth`]): build the authorization
//!    URL for a shop, along with the callback URL Shopify will redirect to.
//! 2. **Code exchange** ([`exchange_code`]): trade the authorization code
//!    from the callback for a permanent access token.
//!
//! The two halves differ deliberately in how they fail. `begin_auth` returns
//! a [`ConfigError`](crate::ConfigError) when the app is misconfigured,
//! because a broken deployment should be loud. `exchange_code` never returns
//! an error: bad codes, upstream rejections, and transport failures all
//! collapse to `None` with a diagnostic log line, and the caller treats the
//! sign-in as denied.
//!
//! # Example
//!
//! ```rust,ignore
//! use portal_auth::{PortalConfig, ShopDomain};
//! use portal_auth::auth::shopify::{begin_auth, exchange_code};
//!
//! let config = PortalConfig::from_env()?;
//! let shop = ShopDomain::new("acme.myshopify.com")?;
//!
//! // Step 1: redirect the merchant to Shopify
//! let urls = begin_auth(&config, &shop)?;
//! // Redirect to urls.auth_url; Shopify calls back at urls.callback_url
//!
//! // Step 2: in the callback handler, exchange the code
//! if let Some(access_token) = exchange_code(&config, &shop, &code).await {
//!     // store the token on the merchant's session
//! }
//! ```

mod begin_auth;
mod token_exchange;

pub use begin_auth::{begin_auth, BeginAuthResult, ACCESS_SCOPES};
pub use token_exchange::{access_token_url, exchange_code, request_access_token};
