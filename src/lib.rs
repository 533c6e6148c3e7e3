//! # Merchant Portal Auth
//!
//! The sign-in and session core for a merchant portal that connects
//! Shopify stores and Google accounts: provider credential handling,
//! OAuth flows, and signed stateless session tokens.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`PortalConfig`] and [`PortalConfigBuilder`]
//! - Validated newtypes for credentials and domain values
//! - The Shopify admin OAuth flow via [`auth::shopify`] (authorization URL
//!   and code exchange)
//! - A thin Google OAuth client via [`auth::google`]
//! - A single sign-in entry point, [`authorize`], normalizing both providers
//! - Signed stateless session tokens via [`JwtCodec`] (30-day lifetime)
//! - Simulated email notifications via [`email`]
//!
//! ## Quick Start
//!
//! ```rust
//! use portal_auth::{ApiKey, ApiSecretKey, HostUrl, PortalConfig, SessionSecret};
//!
//! // Create configuration using the builder pattern
//! let config = PortalConfig::builder()
//!     .shopify_api_key(ApiKey::new("your-api-key").unwrap())
//!     .shopify_api_secret(ApiSecretKey::new("your-api-secret").unwrap())
//!     .app_url(HostUrl::new("https://portal.example.com").unwrap())
//!     .session_secret(SessionSecret::new("a-long-random-secret").unwrap())
//!     .build();
//!
//! assert!(config.shopify_api_key().is_some());
//! ```
//!
//! In production, [`PortalConfig::from_env`] loads the same fields from
//! `SHOPIFY_API_KEY`, `SHOPIFY_API_SECRET`, `SHOPIFY_APP_URL`,
//! `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`, and `SESSION_SECRET`.
//!
//! ## Shopify Sign-in
//!
//! Connecting a store is a two-step flow: build the authorization URL the
//! merchant is redirected to, then exchange the code Shopify sends back.
//!
//! ```rust
//! use portal_auth::{begin_auth, ApiKey, HostUrl, PortalConfig, ShopDomain};
//!
//! let config = PortalConfig::builder()
//!     .shopify_api_key(ApiKey::new("your-api-key").unwrap())
//!     .app_url(HostUrl::new("https://portal.example.com").unwrap())
//!     .build();
//!
//! let shop = ShopDomain::new("example-shop.myshopify.com").unwrap();
//! let urls = begin_auth(&config, &shop).unwrap();
//!
//! assert!(urls
//!     .auth_url
//!     .starts_with("https://example-shop.myshopify.com/admin/oauth/authorize"));
//! ```
//!
//! The callback handler feeds the returned `{shop, code}` pair into
//! [`authorize`], which runs the code exchange and issues session claims:
//!
//! ```rust,ignore
//! use portal_auth::{
//!     authorize, AuthCredentials, AuthOutcome, JwtCodec, Provider, SessionCodec, SessionToken,
//! };
//!
//! let outcome = authorize(
//!     &config,
//!     AuthCredentials::Shopify {
//!         shop: query.shop,
//!         code: query.code,
//!     },
//! )
//! .await;
//!
//! if let AuthOutcome::Authenticated(identity) = outcome {
//!     let token = SessionToken::issue(Provider::Shopify, &identity);
//!     let codec = JwtCodec::from_config(&config)?;
//!     let cookie = codec.encode(&token)?;
//!     // set the session cookie from `cookie`
//! }
//! ```
//!
//! ## Google Sign-in
//!
//! Google sign-in delegates to the external identity layer, which drives
//! the consent cycle through [`GoogleAuthClient`]:
//!
//! ```rust
//! use portal_auth::{ClientId, ClientSecret, GoogleAuthClient, PortalConfig};
//!
//! let config = PortalConfig::builder()
//!     .google_client_id(ClientId::new("client-id.apps.googleusercontent.com").unwrap())
//!     .google_client_secret(ClientSecret::new("client-secret").unwrap())
//!     .build();
//!
//! let client = GoogleAuthClient::new(&config).unwrap();
//! let consent_url = client.authorization_url(None);
//!
//! assert!(consent_url.starts_with("https://accounts.google.com/o/oauth2/v2/auth"));
//! ```
//!
//! ## Sessions
//!
//! Session state lives entirely inside a signed token. Claims are issued
//! once at sign-in and the session the application consumes is derived
//! from them on every read:
//!
//! ```rust
//! use portal_auth::{Identity, Provider, Session, SessionToken, ShopDomain};
//!
//! let shop = ShopDomain::new("example-shop.myshopify.com").unwrap();
//! let identity = Identity::for_shop(&shop, "access-token".to_string());
//!
//! let token = SessionToken::issue(Provider::Shopify, &identity);
//! let session = Session::materialize(&token);
//!
//! let shopify = session.shopify.unwrap();
//! assert_eq!(shopify.shop_domain, "example-shop.myshopify.com");
//! assert_eq!(shopify.access_token, "access-token");
//! ```
//!
//! ## Email Notifications
//!
//! The [`email`] module simulates delivery: it validates, logs, and waits,
//! but never sends real mail.
//!
//! ```rust,ignore
//! use portal_auth::email::{send_order_notification, send_welcome_email};
//!
//! let sent = send_welcome_email("merchant@example.com", "Ana").await;
//! let notified =
//!     send_order_notification("merchant@example.com", "1001", "Ana Souza", "$49.90").await;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is loaded once and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction; missing
//!   configuration fails at the operation that needs it
//! - **Absorbed request failures**: Upstream rejections and transport errors
//!   during sign-in become a logged denial, never a panic
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio runtime
//! - **Derived sessions**: Sessions are recomputed from the signed token on
//!   every read and never stored server-side

pub mod auth;
pub mod config;
pub mod email;
pub mod error;

// Re-export public types at crate root for convenience
pub use auth::{
    authorize, AuthCredentials, AuthOutcome, Identity, JwtCodec, Provider, Session, SessionCodec,
    SessionCodecError, SessionToken, ShopifySession, SESSION_MAX_AGE_DAYS,
};
pub use config::{
    ApiKey, ApiSecretKey, ClientId, ClientSecret, HostUrl, PortalConfig, PortalConfigBuilder,
    SessionSecret, ShopDomain,
};
pub use error::ConfigError;

// Re-export the provider flows for convenience
pub use auth::google::{GoogleAuthClient, GoogleAuthError, GoogleProfile, GoogleTokenResponse};
pub use auth::shopify::{begin_auth, exchange_code, BeginAuthResult, ACCESS_SCOPES};
