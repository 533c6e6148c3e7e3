//! Sign-in flows, sessions, and session token signing.
//!
//! This module covers the whole path from submitted credentials to a
//! materialized session:
//!
//! - [`AuthCredentials`] / [`authorize`]: the provider adapter. Google
//!   credentials delegate to the external identity layer; Shopify
//!   credentials run the OAuth code exchange.
//! - [`shopify`]: the Shopify admin OAuth flow (authorization URL and code
//!   exchange).
//! - [`google`]: a thin client for Google's OAuth endpoints, used by the
//!   external identity layer rather than by [`authorize`] itself.
//! - [`SessionToken`] / [`Session`]: claims issued at sign-in and the
//!   session materialized from them on every read.
//! - [`SessionCodec`] / [`JwtCodec`]: signing those claims into the
//!   stateless session token and verifying them back.
//!
//! # Sign-in Flow
//!
//! ```rust,ignore
//! use portal_auth::{authorize, AuthCredentials, AuthOutcome, Provider, SessionToken};
//!
//! let outcome = authorize(&config, credentials).await;
//! match outcome {
//!     AuthOutcome::Delegated(provider) => { /* hand off to the provider */ }
//!     AuthOutcome::Authenticated(identity) => {
//!         let token = SessionToken::issue(Provider::Shopify, &identity);
//!         let signed = codec.encode(&token)?;
//!         // set the session cookie from `signed`
//!     }
//!     AuthOutcome::Denied => { /* show a sign-in error */ }
//! }
//! ```

mod authorize;
mod codec;
mod credentials;
pub mod google;
mod session;
pub mod shopify;

pub use authorize::{authorize, AuthOutcome};
pub use codec::{JwtCodec, SessionCodec, SessionCodecError, SESSION_MAX_AGE_DAYS};
pub use credentials::{AuthCredentials, Identity};
pub use session::{Provider, Session, SessionToken, ShopifySession};
