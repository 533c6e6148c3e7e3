//! Google OAuth 2.0 integration.
//!
//! The portal's Google sign-in is driven by the external identity layer,
//! which runs the whole redirect/consent/callback cycle itself. This module
//! provides the in-house [`GoogleAuthClient`] for the pieces that layer does
//! not cover: building a consent URL by hand, exchanging a code for tokens
//! server-side, and fetching the user's profile.
//!
//! # Example
//!
//! ```rust,ignore
//! use portal_auth::auth::google::GoogleAuthClient;
//!
//! let client = GoogleAuthClient::new(&config)?;
//!
//! // Redirect the user to the consent screen
//! let url = client.authorization_url(None);
//!
//! // Back in the callback: exchange and fetch the profile
//! let tokens = client.exchange_code(&code).await?;
//! let profile = client.user_info(&tokens.access_token).await?;
//! ```

mod client;
mod error;

pub use client::{GoogleAuthClient, GoogleProfile, GoogleTokenResponse};
pub use error::GoogleAuthError;
