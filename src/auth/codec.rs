//! Signing and verifying session tokens.
//!
//! The session store is stateless: the whole session lives inside a signed
//! token verified on every request. Components that need to issue or read
//! sessions depend on the [`SessionCodec`] trait rather than a concrete
//! signing scheme; [`JwtCodec`] is the HS256 JWT implementation used in
//! production.
//!
//! # Example
//!
//! ```rust
//! use portal_auth::{JwtCodec, Provider, SessionCodec, SessionSecret, SessionToken};
//! use chrono::Duration;
//!
//! let secret = SessionSecret::new("a-long-random-signing-secret").unwrap();
//! let codec = JwtCodec::new(secret, Duration::days(30));
//!
//! let token = SessionToken {
//!     provider: Provider::Google,
//!     shopify_access_token: None,
//!     shop_domain: None,
//! };
//!
//! let signed = codec.encode(&token).unwrap();
//! let restored = codec.decode(&signed).unwrap();
//! assert_eq!(token, restored);
//! ```

use crate::auth::session::SessionToken;
use crate::config::{PortalConfig, SessionSecret};
use crate::error::ConfigError;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long a session token stays valid, in days.
pub const SESSION_MAX_AGE_DAYS: i64 = 30;

/// Leeway for JWT time-based claims validation (10 seconds).
const TOKEN_LEEWAY_SECS: u64 = 10;

/// Errors produced while encoding or decoding session tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionCodecError {
    /// The token's signature was valid but its lifetime has elapsed.
    #[error("Session token has expired")]
    Expired,

    /// The token could not be verified: malformed, tampered with, or
    /// signed with a different secret.
    #[error("Invalid session token: {reason}")]
    Invalid { reason: String },

    /// Signing a freshly issued token failed.
    #[error("Failed to sign session token: {reason}")]
    Signing { reason: String },
}

/// Encodes session claims to a signed string and back.
///
/// Object safe, so callers may hold a `Box<dyn SessionCodec>` when the
/// signing scheme is chosen at runtime.
pub trait SessionCodec {
    /// Signs the token claims into an opaque string.
    ///
    /// # Errors
    ///
    /// Returns [`SessionCodecError::Signing`] if the claims cannot be
    /// serialized and signed.
    fn encode(&self, token: &SessionToken) -> Result<String, SessionCodecError>;

    /// Verifies a signed string and recovers the token claims.
    ///
    /// # Errors
    ///
    /// Returns [`SessionCodecError::Expired`] for a well-signed token past
    /// its lifetime, and [`SessionCodecError::Invalid`] for anything that
    /// fails verification.
    fn decode(&self, raw: &str) -> Result<SessionToken, SessionCodecError>;
}

/// Claims layout of the signed JWT: the session token fields flattened
/// alongside the standard `iat`/`exp` timestamps.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(flatten)]
    token: SessionToken,
    iat: i64,
    exp: i64,
}

/// HS256 JWT implementation of [`SessionCodec`].
///
/// Holds the signing secret and the session lifetime; every encoded token
/// gets `iat` set to now and `exp` set to now plus the lifetime.
#[derive(Clone, Debug)]
pub struct JwtCodec {
    secret: SessionSecret,
    max_age: Duration,
}

impl JwtCodec {
    /// Creates a codec with an explicit secret and session lifetime.
    #[must_use]
    pub const fn new(secret: SessionSecret, max_age: Duration) -> Self {
        Self { secret, max_age }
    }

    /// Creates the production codec from configuration, with the standard
    /// 30-day session lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSessionSecret`] if no session secret
    /// is configured.
    pub fn from_config(config: &PortalConfig) -> Result<Self, ConfigError> {
        let secret = config
            .session_secret()
            .cloned()
            .ok_or(ConfigError::MissingSessionSecret)?;

        Ok(Self::new(secret, Duration::days(SESSION_MAX_AGE_DAYS)))
    }
}

impl SessionCodec for JwtCodec {
    fn encode(&self, token: &SessionToken) -> Result<String, SessionCodecError> {
        let now = Utc::now();
        let claims = Claims {
            token: token.clone(),
            iat: now.timestamp(),
            exp: (now + self.max_age).timestamp(),
        };

        let key = EncodingKey::from_secret(self.secret.as_ref().as_bytes());
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &key).map_err(|e| {
            SessionCodecError::Signing {
                reason: e.to_string(),
            }
        })
    }

    fn decode(&self, raw: &str) -> Result<SessionToken, SessionCodecError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = TOKEN_LEEWAY_SECS;

        let key = DecodingKey::from_secret(self.secret.as_ref().as_bytes());
        let data = jsonwebtoken::decode::<Claims>(raw, &key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => SessionCodecError::Expired,
                _ => SessionCodecError::Invalid {
                    reason: e.to_string(),
                },
            }
        })?;

        Ok(data.claims.token)
    }
}

// Verify JwtCodec is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<JwtCodec>();
};
