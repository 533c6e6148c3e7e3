//! Session token shaping and materialization.
//!
//! Two steps with distinct jobs:
//!
//! 1. **Issuance** ([`SessionToken::issue`]): at sign-in, fold the provider
//!    and the verified identity into the compact claims that get signed
//!    into the session token. Shopify identities contribute their access
//!    token and shop domain; everything else contributes only the provider
//!    name.
//! 2. **Materialization** ([`Session::materialize`]): on every read, derive
//!    the session the application consumes from those claims. This is a
//!    pure function of the token, so an unchanged token always yields an
//!    identical session.
//!
//! Google sessions carry nothing beyond the provider. Extending them with
//! profile data or a refresh token is a contract change for downstream
//! consumers, not a bug fix.

use crate::auth::credentials::Identity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The identity provider a session originates from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Shopify store sign-in via the admin OAuth flow.
    Shopify,
    /// Google account sign-in via the external identity layer.
    Google,
}

impl Provider {
    /// Returns the lowercase wire name of the provider.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shopify => "shopify",
            Self::Google => "google",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The claims stored inside the signed session token.
///
/// Wire field names are camelCase (`shopifyAccessToken`, `shopDomain`) and
/// the Shopify fields are omitted entirely when absent, so Google tokens
/// serialize to just `{"provider":"google"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionToken {
    /// Which provider authenticated this session.
    pub provider: Provider,

    /// Shopify admin access token, recorded only for Shopify sign-ins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopify_access_token: Option<String>,

    /// The shop domain, recorded alongside the access token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_domain: Option<String>,
}

impl SessionToken {
    /// Folds a sign-in event into token claims.
    ///
    /// The provider is recorded unconditionally. The Shopify fields are
    /// recorded only when the provider is Shopify *and* the identity
    /// actually carries an access token; the shop domain is taken from the
    /// identity's name field.
    #[must_use]
    pub fn issue(provider: Provider, identity: &Identity) -> Self {
        let (shopify_access_token, shop_domain) =
            match (provider, identity.access_token.as_ref()) {
                (Provider::Shopify, Some(token)) => {
                    (Some(token.clone()), Some(identity.name.clone()))
                }
                _ => (None, None),
            };

        Self {
            provider,
            shopify_access_token,
            shop_domain,
        }
    }
}

/// Shopify-specific session data, nested under `shopify` in the
/// materialized session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopifySession {
    /// Admin API access token for the connected store.
    pub access_token: String,
    /// Domain of the connected store.
    pub shop_domain: String,
}

/// The session object the application consumes on each request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Copied across from the token on every materialization.
    pub provider: Provider,

    /// Present only for Shopify sessions. Google sessions are minimal by
    /// contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopify: Option<ShopifySession>,
}

impl Session {
    /// Derives the session from token claims.
    ///
    /// For Shopify tokens the nested [`ShopifySession`] is built from the
    /// stored fields, defaulting each to the empty string when a claim is
    /// missing. Idempotent: the same token always materializes to an
    /// identical session.
    #[must_use]
    pub fn materialize(token: &SessionToken) -> Self {
        let shopify = match token.provider {
            Provider::Shopify => Some(ShopifySession {
                access_token: token.shopify_access_token.clone().unwrap_or_default(),
                shop_domain: token.shop_domain.clone().unwrap_or_default(),
            }),
            Provider::Google => None,
        };

        Self {
            provider: token.provider,
            shopify,
        }
    }
}

// Verify session types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SessionToken>();
    assert_send_sync::<Session>();
};
