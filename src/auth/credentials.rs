//! Sign-in credentials and the identity they resolve to.
//!
//! [`AuthCredentials`] is the sum type presented at sign-in; handling it is
//! always an exhaustive `match`, so an unhandled provider is a compile
//! error rather than a silent fallthrough. [`Identity`] is the normalized
//! result a successful credential exchange produces, whichever provider it
//! came from.

use crate::auth::google::GoogleProfile;
use crate::config::ShopDomain;
use serde::{Deserialize, Serialize};

/// Credentials presented at sign-in.
///
/// Serialized form uses a `kind` discriminant, matching the shape submitted
/// by the sign-in form:
///
/// ```rust
/// use portal_auth::AuthCredentials;
///
/// let credentials: AuthCredentials = serde_json::from_str(
///     r#"{"kind":"shopify","shop":"acme.myshopify.com","code":"abc123"}"#,
/// ).unwrap();
/// assert!(matches!(credentials, AuthCredentials::Shopify { .. }));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AuthCredentials {
    /// Google sign-in. No fields travel with the request: the external
    /// identity layer runs the whole redirect/consent/callback cycle.
    Google,

    /// Shopify store credentials captured from the OAuth callback.
    Shopify {
        /// The shop domain, e.g. `acme.myshopify.com`.
        shop: String,
        /// The opaque authorization code returned by Shopify.
        code: String,
    },
}

/// A verified identity produced by a successful credential exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    /// Stable identifier: the shop domain for Shopify sign-ins, the Google
    /// account ID for Google sign-ins.
    pub id: String,

    /// Display name. For Shopify this is the shop domain again.
    pub name: String,

    /// Email address. For Shopify there is no real mailbox, so one is
    /// synthesized as `store@<shop>`.
    pub email: String,

    /// Provider access token, when the exchange produced one.
    pub access_token: Option<String>,
}

impl Identity {
    /// Builds the identity for a connected Shopify store.
    #[must_use]
    pub fn for_shop(shop: &ShopDomain, access_token: String) -> Self {
        Self {
            id: shop.as_ref().to_string(),
            name: shop.as_ref().to_string(),
            email: format!("store@{}", shop.as_ref()),
            access_token: Some(access_token),
        }
    }

    /// Builds a minimal identity from a Google profile.
    ///
    /// No access token is recorded: Google sessions carry nothing beyond
    /// the provider name, and extending them is a deliberate contract
    /// change rather than a fix.
    #[must_use]
    pub fn from_google_profile(profile: &GoogleProfile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone().unwrap_or_default(),
            email: profile.email.clone().unwrap_or_default(),
            access_token: None,
        }
    }
}

// Verify both types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthCredentials>();
    assert_send_sync::<Identity>();
};
