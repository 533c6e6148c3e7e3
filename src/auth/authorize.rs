//! The sign-in decision point.
//!
//! [`authorize`] takes whatever credentials the sign-in form produced and
//! resolves them to an [`AuthOutcome`]. It never returns an error: every
//! failure inside the flow is logged and collapsed to
//! [`AuthOutcome::Denied`], so the caller has exactly three cases to
//! handle.

use crate::auth::credentials::{AuthCredentials, Identity};
use crate::auth::session::Provider;
use crate::auth::shopify;
use crate::config::{PortalConfig, ShopDomain};

/// The result of presenting credentials to [`authorize`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The provider runs its own redirect flow; no identity is produced
    /// here. The caller should hand off to that provider's client.
    Delegated(Provider),

    /// Credentials verified; the resolved identity is attached.
    Authenticated(Identity),

    /// Credentials were missing, malformed, or rejected upstream. Details
    /// are in the logs, never in the outcome.
    Denied,
}

/// Resolves sign-in credentials to an outcome.
///
/// Google credentials are not exchanged here: the external identity layer
/// owns that redirect cycle, so they resolve to
/// [`AuthOutcome::Delegated`]. Shopify credentials are validated and the
/// authorization code exchanged for an access token; any failure along the
/// way is logged and becomes [`AuthOutcome::Denied`].
///
/// An empty authorization code is rejected before any network request is
/// made.
pub async fn authorize(config: &PortalConfig, credentials: AuthCredentials) -> AuthOutcome {
    match credentials {
        AuthCredentials::Google => AuthOutcome::Delegated(Provider::Google),
        AuthCredentials::Shopify { shop, code } => {
            let shop = match ShopDomain::new(&shop) {
                Ok(shop) => shop,
                Err(e) => {
                    tracing::warn!("Rejected Shopify sign-in: {e}");
                    return AuthOutcome::Denied;
                }
            };

            if code.is_empty() {
                tracing::warn!(
                    "Rejected Shopify sign-in for {shop}: empty authorization code"
                );
                return AuthOutcome::Denied;
            }

            match shopify::exchange_code(config, &shop, &code).await {
                Some(access_token) => {
                    tracing::debug!("Authenticated Shopify store {shop}");
                    AuthOutcome::Authenticated(Identity::for_shop(&shop, access_token))
                }
                None => AuthOutcome::Denied,
            }
        }
    }
}

// Verify AuthOutcome is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthOutcome>();
};
