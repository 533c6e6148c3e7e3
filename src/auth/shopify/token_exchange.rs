//! Shopify authorization-code exchange.
//!
//! This module trades the authorization code from the OAuth callback for a
//! permanent access token via a direct POST to the shop's
//! `/admin/oauth/access_token` endpoint.
//!
//! # Failure Contract
//!
//! [`exchange_code`] never returns an error. A missing configuration value,
//! a non-2xx response, an unparseable body, and a transport failure all
//! produce `None`, each with a diagnostic log line carrying enough detail
//! to debug the rejection. The sign-in caller maps `None` to a denied
//! sign-in; nothing here should take the process down. One attempt per
//! call, no retries.
//!
//! # Testing Seam
//!
//! The POST itself lives in [`request_access_token`], which takes the token
//! endpoint URL as an explicit parameter. [`exchange_code`] derives that URL
//! from the shop domain; tests point `request_access_token` at a local mock
//! server instead.

use crate::config::{PortalConfig, ShopDomain};
use serde::{Deserialize, Serialize};

/// Request body for the access-token POST.
#[derive(Debug, Serialize)]
struct AccessTokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
}

/// Successful response body from the access-token endpoint.
#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    access_token: String,
    #[serde(default)]
    scope: Option<String>,
}

/// Returns the access-token endpoint for a shop.
#[must_use]
pub fn access_token_url(shop: &ShopDomain) -> String {
    format!("https://{}/admin/oauth/access_token", shop.as_ref())
}

/// Exchanges an authorization code for a shop access token.
///
/// Returns `Some(access_token)` on an HTTP 200 response whose body carries
/// an `access_token` field, and `None` for every failure mode: missing
/// Shopify credentials in `config` (short-circuits before any request),
/// non-2xx responses, unparseable bodies, and transport errors. Failures
/// are logged, never propagated.
///
/// # Example
///
/// ```rust,ignore
/// use portal_auth::auth::shopify::exchange_code;
///
/// match exchange_code(&config, &shop, &code).await {
///     Some(token) => println!("connected: {token}"),
///     None => println!("sign-in denied"),
/// }
/// ```
pub async fn exchange_code(config: &PortalConfig, shop: &ShopDomain, code: &str) -> Option<String> {
    request_access_token(config, &access_token_url(shop), code).await
}

/// Performs the access-token POST against an explicit endpoint URL.
///
/// Same contract as [`exchange_code`]; split out so the HTTP behavior can
/// be exercised against a local server.
pub async fn request_access_token(
    config: &PortalConfig,
    token_url: &str,
    code: &str,
) -> Option<String> {
    let (api_key, api_secret) = match (config.shopify_api_key(), config.shopify_api_secret()) {
        (Some(key), Some(secret)) => (key, secret),
        _ => {
            tracing::error!(
                "Shopify API credentials are not configured; skipping token exchange"
            );
            return None;
        }
    };

    let request_body = AccessTokenRequest {
        client_id: api_key.as_ref(),
        client_secret: api_secret.as_ref(),
        code,
    };

    let client = reqwest::Client::new();
    let response = match client.post(token_url).json(&request_body).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Shopify token exchange request failed: {e}");
            return None;
        }
    };

    let status = response.status().as_u16();
    if !response.status().is_success() {
        let error_body = response.text().await.unwrap_or_default();
        tracing::error!("Shopify token exchange rejected with status {status}: {error_body}");
        return None;
    }

    match response.json::<AccessTokenResponse>().await {
        Ok(token_response) => {
            if let Some(scope) = &token_response.scope {
                tracing::debug!("Shopify token exchange granted scope: {scope}");
            }
            Some(token_response.access_token)
        }
        Err(e) => {
            tracing::error!("Failed to parse Shopify token response: {e}");
            None
        }
    }
}
