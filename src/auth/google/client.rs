//! Google OAuth 2.0 client.
//!
//! A self-contained wrapper around Google's authorization-code flow:
//! building the consent URL, exchanging a code for tokens, and fetching the
//! signed-in user's profile. The portal's sign-in path does not call this
//! client directly (the external identity layer owns the Google redirect
//! cycle); it exists for extended Google integrations that need tokens or
//! profile data server-side.

use crate::auth::google::GoogleAuthError;
use crate::config::{ClientId, ClientSecret, PortalConfig};
use crate::error::ConfigError;
use serde::Deserialize;

/// Google's OAuth 2.0 authorization endpoint.
const GOOGLE_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// Google's OAuth 2.0 token endpoint.
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Google's OAuth2 v2 userinfo endpoint.
const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Scopes requested when the caller does not override them.
const DEFAULT_SCOPES: [&str; 2] = ["profile", "email"];

/// Development fallback when no application base URL is configured.
const DEFAULT_APP_URL: &str = "http://localhost:3000";

/// Path on the application that receives the Google OAuth callback.
const CALLBACK_PATH: &str = "/api/auth/callback/google";

/// Token response from Google's token endpoint.
///
/// `refresh_token` is only present when the consent screen was shown with
/// `access_type=offline`, which the authorization URL always requests.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleTokenResponse {
    /// The access token for Google API calls.
    pub access_token: String,
    /// Long-lived token for obtaining fresh access tokens.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Lifetime of the access token in seconds.
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// Space-separated scopes actually granted.
    #[serde(default)]
    pub scope: Option<String>,
    /// Token type, normally `Bearer`.
    #[serde(default)]
    pub token_type: Option<String>,
    /// OpenID Connect ID token, present only when the `openid` scope was
    /// requested.
    #[serde(default)]
    pub id_token: Option<String>,
}

/// Profile payload from Google's v2 userinfo endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GoogleProfile {
    /// Google's stable account identifier.
    pub id: String,
    /// Primary email address, if the `email` scope was granted.
    #[serde(default)]
    pub email: Option<String>,
    /// Whether Google has verified the email address.
    #[serde(default)]
    pub verified_email: Option<bool>,
    /// Full display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Given name.
    #[serde(default)]
    pub given_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub family_name: Option<String>,
    /// Profile picture URL.
    #[serde(default)]
    pub picture: Option<String>,
    /// Locale code (e.g. `en`).
    #[serde(default)]
    pub locale: Option<String>,
}

/// Client for Google's OAuth 2.0 authorization-code flow.
///
/// Construction validates configuration eagerly: both the client ID and the
/// client secret must be present, and their absence is a fatal
/// [`ConfigError`] rather than a per-request failure. The redirect URI is
/// derived from the configured application base URL, falling back to the
/// local development URL when none is set.
///
/// # Error Contract
///
/// [`exchange_code`](Self::exchange_code) and
/// [`user_info`](Self::user_info) propagate transport errors and upstream
/// rejections as [`GoogleAuthError`]; they do not fail gracefully. Callers
/// log the error and deny the sign-in.
///
/// # Example
///
/// ```rust
/// use portal_auth::{PortalConfig, ClientId, ClientSecret};
/// use portal_auth::auth::google::GoogleAuthClient;
///
/// let config = PortalConfig::builder()
///     .google_client_id(ClientId::new("client-id").unwrap())
///     .google_client_secret(ClientSecret::new("client-secret").unwrap())
///     .build();
///
/// let client = GoogleAuthClient::new(&config).unwrap();
/// let url = client.authorization_url(None);
/// assert!(url.contains("access_type=offline"));
/// assert!(url.contains("prompt=consent"));
/// ```
#[derive(Debug, Clone)]
pub struct GoogleAuthClient {
    client_id: ClientId,
    client_secret: ClientSecret,
    redirect_uri: String,
    http_client: reqwest::Client,
}

impl GoogleAuthClient {
    /// Creates a new client from portal configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingGoogleClientId`] or
    /// [`ConfigError::MissingGoogleClientSecret`] if the Google credentials
    /// are not configured. A missing application base URL is not an error;
    /// the redirect URI falls back to `http://localhost:3000`.
    pub fn new(config: &PortalConfig) -> Result<Self, ConfigError> {
        let client_id = config
            .google_client_id()
            .cloned()
            .ok_or(ConfigError::MissingGoogleClientId)?;
        let client_secret = config
            .google_client_secret()
            .cloned()
            .ok_or(ConfigError::MissingGoogleClientSecret)?;

        let redirect_uri = config.app_url().map_or_else(
            || format!("{DEFAULT_APP_URL}{CALLBACK_PATH}"),
            |url| format!("{}{CALLBACK_PATH}", url.as_ref()),
        );

        Ok(Self {
            client_id,
            client_secret,
            redirect_uri,
            http_client: reqwest::Client::new(),
        })
    }

    /// Returns the redirect URI sent on both the consent URL and the token
    /// exchange.
    #[must_use]
    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    /// Builds the consent-screen URL to redirect the user to.
    ///
    /// Always requests `access_type=offline` and `prompt=consent` so Google
    /// issues a refresh token. `scope_override` replaces the default
    /// `profile email` scope list when provided; scopes are space-joined
    /// and percent-encoded.
    #[must_use]
    pub fn authorization_url(&self, scope_override: Option<&[&str]>) -> String {
        let scopes = scope_override.unwrap_or(&DEFAULT_SCOPES).join(" ");

        let params = [
            ("client_id", self.client_id.as_ref()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("response_type", "code"),
            ("scope", scopes.as_str()),
            ("access_type", "offline"),
            ("prompt", "consent"),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{GOOGLE_AUTHORIZE_URL}?{query_string}")
    }

    /// Exchanges an authorization code for Google tokens.
    ///
    /// # Errors
    ///
    /// Returns [`GoogleAuthError::Transport`] if the request never
    /// completes, [`GoogleAuthError::Rejected`] for non-success statuses
    /// (also logged with the response body), and
    /// [`GoogleAuthError::UnexpectedResponse`] if the success body cannot
    /// be parsed.
    pub async fn exchange_code(&self, code: &str) -> Result<GoogleTokenResponse, GoogleAuthError> {
        let params = [
            ("client_id", self.client_id.as_ref()),
            ("client_secret", self.client_secret.as_ref()),
            ("code", code),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http_client
            .post(GOOGLE_TOKEN_URL)
            .form(&params)
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!("Google token exchange rejected with status {status}: {message}");
            return Err(GoogleAuthError::Rejected { status, message });
        }

        response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| GoogleAuthError::UnexpectedResponse {
                reason: e.to_string(),
            })
    }

    /// Fetches the signed-in user's profile with an access token.
    ///
    /// # Errors
    ///
    /// Same contract as [`exchange_code`](Self::exchange_code): transport
    /// errors, upstream rejections, and unparseable bodies all propagate.
    pub async fn user_info(&self, access_token: &str) -> Result<GoogleProfile, GoogleAuthError> {
        let response = self
            .http_client
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!("Google userinfo request rejected with status {status}: {message}");
            return Err(GoogleAuthError::Rejected { status, message });
        }

        response
            .json::<GoogleProfile>()
            .await
            .map_err(|e| GoogleAuthError::UnexpectedResponse {
                reason: e.to_string(),
            })
    }
}

// Verify GoogleAuthClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GoogleAuthClient>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn create_google_config() -> PortalConfig {
        PortalConfig::builder()
            .google_client_id(ClientId::new("test-client-id").unwrap())
            .google_client_secret(ClientSecret::new("test-client-secret").unwrap())
            .build()
    }

    #[test]
    fn test_new_requires_client_id() {
        let config = PortalConfig::builder()
            .google_client_secret(ClientSecret::new("secret").unwrap())
            .build();

        let result = GoogleAuthClient::new(&config);
        assert!(matches!(result, Err(ConfigError::MissingGoogleClientId)));
    }

    #[test]
    fn test_new_requires_client_secret() {
        let config = PortalConfig::builder()
            .google_client_id(ClientId::new("id").unwrap())
            .build();

        let result = GoogleAuthClient::new(&config);
        assert!(matches!(
            result,
            Err(ConfigError::MissingGoogleClientSecret)
        ));
    }

    #[test]
    fn test_redirect_uri_falls_back_to_localhost() {
        let client = GoogleAuthClient::new(&create_google_config()).unwrap();
        assert_eq!(
            client.redirect_uri(),
            "http://localhost:3000/api/auth/callback/google"
        );
    }

    #[test]
    fn test_redirect_uri_uses_configured_app_url() {
        let config = PortalConfig::builder()
            .google_client_id(ClientId::new("id").unwrap())
            .google_client_secret(ClientSecret::new("secret").unwrap())
            .app_url(crate::config::HostUrl::new("https://portal.example.com").unwrap())
            .build();

        let client = GoogleAuthClient::new(&config).unwrap();
        assert_eq!(
            client.redirect_uri(),
            "https://portal.example.com/api/auth/callback/google"
        );
    }

    #[test]
    fn test_authorization_url_contains_required_params() {
        let client = GoogleAuthClient::new(&create_google_config()).unwrap();
        let url = client.authorization_url(None);

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(url.contains("client_id=test-client-id"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("access_type=offline"));
        assert!(url.contains("prompt=consent"));
    }

    #[test]
    fn test_authorization_url_default_scopes() {
        let client = GoogleAuthClient::new(&create_google_config()).unwrap();
        let url = client.authorization_url(None);

        // "profile email" space-joined then percent-encoded
        assert!(url.contains("scope=profile%20email"));
    }

    #[test]
    fn test_authorization_url_scope_override() {
        let client = GoogleAuthClient::new(&create_google_config()).unwrap();
        let url = client.authorization_url(Some(&["openid", "email"]));

        assert!(url.contains("scope=openid%20email"));
        assert!(!url.contains("profile"));
    }

    #[test]
    fn test_authorization_url_encodes_redirect_uri() {
        let client = GoogleAuthClient::new(&create_google_config()).unwrap();
        let url = client.authorization_url(None);

        let expected =
            urlencoding::encode("http://localhost:3000/api/auth/callback/google").into_owned();
        assert!(url.contains(&format!("redirect_uri={expected}")));
    }

    #[test]
    fn test_token_response_deserializes_full_payload() {
        let json = r#"{
            "access_token": "ya29.a0AfH6SMC",
            "expires_in": 3599,
            "refresh_token": "1//0eXv",
            "scope": "https://www.googleapis.com/auth/userinfo.profile https://www.googleapis.com/auth/userinfo.email",
            "token_type": "Bearer"
        }"#;

        let parsed: GoogleTokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.access_token, "ya29.a0AfH6SMC");
        assert_eq!(parsed.refresh_token.as_deref(), Some("1//0eXv"));
        assert_eq!(parsed.expires_in, Some(3599));
        assert!(parsed.id_token.is_none());
    }

    #[test]
    fn test_token_response_requires_access_token() {
        let json = r#"{"token_type": "Bearer"}"#;
        let parsed: Result<GoogleTokenResponse, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_profile_deserializes_v2_userinfo_payload() {
        let json = r#"{
            "id": "110248495921238986420",
            "email": "ana@example.com",
            "verified_email": true,
            "name": "Ana Souza",
            "given_name": "Ana",
            "family_name": "Souza",
            "picture": "https://lh3.googleusercontent.com/a/photo.jpg",
            "locale": "en"
        }"#;

        let parsed: GoogleProfile = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, "110248495921238986420");
        assert_eq!(parsed.email.as_deref(), Some("ana@example.com"));
        assert_eq!(parsed.name.as_deref(), Some("Ana Souza"));
        assert_eq!(parsed.verified_email, Some(true));
    }

    #[test]
    fn test_profile_tolerates_minimal_payload() {
        let json = r#"{"id": "12345"}"#;
        let parsed: GoogleProfile = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, "12345");
        assert!(parsed.email.is_none());
        assert!(parsed.name.is_none());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GoogleAuthClient>();
    }
}
