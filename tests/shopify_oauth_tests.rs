//! Integration tests for the Shopify OAuth flow.
//!
//! These tests verify the authorization URL contract, the code exchange
//! against a mocked token endpoint, and the sign-in outcomes derived from
//! them.

use portal_auth::auth::shopify::{access_token_url, request_access_token};
use portal_auth::{
    authorize, begin_auth, ApiKey, ApiSecretKey, AuthCredentials, AuthOutcome, ConfigError,
    HostUrl, PortalConfig, Provider, ShopDomain,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a portal configuration with full Shopify credentials
fn create_portal_config() -> PortalConfig {
    PortalConfig::builder()
        .shopify_api_key(ApiKey::new("test-api-key").unwrap())
        .shopify_api_secret(ApiSecretKey::new("test-api-secret").unwrap())
        .app_url(HostUrl::new("https://portal.example.com").unwrap())
        .build()
}

// === Authorization URL ===

#[test]
fn test_auth_url_matches_the_redirect_contract() {
    let config = create_portal_config();
    let shop = ShopDomain::new("acme.myshopify.com").unwrap();

    let urls = begin_auth(&config, &shop).unwrap();

    // Each query parameter appears exactly once
    assert_eq!(urls.auth_url.matches("client_id=").count(), 1);
    assert_eq!(urls.auth_url.matches("scope=").count(), 1);
    assert_eq!(urls.auth_url.matches("redirect_uri=").count(), 1);

    // The full URL is deterministic: unencoded comma-joined scopes, encoded
    // callback URL
    let expected_redirect =
        urlencoding::encode("https://portal.example.com/api/auth/callback/shopify");
    let expected = format!(
        "https://acme.myshopify.com/admin/oauth/authorize\
         ?client_id=test-api-key\
         &scope=read_products,write_products,read_orders\
         &redirect_uri={expected_redirect}"
    );
    assert_eq!(urls.auth_url, expected);
}

#[test]
fn test_missing_configuration_fails_for_every_shop() {
    let config = PortalConfig::builder().build();

    for shop_name in [
        "acme.myshopify.com",
        "northwind.myshopify.com",
        "a-third-store.myshopify.com",
    ] {
        let shop = ShopDomain::new(shop_name).unwrap();
        let result = begin_auth(&config, &shop);
        assert!(
            matches!(result, Err(ConfigError::MissingShopifyApiKey)),
            "expected a configuration error for {shop_name}"
        );
    }

    // An API key alone is not enough: the callback URL needs the app URL
    let config = PortalConfig::builder()
        .shopify_api_key(ApiKey::new("test-api-key").unwrap())
        .build();
    let shop = ShopDomain::new("acme.myshopify.com").unwrap();
    assert!(matches!(
        begin_auth(&config, &shop),
        Err(ConfigError::MissingAppUrl)
    ));
}

#[test]
fn test_token_endpoint_is_derived_from_the_shop() {
    let shop = ShopDomain::new("acme.myshopify.com").unwrap();
    assert_eq!(
        access_token_url(&shop),
        "https://acme.myshopify.com/admin/oauth/access_token"
    );
}

// === Code Exchange ===

#[tokio::test]
async fn test_code_exchange_success_returns_the_access_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/oauth/access_token"))
        .and(body_json(serde_json::json!({
            "client_id": "test-api-key",
            "client_secret": "test-api-secret",
            "code": "auth-code-123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "tok_123",
            "scope": "read_products"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_portal_config();
    let token_url = format!("{}/admin/oauth/access_token", mock_server.uri());

    let token = request_access_token(&config, &token_url, "auth-code-123").await;

    assert_eq!(token.as_deref(), Some("tok_123"));
}

#[tokio::test]
async fn test_code_exchange_absorbs_an_unauthorized_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/oauth/access_token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": "invalid_request"
        })))
        .mount(&mock_server)
        .await;

    let config = create_portal_config();
    let token_url = format!("{}/admin/oauth/access_token", mock_server.uri());

    // A rejected exchange resolves to None rather than an error
    let token = request_access_token(&config, &token_url, "bad-code").await;

    assert!(token.is_none());
}

#[tokio::test]
async fn test_code_exchange_absorbs_a_malformed_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/oauth/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let config = create_portal_config();
    let token_url = format!("{}/admin/oauth/access_token", mock_server.uri());

    let token = request_access_token(&config, &token_url, "auth-code-123").await;

    assert!(token.is_none());
}

#[tokio::test]
async fn test_code_exchange_without_credentials_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = PortalConfig::builder().build();
    let token_url = format!("{}/admin/oauth/access_token", mock_server.uri());

    let token = request_access_token(&config, &token_url, "auth-code-123").await;

    assert!(token.is_none());
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

// === Sign-in Outcomes ===

#[tokio::test]
async fn test_sign_in_with_empty_code_is_denied() {
    let config = create_portal_config();

    let outcome = authorize(
        &config,
        AuthCredentials::Shopify {
            shop: "acme.myshopify.com".to_string(),
            code: String::new(),
        },
    )
    .await;

    assert_eq!(outcome, AuthOutcome::Denied);
}

#[tokio::test]
async fn test_google_sign_in_delegates_to_the_identity_provider() {
    let config = create_portal_config();

    let outcome = authorize(&config, AuthCredentials::Google).await;

    assert_eq!(outcome, AuthOutcome::Delegated(Provider::Google));
}
