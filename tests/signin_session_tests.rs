//! Integration tests for sign-in sessions and token signing.
//!
//! These tests follow an identity end to end: issuing session claims,
//! signing them into a token, verifying the token back, and materializing
//! the session the application consumes.

use chrono::Duration;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use portal_auth::{
    ConfigError, GoogleProfile, Identity, JwtCodec, PortalConfig, Provider, Session, SessionCodec,
    SessionCodecError, SessionSecret, SessionToken, ShopDomain, SESSION_MAX_AGE_DAYS,
};
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

const TEST_SECRET: &str = "integration-test-signing-secret";

/// Claims layout matching the codec's wire format, for crafting tokens
/// with controlled timestamps
#[derive(Debug, Serialize)]
struct TestClaims {
    provider: String,
    #[serde(rename = "shopifyAccessToken")]
    shopify_access_token: String,
    #[serde(rename = "shopDomain")]
    shop_domain: String,
    iat: i64,
    exp: i64,
}

/// Returns the current Unix timestamp
fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs() as i64
}

fn create_codec() -> JwtCodec {
    JwtCodec::new(
        SessionSecret::new(TEST_SECRET).unwrap(),
        Duration::days(SESSION_MAX_AGE_DAYS),
    )
}

/// Signs claims directly, bypassing the codec
fn encode_claims(claims: &TestClaims, secret: &str) -> String {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());
    encode(&header, claims, &key).expect("Failed to encode JWT")
}

#[test]
fn test_shopify_sign_in_issues_signs_and_materializes() {
    let codec = create_codec();
    let shop = ShopDomain::new("acme.myshopify.com").unwrap();
    let identity = Identity::for_shop(&shop, "tok_123".to_string());

    let token = SessionToken::issue(Provider::Shopify, &identity);
    let cookie = codec.encode(&token).unwrap();
    let restored = codec.decode(&cookie).unwrap();

    assert_eq!(restored, token);

    let session = Session::materialize(&restored);
    assert_eq!(session.provider, Provider::Shopify);

    let shopify = session.shopify.expect("Shopify session data");
    assert_eq!(shopify.access_token, "tok_123");
    assert_eq!(shopify.shop_domain, "acme.myshopify.com");
}

#[test]
fn test_materialization_is_byte_identical_across_reads() {
    let codec = create_codec();
    let shop = ShopDomain::new("acme.myshopify.com").unwrap();
    let identity = Identity::for_shop(&shop, "tok_123".to_string());
    let cookie = codec
        .encode(&SessionToken::issue(Provider::Shopify, &identity))
        .unwrap();

    // Two independent reads of the same unchanged token
    let first = Session::materialize(&codec.decode(&cookie).unwrap());
    let second = Session::materialize(&codec.decode(&cookie).unwrap());

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_google_sessions_stay_minimal_end_to_end() {
    let codec = create_codec();
    let profile = GoogleProfile {
        id: "110248495921238986420".to_string(),
        email: Some("ana@example.com".to_string()),
        verified_email: Some(true),
        name: Some("Ana Souza".to_string()),
        given_name: Some("Ana".to_string()),
        family_name: Some("Souza".to_string()),
        picture: None,
        locale: Some("en".to_string()),
    };
    let identity = Identity::from_google_profile(&profile);

    let token = SessionToken::issue(Provider::Google, &identity);
    let restored = codec.decode(&codec.encode(&token).unwrap()).unwrap();
    let session = Session::materialize(&restored);

    assert_eq!(session.provider, Provider::Google);
    assert!(session.shopify.is_none());
    assert_eq!(
        serde_json::to_string(&session).unwrap(),
        r#"{"provider":"google"}"#
    );
}

#[test]
fn test_expired_session_token_is_rejected() {
    let now = current_timestamp();
    let claims = TestClaims {
        provider: "shopify".to_string(),
        shopify_access_token: "tok_123".to_string(),
        shop_domain: "acme.myshopify.com".to_string(),
        iat: now - 7200,
        exp: now - 3600,
    };
    let stale_cookie = encode_claims(&claims, TEST_SECRET);

    let result = create_codec().decode(&stale_cookie);

    assert_eq!(result, Err(SessionCodecError::Expired));
}

#[test]
fn test_foreign_and_malformed_tokens_are_invalid() {
    let codec = create_codec();

    // Signed with a different secret
    let now = current_timestamp();
    let claims = TestClaims {
        provider: "shopify".to_string(),
        shopify_access_token: "tok_123".to_string(),
        shop_domain: "acme.myshopify.com".to_string(),
        iat: now,
        exp: now + 3600,
    };
    let foreign_cookie = encode_claims(&claims, "some-other-secret");
    assert!(matches!(
        codec.decode(&foreign_cookie),
        Err(SessionCodecError::Invalid { .. })
    ));

    // Not a JWT at all
    assert!(matches!(
        codec.decode("definitely-not-a-jwt"),
        Err(SessionCodecError::Invalid { .. })
    ));
}

#[test]
fn test_codec_from_config_requires_the_signing_secret() {
    let result = JwtCodec::from_config(&PortalConfig::default());
    assert_eq!(result.unwrap_err(), ConfigError::MissingSessionSecret);

    let config = PortalConfig::builder()
        .session_secret(SessionSecret::new(TEST_SECRET).unwrap())
        .build();
    let codec = JwtCodec::from_config(&config).unwrap();

    // The configured codec round-trips claims
    let token = SessionToken {
        provider: Provider::Google,
        shopify_access_token: None,
        shop_domain: None,
    };
    let restored = codec.decode(&codec.encode(&token).unwrap()).unwrap();
    assert_eq!(restored, token);
}
