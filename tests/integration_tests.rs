//! Integration tests for the storefront client.
//!
//! These tests verify end-to-end functionality from configuration through
//! the first storefront call.

use std::sync::Arc;

use storefront_rpc::clients::{MemoryAccessChannel, MemoryStorefrontChannel, StoreRequest};
use storefront_rpc::store::{CartParams, CreateCartParams};
use storefront_rpc::{
    ApiToken, ClientVersion, ConfigError, HostUrl, Language, SessionManager, StoreConfig,
    StorefrontGateway,
};

#[test]
fn test_full_workflow_create_newtypes_build_config_access_fields() {
    let config = StoreConfig::builder()
        .access_host(HostUrl::new("h1").unwrap())
        .store_host(HostUrl::new("https://store.example.com:443").unwrap())
        .client_version(ClientVersion::new("1.0").unwrap())
        .language(Language::new("es_VE").unwrap())
        .token(ApiToken::new("T").unwrap())
        .build()
        .unwrap();

    assert_eq!(config.access_host().as_ref(), "http://h1");
    assert_eq!(config.store_host().scheme(), "https");
    assert_eq!(config.store_host().host_name(), "store.example.com");
    assert_eq!(config.client_version().as_ref(), "1.0");
    assert_eq!(config.language().as_ref(), "es_VE");
    assert_eq!(config.token().unwrap().as_ref(), "T");
}

#[test]
fn test_settings_document_with_and_without_nesting() {
    let nested = StoreConfig::from_json(
        r#"{"store": {"api": {"accessHost": "h1", "storeHost": "h2", "version": "1.0", "token": "T"}}}"#,
    )
    .unwrap();
    let flat =
        StoreConfig::from_json(r#"{"accessHost": "h1", "storeHost": "h2", "version": "1.0"}"#)
            .unwrap();

    assert_eq!(nested.store_host().as_ref(), "http://h2");
    assert!(nested.token().is_some());
    assert_eq!(flat.language().as_ref(), Language::DEFAULT);
    assert!(flat.token().is_none());
}

#[test]
fn test_settings_document_nested_under_adempiere_store() {
    let config = StoreConfig::from_json(
        r#"{
            "server": {"port": 8080},
            "adempiereStore": {"api": {
                "accessHost": "h1",
                "storeHost": "h2",
                "version": "1.0",
                "language": "en_US",
                "token": "T"
            }}
        }"#,
    )
    .unwrap();

    assert_eq!(config.access_host().as_ref(), "http://h1");
    assert_eq!(config.store_host().as_ref(), "http://h2");
    assert_eq!(config.client_version().as_ref(), "1.0");
    assert_eq!(config.language().as_ref(), "en_US");
    assert_eq!(config.token().unwrap().as_ref(), "T");
}

#[test]
fn test_error_handling_invalid_inputs_produce_correct_errors() {
    assert!(matches!(
        HostUrl::new("ftp://h1"),
        Err(ConfigError::InvalidHostUrl { .. })
    ));
    assert!(matches!(
        ClientVersion::new(""),
        Err(ConfigError::EmptyClientVersion)
    ));
    assert!(matches!(Language::new(" "), Err(ConfigError::EmptyLanguage)));
    assert!(matches!(ApiToken::new(""), Err(ConfigError::EmptyApiToken)));

    let missing = StoreConfig::builder()
        .access_host(HostUrl::new("h1").unwrap())
        .client_version(ClientVersion::new("1.0").unwrap())
        .build();
    assert!(matches!(
        missing,
        Err(ConfigError::MissingRequiredField {
            field: "store_host"
        })
    ));

    let bad_json = StoreConfig::from_json(r#"{"accessHost": "h1"}"#);
    assert!(matches!(bad_json, Err(ConfigError::InvalidSettings { .. })));
}

#[test]
fn test_token_is_masked_in_debug_output() {
    let config = StoreConfig::builder()
        .access_host(HostUrl::new("h1").unwrap())
        .store_host(HostUrl::new("h2").unwrap())
        .client_version(ClientVersion::new("1.0").unwrap())
        .token(ApiToken::new("very-secret-token").unwrap())
        .build()
        .unwrap();

    assert!(!format!("{config:?}").contains("very-secret-token"));
}

#[tokio::test]
async fn test_end_to_end_guest_cart_under_ambient_context() {
    let config = StoreConfig::from_json(
        r#"{"accessHost": "h1", "storeHost": "h2", "version": "1.0", "language": "en_US", "token": "T"}"#,
    )
    .unwrap();
    let access = Arc::new(MemoryAccessChannel::new());
    let storefront = Arc::new(MemoryStorefrontChannel::new());
    let gateway = StorefrontGateway::new(
        Arc::new(SessionManager::new(access.clone(), &config)),
        storefront.clone(),
    );

    gateway.create_cart(CreateCartParams::default()).await.unwrap();

    assert_eq!(access.logins()[0].token, "T");
    let Some(StoreRequest::CreateCart(request)) = storefront.last_request() else {
        panic!("expected CreateCart");
    };
    assert!(request.is_guest);
    let client = request.client_request.unwrap();
    assert_eq!(client.session_uuid, "session-1");
    assert_eq!(client.language, "en_US");
}

#[tokio::test]
async fn test_multi_tenant_gateways_keep_independent_ambient_contexts() {
    let build = |token: &str| {
        let config = StoreConfig::builder()
            .access_host(HostUrl::new("h1").unwrap())
            .store_host(HostUrl::new("h2").unwrap())
            .client_version(ClientVersion::new("1.0").unwrap())
            .token(ApiToken::new(token).unwrap())
            .build()
            .unwrap();
        let access = Arc::new(MemoryAccessChannel::new().with_responder({
            let uuid = format!("{token}-session");
            move |_| {
                Ok(storefront_rpc::proto::access::Session {
                    uuid: uuid.clone(),
                    ..Default::default()
                })
            }
        }));
        let storefront = Arc::new(MemoryStorefrontChannel::new());
        let gateway = StorefrontGateway::new(
            Arc::new(SessionManager::new(access, &config)),
            storefront.clone(),
        );
        (gateway, storefront)
    };
    let (gateway_a, storefront_a) = build("store-a");
    let (gateway_b, storefront_b) = build("store-b");

    let params = CartParams {
        cart_id: "guest".into(),
        ..CartParams::default()
    };
    gateway_a.get_cart(params.clone()).await.unwrap();
    gateway_b.get_cart(params).await.unwrap();

    let session = |request: Option<StoreRequest>| match request {
        Some(StoreRequest::GetCart(r)) => r.client_request.unwrap().session_uuid,
        _ => panic!("expected GetCart"),
    };
    assert_eq!(session(storefront_a.last_request()), "store-a-session");
    assert_eq!(session(storefront_b.last_request()), "store-b-session");
}
