//! Integration tests for streamed resource retrieval.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use storefront_rpc::clients::{MemoryAccessChannel, MemoryStorefrontChannel};
use storefront_rpc::proto::store::Resource;
use storefront_rpc::store::ResourceParams;
use storefront_rpc::{
    build_image_from_bytes, ApiToken, ClientVersion, HostUrl, SessionManager, StoreConfig,
    StoreError, StorefrontGateway,
};
use tokio_test::assert_err;
use tonic::{Code, Status};

fn gateway(items: Vec<Result<Resource, Status>>) -> (StorefrontGateway, Arc<MemoryStorefrontChannel>) {
    let config = StoreConfig::builder()
        .access_host(HostUrl::new("h1").unwrap())
        .store_host(HostUrl::new("h2").unwrap())
        .client_version(ClientVersion::new("1.0").unwrap())
        .token(ApiToken::new("T").unwrap())
        .build()
        .unwrap();
    let sessions = SessionManager::new(Arc::new(MemoryAccessChannel::new()), &config);
    let storefront = Arc::new(MemoryStorefrontChannel::new().with_resource(items));
    (
        StorefrontGateway::new(Arc::new(sessions), storefront.clone()),
        storefront,
    )
}

fn chunk(bytes: &[u8]) -> Result<Resource, Status> {
    Ok(Resource {
        data: bytes.to_vec(),
    })
}

fn params(uuid: &str) -> ResourceParams {
    ResourceParams {
        resource_uuid: uuid.to_string(),
        ..ResourceParams::default()
    }
}

// ============================================================================
// Assembly Tests
// ============================================================================

#[tokio::test]
async fn test_chunks_are_concatenated_in_arrival_order() {
    let chunks: Vec<Vec<u8>> = vec![vec![0x89, b'P', b'N', b'G'], vec![], (0..=255).collect(), vec![7; 1000]];
    let expected: Vec<u8> = chunks.concat();
    let (gateway, storefront) = gateway(chunks.iter().map(|c| chunk(c)).collect());

    let data = gateway.get_resource(params("image-uuid")).await.unwrap();

    assert_eq!(data.len(), expected.len());
    assert_eq!(data, expected);

    let sent = storefront.resource_requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].resource_uuid, "image-uuid");
    assert_eq!(sent[0].client_request.as_ref().unwrap().session_uuid, "session-1");
}

#[tokio::test]
async fn test_empty_stream_yields_empty_resource() {
    let (gateway, _) = gateway(Vec::new());

    let data = gateway.get_resource(params("image-uuid")).await.unwrap();

    assert!(data.is_empty());
}

#[tokio::test]
async fn test_unavailable_status_short_circuits_without_partial_data() {
    let (gateway, _) = gateway(vec![
        chunk(b"first"),
        chunk(b"second"),
        Err(Status::internal("resource not permitted")),
        chunk(b"after"),
    ]);

    let err = assert_err!(gateway.get_resource(params("image-uuid")).await);

    match err {
        StoreError::ResourceUnavailable(status) => {
            assert_eq!(status.code(), Code::Internal);
            assert_eq!(status.message(), "resource not permitted");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_other_status_is_forwarded_as_rpc_error() {
    let (gateway, _) = gateway(vec![chunk(b"x"), Err(Status::deadline_exceeded("slow"))]);

    let err = assert_err!(gateway.get_resource(params("image-uuid")).await);

    assert_eq!(err.status().unwrap().code(), Code::DeadlineExceeded);
    assert!(matches!(err, StoreError::Rpc(_)));
}

#[tokio::test]
async fn test_resource_without_identifier_is_rejected() {
    let (gateway, storefront) = gateway(Vec::new());

    let err = assert_err!(gateway.get_resource(ResourceParams::default()).await);

    assert!(matches!(err, StoreError::MissingField { .. }));
    assert!(storefront.resource_requests().is_empty());
}

// ============================================================================
// Data URI Tests
// ============================================================================

#[tokio::test]
async fn test_data_uri_encodes_assembled_bytes() {
    let (gateway, _) = gateway(vec![chunk(b"hel"), chunk(b"lo")]);

    let data = gateway.get_resource(params("image-uuid")).await.unwrap();
    let uri = build_image_from_bytes("image/png", &data);

    assert_eq!(uri, "data:image/png;base64,aGVsbG8=");
    let encoded = uri.trim_start_matches("data:image/png;base64,");
    assert_eq!(STANDARD.decode(encoded).unwrap(), b"hello");
}
