//! gRPC transport for the access and storefront services.
//!
//! Both channels dial plaintext HTTP/2 and connect lazily: the first call
//! opens the connection. Constructing a channel therefore never blocks, but
//! it must happen inside a Tokio runtime.

use async_trait::async_trait;
use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};
use tonic::Status;

use crate::clients::channel::{
    AccessChannel, ResourceStream, StoreRequest, StoreResponse, StorefrontChannel,
};
use crate::config::HostUrl;
use crate::proto::access::{LoginRequest, Session};
use crate::proto::store::{GetResourceRequest, Resource};

/// gRPC path of the login method.
pub const LOGIN_PATH: &str = "/access.Security/RunLogin";

/// gRPC path of the resource stream.
pub const GET_RESOURCE_PATH: &str = "/store.WebStore/GetResource";

fn lazy_channel(host: &HostUrl) -> Result<Channel, tonic::transport::Error> {
    Ok(Endpoint::from_shared(host.as_ref().to_string())?.connect_lazy())
}

async fn ready_client(channel: &Channel) -> Result<Grpc<Channel>, Status> {
    let mut client = Grpc::new(channel.clone());
    client
        .ready()
        .await
        .map_err(|e| Status::unavailable(format!("Service was not ready: {e}")))?;
    Ok(client)
}

async fn unary_call<Req, Res>(channel: &Channel, path: &'static str, request: Req) -> Result<Res, Status>
where
    Req: prost::Message + Send + Sync + 'static,
    Res: prost::Message + Default + Send + Sync + 'static,
{
    let mut client = ready_client(channel).await?;
    let codec = ProstCodec::<Req, Res>::default();
    client
        .unary(
            tonic::Request::new(request),
            PathAndQuery::from_static(path),
            codec,
        )
        .await
        .map(tonic::Response::into_inner)
}

/// The access service over gRPC.
#[derive(Clone, Debug)]
pub struct GrpcAccessChannel {
    channel: Channel,
}

impl GrpcAccessChannel {
    /// Creates a lazily connected channel to `host`.
    ///
    /// # Errors
    ///
    /// Returns a transport error if `host` is not a valid endpoint URI.
    pub fn connect(host: &HostUrl) -> Result<Self, tonic::transport::Error> {
        Ok(Self {
            channel: lazy_channel(host)?,
        })
    }
}

#[async_trait]
impl AccessChannel for GrpcAccessChannel {
    async fn run_login(&self, request: LoginRequest) -> Result<Session, Status> {
        unary_call(&self.channel, LOGIN_PATH, request).await
    }
}

/// The storefront service over gRPC.
#[derive(Clone, Debug)]
pub struct GrpcStorefrontChannel {
    channel: Channel,
}

impl GrpcStorefrontChannel {
    /// Creates a lazily connected channel to `host`.
    ///
    /// # Errors
    ///
    /// Returns a transport error if `host` is not a valid endpoint URI.
    pub fn connect(host: &HostUrl) -> Result<Self, tonic::transport::Error> {
        Ok(Self {
            channel: lazy_channel(host)?,
        })
    }
}

#[async_trait]
impl StorefrontChannel for GrpcStorefrontChannel {
    async fn unary(&self, request: StoreRequest) -> Result<StoreResponse, Status> {
        let channel = &self.channel;
        let path = request.path();
        match request {
            StoreRequest::CreateCustomer(r) => unary_call(channel, path, r).await.map(StoreResponse::Customer),
            StoreRequest::ChangePassword(r) => unary_call(channel, path, r).await.map(StoreResponse::Empty),
            StoreRequest::ResetPassword(r) => unary_call(channel, path, r).await.map(StoreResponse::Empty),
            StoreRequest::GetCustomer(r) => unary_call(channel, path, r).await.map(StoreResponse::Customer),
            StoreRequest::UpdateCustomer(r) => unary_call(channel, path, r).await.map(StoreResponse::Customer),
            StoreRequest::GetStock(r) => unary_call(channel, path, r).await.map(StoreResponse::Stock),
            StoreRequest::ListStocks(r) => unary_call(channel, path, r).await.map(StoreResponse::Stocks),
            StoreRequest::ListProducts(r) => unary_call(channel, path, r).await.map(StoreResponse::Products),
            StoreRequest::ListRenderProducts(r) => {
                unary_call(channel, path, r).await.map(StoreResponse::RenderProducts)
            }
            StoreRequest::CreateCart(r) => unary_call(channel, path, r).await.map(StoreResponse::Cart),
            StoreRequest::GetCart(r) => unary_call(channel, path, r).await.map(StoreResponse::Cart),
            StoreRequest::UpdateCart(r) => unary_call(channel, path, r).await.map(StoreResponse::Cart),
            StoreRequest::DeleteCartItem(r) => unary_call(channel, path, r).await.map(StoreResponse::Cart),
            StoreRequest::ListPaymentMethods(r) => {
                unary_call(channel, path, r).await.map(StoreResponse::PaymentMethods)
            }
            StoreRequest::ListShippingMethods(r) => {
                unary_call(channel, path, r).await.map(StoreResponse::ShippingMethods)
            }
            StoreRequest::GetShippingInformation(r) => {
                unary_call(channel, path, r).await.map(StoreResponse::ShippingInformation)
            }
            StoreRequest::GetCartTotals(r) => unary_call(channel, path, r).await.map(StoreResponse::CartTotals),
            StoreRequest::CreateOrder(r) => unary_call(channel, path, r).await.map(StoreResponse::Order),
            StoreRequest::ListOrders(r) => unary_call(channel, path, r).await.map(StoreResponse::Orders),
        }
    }

    async fn get_resource(&self, request: GetResourceRequest) -> Result<ResourceStream, Status> {
        let mut client = ready_client(&self.channel).await?;
        let codec = ProstCodec::<GetResourceRequest, Resource>::default();
        let response = client
            .server_streaming(
                tonic::Request::new(request),
                PathAndQuery::from_static(GET_RESOURCE_PATH),
                codec,
            )
            .await?;
        Ok(Box::pin(response.into_inner()))
    }
}

// Verify the gRPC channels are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GrpcAccessChannel>();
    assert_send_sync::<GrpcStorefrontChannel>();
};
