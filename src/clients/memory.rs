//! In-memory channel implementations.
//!
//! Useful for tests and offline development: every request is recorded and
//! answered by a configurable responder instead of a remote backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use tonic::Status;

use crate::clients::channel::{
    AccessChannel, ResourceStream, StoreRequest, StoreResponse, StorefrontChannel,
};
use crate::proto::access::{LoginRequest, Session};
use crate::proto::store::{
    Cart, CartTotals, Customer, Empty, GetResourceRequest, ListOrdersResponse,
    ListPaymentMethodsResponse, ListProductsResponse, ListRenderProductsResponse,
    ListShippingMethodsResponse, ListStocksResponse, Order, Resource, ShippingInformation, Stock,
};

type LoginResponder = Box<dyn Fn(&LoginRequest) -> Result<Session, Status> + Send + Sync>;
type StoreResponder = Box<dyn Fn(&StoreRequest) -> Result<StoreResponse, Status> + Send + Sync>;

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, Status> {
    mutex
        .lock()
        .map_err(|e| Status::internal(format!("memory channel poisoned: {e}")))
}

/// In-memory access service.
///
/// By default every login succeeds and yields a session whose uuid is
/// `session-<n>`, `n` counting logins from 1.
pub struct MemoryAccessChannel {
    logins: Mutex<Vec<LoginRequest>>,
    issued: AtomicUsize,
    latency: Option<Duration>,
    responder: Option<LoginResponder>,
}

impl MemoryAccessChannel {
    /// Creates a channel that accepts every login.
    #[must_use]
    pub fn new() -> Self {
        Self {
            logins: Mutex::new(Vec::new()),
            issued: AtomicUsize::new(0),
            latency: None,
            responder: None,
        }
    }

    /// Answers logins with `responder` instead of issuing sessions.
    #[must_use]
    pub fn with_responder<F>(mut self, responder: F) -> Self
    where
        F: Fn(&LoginRequest) -> Result<Session, Status> + Send + Sync + 'static,
    {
        self.responder = Some(Box::new(responder));
        self
    }

    /// Delays every login by `latency`.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Returns every login request received so far.
    #[must_use]
    pub fn logins(&self) -> Vec<LoginRequest> {
        lock(&self.logins).map(|l| l.clone()).unwrap_or_default()
    }

    /// Returns the number of logins received so far.
    #[must_use]
    pub fn login_count(&self) -> usize {
        lock(&self.logins).map(|l| l.len()).unwrap_or_default()
    }
}

impl Default for MemoryAccessChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccessChannel for MemoryAccessChannel {
    async fn run_login(&self, request: LoginRequest) -> Result<Session, Status> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        lock(&self.logins)?.push(request.clone());

        if let Some(responder) = &self.responder {
            return responder(&request);
        }

        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Session {
            id: i32::try_from(n).unwrap_or(i32::MAX),
            uuid: format!("session-{n}"),
            name: request.user_name.clone(),
            user_name: request.user_name,
            role_uuid: request.role_uuid,
            organization_uuid: request.organization_uuid,
            warehouse_uuid: request.warehouse_uuid,
            language: request.language,
        })
    }
}

/// In-memory storefront service.
///
/// Unary requests are answered with an empty record of the matching type
/// unless a responder is installed. The resource stream replays the scripted
/// chunks and status events given to [`with_resource`](Self::with_resource).
pub struct MemoryStorefrontChannel {
    requests: Mutex<Vec<StoreRequest>>,
    resource_requests: Mutex<Vec<GetResourceRequest>>,
    resource: Vec<Result<Resource, Status>>,
    responder: Option<StoreResponder>,
}

impl MemoryStorefrontChannel {
    /// Creates a channel answering every call with an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            resource_requests: Mutex::new(Vec::new()),
            resource: Vec::new(),
            responder: None,
        }
    }

    /// Answers unary calls with `responder`.
    #[must_use]
    pub fn with_responder<F>(mut self, responder: F) -> Self
    where
        F: Fn(&StoreRequest) -> Result<StoreResponse, Status> + Send + Sync + 'static,
    {
        self.responder = Some(Box::new(responder));
        self
    }

    /// Scripts the items replayed by every resource stream.
    #[must_use]
    pub fn with_resource(mut self, items: Vec<Result<Resource, Status>>) -> Self {
        self.resource = items;
        self
    }

    /// Returns every unary request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<StoreRequest> {
        lock(&self.requests).map(|r| r.clone()).unwrap_or_default()
    }

    /// Returns the most recent unary request.
    #[must_use]
    pub fn last_request(&self) -> Option<StoreRequest> {
        lock(&self.requests).ok().and_then(|r| r.last().cloned())
    }

    /// Returns every resource request received so far.
    #[must_use]
    pub fn resource_requests(&self) -> Vec<GetResourceRequest> {
        lock(&self.resource_requests)
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl Default for MemoryStorefrontChannel {
    fn default() -> Self {
        Self::new()
    }
}

fn empty_response(request: &StoreRequest) -> StoreResponse {
    match request {
        StoreRequest::CreateCustomer(_)
        | StoreRequest::GetCustomer(_)
        | StoreRequest::UpdateCustomer(_) => Customer::default().into(),
        StoreRequest::ChangePassword(_) | StoreRequest::ResetPassword(_) => Empty::default().into(),
        StoreRequest::GetStock(_) => Stock::default().into(),
        StoreRequest::ListStocks(_) => ListStocksResponse::default().into(),
        StoreRequest::ListProducts(_) => ListProductsResponse::default().into(),
        StoreRequest::ListRenderProducts(_) => ListRenderProductsResponse::default().into(),
        StoreRequest::CreateCart(_)
        | StoreRequest::GetCart(_)
        | StoreRequest::UpdateCart(_)
        | StoreRequest::DeleteCartItem(_) => Cart::default().into(),
        StoreRequest::ListPaymentMethods(_) => ListPaymentMethodsResponse::default().into(),
        StoreRequest::ListShippingMethods(_) => ListShippingMethodsResponse::default().into(),
        StoreRequest::GetShippingInformation(_) => ShippingInformation::default().into(),
        StoreRequest::GetCartTotals(_) => CartTotals::default().into(),
        StoreRequest::CreateOrder(_) => Order::default().into(),
        StoreRequest::ListOrders(_) => ListOrdersResponse::default().into(),
    }
}

#[async_trait]
impl StorefrontChannel for MemoryStorefrontChannel {
    async fn unary(&self, request: StoreRequest) -> Result<StoreResponse, Status> {
        lock(&self.requests)?.push(request.clone());
        match &self.responder {
            Some(responder) => responder(&request),
            None => Ok(empty_response(&request)),
        }
    }

    async fn get_resource(&self, request: GetResourceRequest) -> Result<ResourceStream, Status> {
        lock(&self.resource_requests)?.push(request);
        Ok(Box::pin(futures::stream::iter(self.resource.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::store::CreateCartRequest;
    use futures::StreamExt;

    #[tokio::test]
    async fn test_access_channel_issues_sequential_sessions() {
        let channel = MemoryAccessChannel::new();

        let first = channel.run_login(LoginRequest::default()).await.unwrap();
        let second = channel.run_login(LoginRequest::default()).await.unwrap();

        assert_eq!(first.uuid, "session-1");
        assert_eq!(second.uuid, "session-2");
        assert_eq!(channel.login_count(), 2);
    }

    #[tokio::test]
    async fn test_access_channel_responder_overrides_default() {
        let channel = MemoryAccessChannel::new()
            .with_responder(|_| Err(Status::unauthenticated("bad token")));

        let err = channel.run_login(LoginRequest::default()).await.unwrap_err();
        assert_eq!(err.code(), tonic::Code::Unauthenticated);
        assert_eq!(channel.login_count(), 1);
    }

    #[tokio::test]
    async fn test_storefront_channel_records_and_answers_by_type() {
        let channel = MemoryStorefrontChannel::new();

        let response = channel
            .unary(CreateCartRequest::default().into())
            .await
            .unwrap();

        assert_eq!(response.kind(), "Cart");
        assert_eq!(channel.requests().len(), 1);
        assert_eq!(channel.last_request().unwrap().method(), "CreateCart");
    }

    #[tokio::test]
    async fn test_storefront_channel_replays_resource_script() {
        let channel = MemoryStorefrontChannel::new().with_resource(vec![
            Ok(Resource { data: vec![1, 2] }),
            Ok(Resource { data: vec![3] }),
        ]);

        let items: Vec<_> = channel
            .get_resource(GetResourceRequest::default())
            .await
            .unwrap()
            .collect()
            .await;

        assert_eq!(items.len(), 2);
        assert_eq!(channel.resource_requests().len(), 1);
    }
}
