//! The caller-facing storefront facade.
//!
//! [`StorefrontGateway`] exposes one async method per commerce operation.
//! Each method resolves the client context, builds the request record,
//! dispatches it once and relays the reply.
//!
//! # Addressing
//!
//! Cart operations (`create_cart`, `get_cart`, `update_cart`,
//! `delete_cart_item`, `get_payment_methods`, `get_shipping_methods`,
//! `get_shipping_information`, `get_cart_totals`) follow the rules in
//! [`addressing`](crate::store::addressing): a token selects the
//! authenticated cart by numeric id, no token selects the guest cart under
//! the ambient context. `create_order` classifies the cart by the shape of
//! its identifier instead; see [`OrderCartRef`](crate::store::OrderCartRef).

use std::sync::Arc;

use crate::auth::{LoginParams, Session, SessionManager};
use crate::clients::{
    GrpcAccessChannel, GrpcStorefrontChannel, StoreRequest, StoreResponse, StorefrontChannel,
};
use crate::config::StoreConfig;
use crate::proto::store::{
    Address, Cart, CartTotals, ChangePasswordRequest, ConfigurableItemOption, CreateCartRequest,
    CreateCustomerRequest, Customer, DeleteCartItemRequest, Empty, GetCartRequest,
    GetCartTotalsRequest, GetCustomerRequest, GetResourceRequest, GetShippingInformationRequest,
    GetStockRequest, ListOrdersRequest, ListOrdersResponse, ListPaymentMethodsRequest,
    ListPaymentMethodsResponse, ListProductsRequest, ListProductsResponse,
    ListRenderProductsRequest, ListRenderProductsResponse, ListShippingMethodsRequest,
    ListShippingMethodsResponse, ListStocksRequest, ListStocksResponse, Order,
    ResetPasswordRequest, ShippingInformation, Stock, UpdateCartRequest, UpdateCustomerRequest,
};
use crate::store::addressing::Addressing;
use crate::store::order::build_order_request;
use crate::store::params::{
    CartParams, ChangePasswordParams, CreateCartParams, CreateCustomerParams, CreateOrderParams,
    DeleteCartItemParams, ProductsParams, ResetPasswordParams, ResourceParams,
    ShippingInformationParams, ShippingMethodsParams, StockParams, TokenParams,
    UpdateCartParams, UpdateCustomerParams,
};
use crate::store::resource::assemble_resource;
use crate::store::StoreError;

fn required_token(token: Option<&str>) -> Result<&str, StoreError> {
    token
        .filter(|t| !t.is_empty())
        .ok_or(StoreError::MissingField { field: "token" })
}

fn required(field: &'static str, value: &str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::MissingField { field });
    }
    Ok(())
}

/// Client facade over the storefront backend.
///
/// Every operation completes exactly once, with either its reply or a
/// [`StoreError`]. Channel errors are forwarded unchanged as
/// [`StoreError::Rpc`].
///
/// # Thread Safety
///
/// `StorefrontGateway` is `Send + Sync` and cheap to clone; clones share the
/// session manager and channels.
///
/// # Example
///
#[cfg_attr(feature = "memory", doc = "```rust")]
#[cfg_attr(not(feature = "memory"), doc = "```rust,ignore")]
/// use std::sync::Arc;
/// use storefront_rpc::clients::{MemoryAccessChannel, MemoryStorefrontChannel};
/// use storefront_rpc::store::CreateCartParams;
/// use storefront_rpc::{ApiToken, ClientVersion, HostUrl, SessionManager, StoreConfig, StorefrontGateway};
///
/// # tokio_test::block_on(async {
/// let config = StoreConfig::builder()
///     .access_host(HostUrl::new("h1").unwrap())
///     .store_host(HostUrl::new("h2").unwrap())
///     .client_version(ClientVersion::new("1.0").unwrap())
///     .token(ApiToken::new("T").unwrap())
///     .build()
///     .unwrap();
///
/// let sessions = SessionManager::new(Arc::new(MemoryAccessChannel::new()), &config);
/// let gateway = StorefrontGateway::new(Arc::new(sessions), Arc::new(MemoryStorefrontChannel::new()));
///
/// let cart = gateway.create_cart(CreateCartParams::default()).await.unwrap();
/// assert_eq!(cart.id, 0);
/// # });
/// ```
#[derive(Clone)]
pub struct StorefrontGateway {
    sessions: Arc<SessionManager>,
    storefront: Arc<dyn StorefrontChannel>,
}

// Verify StorefrontGateway is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontGateway>();
};

impl StorefrontGateway {
    /// Creates a gateway over the gRPC channels named in `config`.
    ///
    /// Channels connect lazily, so this never blocks; it must be called from
    /// within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Transport`] if a host cannot be used as a
    /// channel endpoint.
    pub fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let access = GrpcAccessChannel::connect(config.access_host())?;
        let storefront = GrpcStorefrontChannel::connect(config.store_host())?;
        tracing::debug!(
            access_host = %config.access_host(),
            store_host = %config.store_host(),
            "Storefront gateway created"
        );
        let sessions = SessionManager::new(Arc::new(access), config);
        Ok(Self::new(Arc::new(sessions), Arc::new(storefront)))
    }

    /// Creates a gateway from an existing session manager and channel.
    #[must_use]
    pub fn new(sessions: Arc<SessionManager>, storefront: Arc<dyn StorefrontChannel>) -> Self {
        Self {
            sessions,
            storefront,
        }
    }

    /// Returns the session manager.
    #[must_use]
    pub fn session_manager(&self) -> &SessionManager {
        &self.sessions
    }

    /// Establishes the ambient context now rather than on first use.
    ///
    /// Returns `true` when an ambient context is available afterwards.
    pub async fn initialize(&self) -> bool {
        self.sessions.initialize().await.is_some()
    }

    async fn dispatch<R>(&self, request: impl Into<StoreRequest>) -> Result<R, StoreError>
    where
        R: TryFrom<StoreResponse, Error = StoreResponse>,
    {
        let request = request.into();
        let method = request.method();
        tracing::debug!(method, "Dispatching storefront request");

        let response = self.storefront.unary(request).await?;
        R::try_from(response).map_err(|other| StoreError::UnexpectedResponse {
            method,
            received: other.kind(),
        })
    }

    async fn address_cart(
        &self,
        token: Option<&str>,
        cart_id: &str,
    ) -> Result<Addressing, StoreError> {
        required("cart_id", cart_id)?;
        Addressing::resolve(&self.sessions, token, Some(cart_id)).await
    }

    // Identity

    /// Logs in through the access service.
    ///
    /// # Errors
    ///
    /// See [`SessionManager::login`].
    pub async fn login(&self, params: LoginParams) -> Result<Session, StoreError> {
        self.sessions.login(params).await
    }

    // Customers

    /// Registers a customer under the ambient context.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingField`] without an email, or whatever the
    /// backend reports.
    pub async fn create_customer(&self, params: CreateCustomerParams) -> Result<Customer, StoreError> {
        required("email", &params.email)?;
        let context = self.sessions.context_for(None).await?;
        let request = CreateCustomerRequest {
            client_request: Some(context.to_request()),
            email: params.email,
            first_name: params.first_name,
            last_name: params.last_name,
            password: params.password,
        };
        self.dispatch(request).await
    }

    /// Changes the password of the customer behind `params.token`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingField`] without a token.
    pub async fn change_password(&self, params: ChangePasswordParams) -> Result<Empty, StoreError> {
        let token = required_token(params.token.as_deref())?;
        let context = self.sessions.context_from_token(token);
        let request = ChangePasswordRequest {
            client_request: Some(context.to_request()),
            current_password: params.current_password,
            new_password: params.new_password,
        };
        self.dispatch(request).await
    }

    /// Requests a password reset.
    ///
    /// Runs under the supplied token when there is one, otherwise under the
    /// ambient context.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingField`] when neither user name nor email
    /// is given.
    pub async fn reset_password(&self, params: ResetPasswordParams) -> Result<Empty, StoreError> {
        if params.user_name.trim().is_empty() && params.email.trim().is_empty() {
            return Err(StoreError::MissingField { field: "email" });
        }
        let context = self.sessions.context_for(params.token.as_deref()).await?;
        let request = ResetPasswordRequest {
            client_request: Some(context.to_request()),
            user_name: params.user_name,
            email: params.email,
        };
        self.dispatch(request).await
    }

    /// Fetches the customer behind `params.token`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingField`] without a token.
    pub async fn get_customer(&self, params: TokenParams) -> Result<Customer, StoreError> {
        let token = required_token(params.token.as_deref())?;
        let request = GetCustomerRequest {
            client_request: Some(self.sessions.context_from_token(token).to_request()),
        };
        self.dispatch(request).await
    }

    /// Updates a customer record and its addresses.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoContext`] when no ambient context exists.
    pub async fn update_customer(&self, params: UpdateCustomerParams) -> Result<Customer, StoreError> {
        let context = self.sessions.context_for(None).await?;
        let request = UpdateCustomerRequest {
            client_request: Some(context.to_request()),
            id: params.customer_id,
            email: params.email,
            first_name: params.first_name,
            last_name: params.last_name,
            addresses: params.addresses.iter().map(Address::from).collect(),
        };
        self.dispatch(request).await
    }

    // Catalog

    /// Fetches the stock of one product.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingField`] without a sku.
    pub async fn get_stock(&self, params: StockParams) -> Result<Stock, StoreError> {
        required("sku", &params.sku)?;
        let context = self.sessions.context_for(None).await?;
        let request = GetStockRequest {
            client_request: Some(context.to_request()),
            sku: params.sku,
            store_code: params.store_code,
        };
        self.dispatch(request).await
    }

    /// Lists stock entries, optionally filtered by sku and store.
    ///
    /// # Errors
    ///
    /// Returns whatever the backend reports.
    pub async fn list_stock(&self, params: StockParams) -> Result<ListStocksResponse, StoreError> {
        let context = self.sessions.context_for(None).await?;
        let request = ListStocksRequest {
            client_request: Some(context.to_request()),
            sku: params.sku,
            store_code: params.store_code,
        };
        self.dispatch(request).await
    }

    /// Lists products by sku.
    ///
    /// # Errors
    ///
    /// Returns whatever the backend reports.
    pub async fn list_products(&self, params: ProductsParams) -> Result<ListProductsResponse, StoreError> {
        let context = self.sessions.context_for(None).await?;
        let request = ListProductsRequest {
            client_request: Some(context.to_request()),
            skus: params.skus,
        };
        self.dispatch(request).await
    }

    /// Lists the display form of products by sku.
    ///
    /// # Errors
    ///
    /// Returns whatever the backend reports.
    pub async fn list_render_products(
        &self,
        params: ProductsParams,
    ) -> Result<ListRenderProductsResponse, StoreError> {
        let context = self.sessions.context_for(None).await?;
        let request = ListRenderProductsRequest {
            client_request: Some(context.to_request()),
            skus: params.skus,
        };
        self.dispatch(request).await
    }

    /// Fetches a binary resource and returns its bytes.
    ///
    /// Pair with [`build_image_from_bytes`](crate::build_image_from_bytes)
    /// to embed an image.
    ///
    /// # Errors
    ///
    /// - [`StoreError::MissingField`] when neither name nor uuid is given
    /// - [`StoreError::ResourceUnavailable`] when the backend refuses the resource
    /// - [`StoreError::Rpc`] for any other stream failure
    pub async fn get_resource(&self, params: ResourceParams) -> Result<Vec<u8>, StoreError> {
        if params.resource_name.trim().is_empty() && params.resource_uuid.trim().is_empty() {
            return Err(StoreError::MissingField {
                field: "resource_uuid",
            });
        }
        let context = self.sessions.context_for(None).await?;
        let request = GetResourceRequest {
            client_request: Some(context.to_request()),
            resource_name: params.resource_name,
            resource_uuid: params.resource_uuid,
        };
        tracing::debug!(method = "GetResource", "Opening resource stream");
        let stream = self.storefront.get_resource(request).await?;
        assemble_resource(stream).await
    }

    // Carts

    /// Creates a cart: the customer's with a token, a guest cart without.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoContext`] for a guest cart when no ambient
    /// context exists.
    pub async fn create_cart(&self, params: CreateCartParams) -> Result<Cart, StoreError> {
        let mut request = CreateCartRequest::default();
        Addressing::resolve(&self.sessions, params.token.as_deref(), None)
            .await?
            .apply(&mut request);
        self.dispatch(request).await
    }

    /// Fetches a cart.
    ///
    /// # Errors
    ///
    /// - [`StoreError::MissingField`] without a cart id
    /// - [`StoreError::InvalidField`] when a token is given and the cart id is not numeric
    pub async fn get_cart(&self, params: CartParams) -> Result<Cart, StoreError> {
        let mut request = GetCartRequest::default();
        self.address_cart(params.token.as_deref(), &params.cart_id)
            .await?
            .apply(&mut request);
        self.dispatch(request).await
    }

    /// Adds or updates a cart line.
    ///
    /// # Errors
    ///
    /// As [`get_cart`](Self::get_cart), plus [`StoreError::MissingField`]
    /// without a sku.
    pub async fn update_cart(&self, params: UpdateCartParams) -> Result<Cart, StoreError> {
        required("sku", &params.sku)?;
        let mut request = UpdateCartRequest {
            sku: params.sku,
            quantity: params.quantity,
            configurable_item_options: params
                .configurable_options
                .iter()
                .map(ConfigurableItemOption::from)
                .collect(),
            ..UpdateCartRequest::default()
        };
        self.address_cart(params.token.as_deref(), &params.cart_id)
            .await?
            .apply(&mut request);
        self.dispatch(request).await
    }

    /// Removes a line from a cart.
    ///
    /// # Errors
    ///
    /// As [`get_cart`](Self::get_cart).
    pub async fn delete_cart_item(&self, params: DeleteCartItemParams) -> Result<Cart, StoreError> {
        let mut request = DeleteCartItemRequest {
            sku: params.sku,
            product_id: params.product_id.unwrap_or_default(),
            ..DeleteCartItemRequest::default()
        };
        self.address_cart(params.token.as_deref(), &params.cart_id)
            .await?
            .apply(&mut request);
        self.dispatch(request).await
    }

    /// Lists the payment methods available to a cart.
    ///
    /// # Errors
    ///
    /// As [`get_cart`](Self::get_cart).
    pub async fn get_payment_methods(
        &self,
        params: CartParams,
    ) -> Result<ListPaymentMethodsResponse, StoreError> {
        let mut request = ListPaymentMethodsRequest::default();
        self.address_cart(params.token.as_deref(), &params.cart_id)
            .await?
            .apply(&mut request);
        self.dispatch(request).await
    }

    /// Lists the shipping methods for a cart and destination.
    ///
    /// # Errors
    ///
    /// As [`get_cart`](Self::get_cart).
    pub async fn get_shipping_methods(
        &self,
        params: ShippingMethodsParams,
    ) -> Result<ListShippingMethodsResponse, StoreError> {
        let mut request = ListShippingMethodsRequest {
            shipping_address: Some(Address::from(&params.shipping_address)),
            ..ListShippingMethodsRequest::default()
        };
        self.address_cart(params.token.as_deref(), &params.cart_id)
            .await?
            .apply(&mut request);
        self.dispatch(request).await
    }

    /// Sets shipping and billing for a cart and returns the resulting
    /// payment methods and totals.
    ///
    /// # Errors
    ///
    /// As [`get_cart`](Self::get_cart).
    pub async fn get_shipping_information(
        &self,
        params: ShippingInformationParams,
    ) -> Result<ShippingInformation, StoreError> {
        let mut request = GetShippingInformationRequest {
            shipping_address: Some(Address::from(&params.shipping_address)),
            billing_address: Some(Address::from(&params.billing_address)),
            carrier_code: params.carrier_code,
            method_code: params.method_code,
            ..GetShippingInformationRequest::default()
        };
        self.address_cart(params.token.as_deref(), &params.cart_id)
            .await?
            .apply(&mut request);
        self.dispatch(request).await
    }

    /// Fetches the totals of a cart.
    ///
    /// # Errors
    ///
    /// As [`get_cart`](Self::get_cart).
    pub async fn get_cart_totals(&self, params: CartParams) -> Result<CartTotals, StoreError> {
        let mut request = GetCartTotalsRequest::default();
        self.address_cart(params.token.as_deref(), &params.cart_id)
            .await?
            .apply(&mut request);
        self.dispatch(request).await
    }

    // Orders

    /// Places an order from a cart.
    ///
    /// # Errors
    ///
    /// - [`StoreError::MissingField`] without a cart id
    /// - [`StoreError::InvalidField`] when the cart id is a positive number
    ///   that is not a valid numeric cart id
    pub async fn create_order(&self, params: CreateOrderParams) -> Result<Order, StoreError> {
        required("cart_id", &params.cart_id)?;
        let context = self.sessions.context_for(params.token.as_deref()).await?;
        let request = build_order_request(&context, &params)?;
        self.dispatch(request).await
    }

    /// Lists the orders of the customer behind `params.token`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingField`] without a token.
    pub async fn list_orders(&self, params: TokenParams) -> Result<ListOrdersResponse, StoreError> {
        let token = required_token(params.token.as_deref())?;
        let request = ListOrdersRequest {
            client_request: Some(self.sessions.context_from_token(token).to_request()),
        };
        self.dispatch(request).await
    }
}

impl std::fmt::Debug for StorefrontGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontGateway")
            .field("sessions", &self.sessions)
            .finish_non_exhaustive()
    }
}

#[cfg(all(test, feature = "memory"))]
mod tests {
    use super::*;
    use crate::clients::{MemoryAccessChannel, MemoryStorefrontChannel};
    use crate::config::{ApiToken, ClientVersion, HostUrl};
    use tonic::Status;

    fn gateway_with(
        token: Option<&str>,
        storefront: MemoryStorefrontChannel,
    ) -> (StorefrontGateway, Arc<MemoryStorefrontChannel>) {
        let mut builder = StoreConfig::builder()
            .access_host(HostUrl::new("h1").unwrap())
            .store_host(HostUrl::new("h2").unwrap())
            .client_version(ClientVersion::new("1.0").unwrap());
        if let Some(token) = token {
            builder = builder.token(ApiToken::new(token).unwrap());
        }
        let config = builder.build().unwrap();
        let sessions = SessionManager::new(Arc::new(MemoryAccessChannel::new()), &config);
        let storefront = Arc::new(storefront);
        let gateway = StorefrontGateway::new(Arc::new(sessions), storefront.clone());
        (gateway, storefront)
    }

    #[test]
    fn test_required_token_rejects_empty() {
        assert!(required_token(None).is_err());
        assert!(required_token(Some("")).is_err());
        assert_eq!(required_token(Some("t")).unwrap(), "t");
    }

    #[tokio::test]
    async fn test_mismatched_reply_is_unexpected_response() {
        let (gateway, _) = gateway_with(
            Some("T"),
            MemoryStorefrontChannel::new().with_responder(|_| Ok(Empty::default().into())),
        );

        let err = gateway
            .get_cart(CartParams {
                cart_id: "guest".into(),
                ..CartParams::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            StoreError::UnexpectedResponse {
                method: "GetCart",
                received: "Empty"
            }
        ));
    }

    #[tokio::test]
    async fn test_channel_errors_are_forwarded() {
        let (gateway, _) = gateway_with(
            Some("T"),
            MemoryStorefrontChannel::new().with_responder(|_| Err(Status::not_found("no such cart"))),
        );

        let err = gateway
            .get_cart_totals(CartParams {
                token: Some("user".into()),
                cart_id: "5".into(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.status().unwrap().message(), "no such cart");
    }

    #[tokio::test]
    async fn test_cart_operation_without_cart_id_is_rejected_before_dispatch() {
        let (gateway, storefront) = gateway_with(Some("T"), MemoryStorefrontChannel::new());

        let err = gateway.get_cart(CartParams::default()).await.unwrap_err();

        assert!(matches!(err, StoreError::MissingField { field: "cart_id" }));
        assert!(storefront.requests().is_empty());
    }

    #[tokio::test]
    async fn test_guest_call_without_ambient_context_fails() {
        let (gateway, storefront) = gateway_with(None, MemoryStorefrontChannel::new());

        let err = gateway.create_cart(CreateCartParams::default()).await.unwrap_err();

        assert!(matches!(err, StoreError::NoContext));
        assert!(storefront.requests().is_empty());
    }

    #[tokio::test]
    async fn test_token_only_operations_require_token() {
        let (gateway, storefront) = gateway_with(Some("T"), MemoryStorefrontChannel::new());

        assert!(matches!(
            gateway.get_customer(TokenParams::default()).await,
            Err(StoreError::MissingField { field: "token" })
        ));
        assert!(matches!(
            gateway.list_orders(TokenParams::default()).await,
            Err(StoreError::MissingField { field: "token" })
        ));
        assert!(matches!(
            gateway.change_password(ChangePasswordParams::default()).await,
            Err(StoreError::MissingField { field: "token" })
        ));
        assert!(storefront.requests().is_empty());
    }
}
