//! Channel capabilities the client dispatches through.
//!
//! The backend exposes two logical services. [`AccessChannel`] handles login;
//! [`StorefrontChannel`] carries every commerce call as either a unary
//! exchange or, for binary resources, a server stream.
//!
//! Requests and replies travel as [`StoreRequest`] and [`StoreResponse`]
//! envelopes so that a channel implementation needs only two methods. The
//! gRPC transport in [`crate::clients::grpc`] unwraps them into typed calls;
//! the in-memory channels in [`crate::clients::memory`] record them.

use async_trait::async_trait;
use futures::stream::BoxStream;
use tonic::Status;

use crate::proto::access::{LoginRequest, Session};
use crate::proto::store::{
    Cart, CartTotals, ChangePasswordRequest, CreateCartRequest, CreateCustomerRequest,
    CreateOrderRequest, Customer, DeleteCartItemRequest, Empty, GetCartRequest,
    GetCartTotalsRequest, GetCustomerRequest, GetResourceRequest, GetShippingInformationRequest,
    GetStockRequest, ListOrdersRequest, ListOrdersResponse, ListPaymentMethodsRequest,
    ListPaymentMethodsResponse, ListProductsRequest, ListProductsResponse,
    ListRenderProductsRequest, ListRenderProductsResponse, ListShippingMethodsRequest,
    ListShippingMethodsResponse, ListStocksRequest, ListStocksResponse, Order, ResetPasswordRequest,
    Resource, ShippingInformation, Stock, UpdateCartRequest, UpdateCustomerRequest,
};

/// Chunks of a streamed resource in arrival order.
///
/// The stream ends (`None`) when the server closes it cleanly. An `Err` item
/// is a status event and is always the last item observed by the consumer.
pub type ResourceStream = BoxStream<'static, Result<Resource, Status>>;

/// The access (identity) service.
#[async_trait]
pub trait AccessChannel: Send + Sync {
    /// Runs a login and returns the resulting session.
    async fn run_login(&self, request: LoginRequest) -> Result<Session, Status>;
}

/// The storefront (commerce) service.
#[async_trait]
pub trait StorefrontChannel: Send + Sync {
    /// Sends one request and waits for its single reply.
    async fn unary(&self, request: StoreRequest) -> Result<StoreResponse, Status>;

    /// Opens the resource stream for `request`.
    async fn get_resource(&self, request: GetResourceRequest) -> Result<ResourceStream, Status>;
}

macro_rules! store_requests {
    ($($variant:ident($request:ty) => $method:literal),* $(,)?) => {
        /// A unary storefront request.
        #[derive(Clone, Debug, PartialEq)]
        pub enum StoreRequest {
            $(
                #[allow(missing_docs)]
                $variant($request),
            )*
        }

        impl StoreRequest {
            /// The RPC method name, e.g. `CreateCart`.
            #[must_use]
            pub const fn method(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $method,)*
                }
            }

            /// The full gRPC path, e.g. `/store.WebStore/CreateCart`.
            #[must_use]
            pub const fn path(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => concat!("/store.WebStore/", $method),)*
                }
            }
        }

        $(
            impl From<$request> for StoreRequest {
                fn from(request: $request) -> Self {
                    Self::$variant(request)
                }
            }
        )*
    };
}

store_requests! {
    CreateCustomer(CreateCustomerRequest) => "CreateCustomer",
    ChangePassword(ChangePasswordRequest) => "ChangePassword",
    ResetPassword(ResetPasswordRequest) => "ResetPassword",
    GetCustomer(GetCustomerRequest) => "GetCustomer",
    UpdateCustomer(UpdateCustomerRequest) => "UpdateCustomer",
    GetStock(GetStockRequest) => "GetStock",
    ListStocks(ListStocksRequest) => "ListStocks",
    ListProducts(ListProductsRequest) => "ListProducts",
    ListRenderProducts(ListRenderProductsRequest) => "ListRenderProducts",
    CreateCart(CreateCartRequest) => "CreateCart",
    GetCart(GetCartRequest) => "GetCart",
    UpdateCart(UpdateCartRequest) => "UpdateCart",
    DeleteCartItem(DeleteCartItemRequest) => "DeleteCartItem",
    ListPaymentMethods(ListPaymentMethodsRequest) => "ListPaymentMethods",
    ListShippingMethods(ListShippingMethodsRequest) => "ListShippingMethods",
    GetShippingInformation(GetShippingInformationRequest) => "GetShippingInformation",
    GetCartTotals(GetCartTotalsRequest) => "GetCartTotals",
    CreateOrder(CreateOrderRequest) => "CreateOrder",
    ListOrders(ListOrdersRequest) => "ListOrders",
}

macro_rules! store_responses {
    ($($variant:ident($response:ty)),* $(,)?) => {
        /// A unary storefront reply.
        #[derive(Clone, Debug, PartialEq)]
        pub enum StoreResponse {
            $(
                #[allow(missing_docs)]
                $variant($response),
            )*
        }

        impl StoreResponse {
            /// Name of the carried record, used in error messages.
            #[must_use]
            pub const fn kind(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => stringify!($variant),)*
                }
            }
        }

        $(
            impl From<$response> for StoreResponse {
                fn from(response: $response) -> Self {
                    Self::$variant(response)
                }
            }

            impl TryFrom<StoreResponse> for $response {
                type Error = StoreResponse;

                fn try_from(response: StoreResponse) -> Result<Self, StoreResponse> {
                    match response {
                        StoreResponse::$variant(inner) => Ok(inner),
                        #[allow(unreachable_patterns)]
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

store_responses! {
    Empty(Empty),
    Customer(Customer),
    Stock(Stock),
    Stocks(ListStocksResponse),
    Products(ListProductsResponse),
    RenderProducts(ListRenderProductsResponse),
    Cart(Cart),
    PaymentMethods(ListPaymentMethodsResponse),
    ShippingMethods(ListShippingMethodsResponse),
    ShippingInformation(ShippingInformation),
    CartTotals(CartTotals),
    Order(Order),
    Orders(ListOrdersResponse),
}
