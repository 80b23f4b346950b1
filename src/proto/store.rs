//! Records of the `store.WebStore` service.
//!
//! Every request carries a [`ClientRequest`]. Cart-bearing requests also carry
//! `is_guest` plus exactly one of `cart_id` (authenticated carts) or
//! `cart_uuid` (guest carts).

/// Identity attached to every storefront request.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ClientRequest {
    #[prost(string, tag = "1")]
    pub session_uuid: String,
    #[prost(string, tag = "2")]
    pub language: String,
}

/// A postal address, used for shipping, billing and customer records.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Address {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub first_name: String,
    #[prost(string, tag = "3")]
    pub last_name: String,
    #[prost(string, tag = "4")]
    pub country_code: String,
    #[prost(int32, tag = "5")]
    pub region_id: i32,
    #[prost(string, tag = "6")]
    pub region_name: String,
    #[prost(string, tag = "7")]
    pub city_name: String,
    #[prost(string, tag = "8")]
    pub postal_code: String,
    #[prost(string, tag = "9")]
    pub phone: String,
    #[prost(string, tag = "10")]
    pub address1: String,
    #[prost(string, tag = "11")]
    pub address2: String,
    #[prost(string, tag = "12")]
    pub address3: String,
    #[prost(string, tag = "13")]
    pub address4: String,
}

/// A selected option of a configurable product.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ConfigurableItemOption {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub value: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Empty {}

// Customers

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateCustomerRequest {
    #[prost(message, optional, tag = "1")]
    pub client_request: Option<ClientRequest>,
    #[prost(string, tag = "2")]
    pub email: String,
    #[prost(string, tag = "3")]
    pub first_name: String,
    #[prost(string, tag = "4")]
    pub last_name: String,
    #[prost(string, tag = "5")]
    pub password: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ChangePasswordRequest {
    #[prost(message, optional, tag = "1")]
    pub client_request: Option<ClientRequest>,
    #[prost(string, tag = "2")]
    pub current_password: String,
    #[prost(string, tag = "3")]
    pub new_password: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ResetPasswordRequest {
    #[prost(message, optional, tag = "1")]
    pub client_request: Option<ClientRequest>,
    #[prost(string, tag = "2")]
    pub user_name: String,
    #[prost(string, tag = "3")]
    pub email: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetCustomerRequest {
    #[prost(message, optional, tag = "1")]
    pub client_request: Option<ClientRequest>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct UpdateCustomerRequest {
    #[prost(message, optional, tag = "1")]
    pub client_request: Option<ClientRequest>,
    #[prost(int32, tag = "2")]
    pub id: i32,
    #[prost(string, tag = "3")]
    pub email: String,
    #[prost(string, tag = "4")]
    pub first_name: String,
    #[prost(string, tag = "5")]
    pub last_name: String,
    #[prost(message, repeated, tag = "6")]
    pub addresses: Vec<Address>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Customer {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub email: String,
    #[prost(string, tag = "3")]
    pub first_name: String,
    #[prost(string, tag = "4")]
    pub last_name: String,
    #[prost(message, repeated, tag = "5")]
    pub addresses: Vec<Address>,
}

// Catalog and stock

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetStockRequest {
    #[prost(message, optional, tag = "1")]
    pub client_request: Option<ClientRequest>,
    #[prost(string, tag = "2")]
    pub sku: String,
    #[prost(string, tag = "3")]
    pub store_code: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListStocksRequest {
    #[prost(message, optional, tag = "1")]
    pub client_request: Option<ClientRequest>,
    #[prost(string, tag = "2")]
    pub sku: String,
    #[prost(string, tag = "3")]
    pub store_code: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Stock {
    #[prost(string, tag = "1")]
    pub sku: String,
    #[prost(string, tag = "2")]
    pub store_code: String,
    #[prost(double, tag = "3")]
    pub quantity: f64,
    #[prost(bool, tag = "4")]
    pub is_in_stock: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListStocksResponse {
    #[prost(message, repeated, tag = "1")]
    pub stocks: Vec<Stock>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListProductsRequest {
    #[prost(message, optional, tag = "1")]
    pub client_request: Option<ClientRequest>,
    #[prost(string, repeated, tag = "2")]
    pub skus: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Product {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub sku: String,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(string, tag = "4")]
    pub description: String,
    #[prost(double, tag = "5")]
    pub price: f64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListProductsResponse {
    #[prost(message, repeated, tag = "1")]
    pub products: Vec<Product>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListRenderProductsRequest {
    #[prost(message, optional, tag = "1")]
    pub client_request: Option<ClientRequest>,
    #[prost(string, repeated, tag = "2")]
    pub skus: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RenderProduct {
    #[prost(string, tag = "1")]
    pub sku: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub image_name: String,
    #[prost(string, tag = "4")]
    pub image_uuid: String,
    #[prost(double, tag = "5")]
    pub price: f64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListRenderProductsResponse {
    #[prost(message, repeated, tag = "1")]
    pub render_products: Vec<RenderProduct>,
}

// Resources

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetResourceRequest {
    #[prost(message, optional, tag = "1")]
    pub client_request: Option<ClientRequest>,
    #[prost(string, tag = "2")]
    pub resource_name: String,
    #[prost(string, tag = "3")]
    pub resource_uuid: String,
}

/// One streamed chunk of a binary resource.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Resource {
    #[prost(bytes = "vec", tag = "1")]
    pub data: Vec<u8>,
}

// Carts

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateCartRequest {
    #[prost(message, optional, tag = "1")]
    pub client_request: Option<ClientRequest>,
    #[prost(bool, tag = "2")]
    pub is_guest: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetCartRequest {
    #[prost(message, optional, tag = "1")]
    pub client_request: Option<ClientRequest>,
    #[prost(bool, tag = "2")]
    pub is_guest: bool,
    #[prost(int32, tag = "3")]
    pub cart_id: i32,
    #[prost(string, tag = "4")]
    pub cart_uuid: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct UpdateCartRequest {
    #[prost(message, optional, tag = "1")]
    pub client_request: Option<ClientRequest>,
    #[prost(bool, tag = "2")]
    pub is_guest: bool,
    #[prost(int32, tag = "3")]
    pub cart_id: i32,
    #[prost(string, tag = "4")]
    pub cart_uuid: String,
    #[prost(string, tag = "5")]
    pub sku: String,
    #[prost(double, tag = "6")]
    pub quantity: f64,
    #[prost(message, repeated, tag = "7")]
    pub configurable_item_options: Vec<ConfigurableItemOption>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteCartItemRequest {
    #[prost(message, optional, tag = "1")]
    pub client_request: Option<ClientRequest>,
    #[prost(bool, tag = "2")]
    pub is_guest: bool,
    #[prost(int32, tag = "3")]
    pub cart_id: i32,
    #[prost(string, tag = "4")]
    pub cart_uuid: String,
    #[prost(string, tag = "5")]
    pub sku: String,
    #[prost(int32, tag = "6")]
    pub product_id: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CartItem {
    #[prost(int32, tag = "1")]
    pub product_id: i32,
    #[prost(string, tag = "2")]
    pub sku: String,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(double, tag = "4")]
    pub quantity: f64,
    #[prost(double, tag = "5")]
    pub price: f64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Cart {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub uuid: String,
    #[prost(bool, tag = "3")]
    pub is_guest: bool,
    #[prost(message, repeated, tag = "4")]
    pub items: Vec<CartItem>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListPaymentMethodsRequest {
    #[prost(message, optional, tag = "1")]
    pub client_request: Option<ClientRequest>,
    #[prost(bool, tag = "2")]
    pub is_guest: bool,
    #[prost(int32, tag = "3")]
    pub cart_id: i32,
    #[prost(string, tag = "4")]
    pub cart_uuid: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PaymentMethod {
    #[prost(string, tag = "1")]
    pub code: String,
    #[prost(string, tag = "2")]
    pub title: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListPaymentMethodsResponse {
    #[prost(message, repeated, tag = "1")]
    pub payment_methods: Vec<PaymentMethod>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListShippingMethodsRequest {
    #[prost(message, optional, tag = "1")]
    pub client_request: Option<ClientRequest>,
    #[prost(bool, tag = "2")]
    pub is_guest: bool,
    #[prost(int32, tag = "3")]
    pub cart_id: i32,
    #[prost(string, tag = "4")]
    pub cart_uuid: String,
    #[prost(message, optional, tag = "5")]
    pub shipping_address: Option<Address>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShippingMethod {
    #[prost(string, tag = "1")]
    pub carrier_code: String,
    #[prost(string, tag = "2")]
    pub method_code: String,
    #[prost(string, tag = "3")]
    pub carrier_title: String,
    #[prost(string, tag = "4")]
    pub method_title: String,
    #[prost(double, tag = "5")]
    pub amount: f64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListShippingMethodsResponse {
    #[prost(message, repeated, tag = "1")]
    pub shipping_methods: Vec<ShippingMethod>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetShippingInformationRequest {
    #[prost(message, optional, tag = "1")]
    pub client_request: Option<ClientRequest>,
    #[prost(bool, tag = "2")]
    pub is_guest: bool,
    #[prost(int32, tag = "3")]
    pub cart_id: i32,
    #[prost(string, tag = "4")]
    pub cart_uuid: String,
    #[prost(message, optional, tag = "5")]
    pub shipping_address: Option<Address>,
    #[prost(message, optional, tag = "6")]
    pub billing_address: Option<Address>,
    #[prost(string, tag = "7")]
    pub carrier_code: String,
    #[prost(string, tag = "8")]
    pub method_code: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetCartTotalsRequest {
    #[prost(message, optional, tag = "1")]
    pub client_request: Option<ClientRequest>,
    #[prost(bool, tag = "2")]
    pub is_guest: bool,
    #[prost(int32, tag = "3")]
    pub cart_id: i32,
    #[prost(string, tag = "4")]
    pub cart_uuid: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CartTotals {
    #[prost(double, tag = "1")]
    pub subtotal: f64,
    #[prost(double, tag = "2")]
    pub discount_amount: f64,
    #[prost(double, tag = "3")]
    pub shipping_amount: f64,
    #[prost(double, tag = "4")]
    pub tax_amount: f64,
    #[prost(double, tag = "5")]
    pub grand_total: f64,
    #[prost(string, tag = "6")]
    pub currency_code: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShippingInformation {
    #[prost(message, repeated, tag = "1")]
    pub payment_methods: Vec<PaymentMethod>,
    #[prost(message, optional, tag = "2")]
    pub totals: Option<CartTotals>,
}

// Orders

#[derive(Clone, PartialEq, prost::Message)]
pub struct PaymentRequest {
    #[prost(int32, tag = "1")]
    pub bank_id: i32,
    #[prost(string, tag = "2")]
    pub reference_no: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(double, tag = "4")]
    pub amount: f64,
    /// Epoch milliseconds, `0` when unset.
    #[prost(int64, tag = "5")]
    pub payment_date: i64,
    #[prost(string, tag = "6")]
    pub payment_method_code: String,
    #[prost(string, tag = "7")]
    pub currency_code: String,
    #[prost(message, optional, tag = "8")]
    pub billing_address: Option<Address>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProductOrderLine {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub sku: String,
    #[prost(double, tag = "3")]
    pub quantity: f64,
    #[prost(message, repeated, tag = "4")]
    pub configurable_item_options: Vec<ConfigurableItemOption>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateOrderRequest {
    #[prost(message, optional, tag = "1")]
    pub client_request: Option<ClientRequest>,
    #[prost(int32, tag = "2")]
    pub cart_id: i32,
    #[prost(string, tag = "3")]
    pub cart_uuid: String,
    #[prost(int32, tag = "4")]
    pub user_id: i32,
    #[prost(int32, tag = "5")]
    pub customer_id: i32,
    #[prost(message, optional, tag = "6")]
    pub shipping_address: Option<Address>,
    #[prost(message, optional, tag = "7")]
    pub billing_address: Option<Address>,
    #[prost(string, tag = "8")]
    pub carrier_code: String,
    #[prost(string, tag = "9")]
    pub method_code: String,
    #[prost(string, tag = "10")]
    pub payment_method_code: String,
    #[prost(message, repeated, tag = "11")]
    pub payments: Vec<PaymentRequest>,
    #[prost(message, repeated, tag = "12")]
    pub products: Vec<ProductOrderLine>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Order {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub uuid: String,
    #[prost(string, tag = "3")]
    pub document_no: String,
    #[prost(string, tag = "4")]
    pub status: String,
    #[prost(double, tag = "5")]
    pub grand_total: f64,
    #[prost(string, tag = "6")]
    pub currency_code: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListOrdersRequest {
    #[prost(message, optional, tag = "1")]
    pub client_request: Option<ClientRequest>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListOrdersResponse {
    #[prost(message, repeated, tag = "1")]
    pub orders: Vec<Order>,
}
