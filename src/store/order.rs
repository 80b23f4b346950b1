//! Order assembly.
//!
//! An order is built once per call from [`CreateOrderParams`] and dispatched
//! as a single `CreateOrder` request. Pricing and totals are computed by the
//! backend; nothing here does arithmetic.
//!
//! The cart reference is chosen by the shape of the supplied identifier,
//! not by whether a token was given: an identifier that parses as a positive
//! number is sent as `cart_id`, anything else verbatim as `cart_uuid`. A
//! positive number that is not a valid cart id (a fraction, or beyond
//! `i32`) is rejected rather than sent as a guest cart.

use crate::auth::ClientContext;
use crate::proto::store::{
    Address, ConfigurableItemOption, CreateOrderRequest, PaymentRequest, ProductOrderLine,
};
use crate::store::params::{CreateOrderParams, PaymentEntry, ProductLine};
use crate::store::StoreError;

/// The cart an order is placed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderCartRef {
    /// A positive numeric cart id.
    Id(i32),
    /// Any other identifier, taken as a guest cart id.
    Guest(String),
}

impl OrderCartRef {
    /// Classifies a caller-supplied cart identifier.
    ///
    /// ```rust
    /// use storefront_rpc::store::OrderCartRef;
    ///
    /// assert_eq!(OrderCartRef::parse("123").unwrap(), OrderCartRef::Id(123));
    /// assert_eq!(
    ///     OrderCartRef::parse("abc-guest-uuid").unwrap(),
    ///     OrderCartRef::Guest("abc-guest-uuid".to_string())
    /// );
    /// assert!(OrderCartRef::parse("1.5").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidField`] when the identifier is a positive
    /// number that is not an integer within `i32` range.
    pub fn parse(cart_id: &str) -> Result<Self, StoreError> {
        let trimmed = cart_id.trim();
        match trimmed.parse::<f64>() {
            Ok(number) if number.is_finite() && number > 0.0 => trimmed
                .parse::<i32>()
                .map(Self::Id)
                .map_err(|e| StoreError::InvalidField {
                    field: "cart_id",
                    reason: format!("'{trimmed}' is not a valid numeric cart id ({e})"),
                }),
            _ => Ok(Self::Guest(cart_id.to_string())),
        }
    }

    /// Returns `true` for a guest cart reference.
    #[must_use]
    pub const fn is_guest(&self) -> bool {
        matches!(self, Self::Guest(_))
    }
}

fn payment_record(entry: &PaymentEntry) -> PaymentRequest {
    PaymentRequest {
        bank_id: entry.bank_id.unwrap_or_default(),
        reference_no: entry.reference_no.clone(),
        description: entry.description.clone(),
        amount: entry.amount,
        payment_date: entry
            .payment_date
            .map(|date| date.timestamp_millis())
            .unwrap_or_default(),
        payment_method_code: entry.payment_method_code.clone(),
        currency_code: entry.currency_code.clone(),
        billing_address: entry.billing_address.as_ref().map(Address::from),
    }
}

fn product_record(line: &ProductLine) -> ProductOrderLine {
    ProductOrderLine {
        id: line.id.unwrap_or_default(),
        sku: line.sku.clone(),
        quantity: line.quantity,
        configurable_item_options: line
            .configurable_options
            .iter()
            .map(ConfigurableItemOption::from)
            .collect(),
    }
}

/// Builds the `CreateOrder` request for `params` under `context`.
///
/// Shipping, billing and each payment's billing override become separate
/// address records.
///
/// # Errors
///
/// Returns [`StoreError::InvalidField`] when the cart id is rejected by
/// [`OrderCartRef::parse`].
pub fn build_order_request(
    context: &ClientContext,
    params: &CreateOrderParams,
) -> Result<CreateOrderRequest, StoreError> {
    let (cart_id, cart_uuid) = match OrderCartRef::parse(&params.cart_id)? {
        OrderCartRef::Id(id) => (id, String::new()),
        OrderCartRef::Guest(uuid) => (0, uuid),
    };

    Ok(CreateOrderRequest {
        client_request: Some(context.to_request()),
        cart_id,
        cart_uuid,
        user_id: params.user_id.unwrap_or_default(),
        customer_id: params.customer_id.unwrap_or_default(),
        shipping_address: Some(Address::from(&params.shipping_address)),
        billing_address: Some(Address::from(&params.billing_address)),
        carrier_code: params.carrier_code.clone(),
        method_code: params.method_code.clone(),
        payment_method_code: params.payment_method_code.clone(),
        payments: params.payments.iter().map(payment_record).collect(),
        products: params.products.iter().map(product_record).collect(),
    })
}
