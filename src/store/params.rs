//! Named-field options accepted by each storefront operation.
//!
//! Every record derives `Deserialize` with camelCase keys and defaults for
//! absent fields, so options can be built in code or read from JSON:
//!
//! ```rust
//! use storefront_rpc::store::CartParams;
//!
//! let params: CartParams = serde_json::from_str(r#"{"cartId": "42", "token": "T"}"#).unwrap();
//! assert_eq!(params.cart_id, "42");
//! ```
//!
//! `token` fields are bearer tokens. Where an operation supports both
//! addressing modes, an absent or empty token selects the guest path.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::proto::store as proto;

/// Number of free-form lines an address record carries.
pub const ADDRESS_LINES: usize = 4;

fn line(lines: &[String], index: usize) -> String {
    lines.get(index).cloned().unwrap_or_default()
}

/// A shipping, billing or customer address.
///
/// Lines beyond [`ADDRESS_LINES`] are not sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub country_code: String,
    pub region_id: Option<i32>,
    pub region_name: String,
    pub city_name: String,
    pub postal_code: String,
    pub phone: String,
    pub lines: Vec<String>,
}

impl From<&Address> for proto::Address {
    fn from(address: &Address) -> Self {
        Self {
            id: address.id.unwrap_or_default(),
            first_name: address.first_name.clone(),
            last_name: address.last_name.clone(),
            country_code: address.country_code.clone(),
            region_id: address.region_id.unwrap_or_default(),
            region_name: address.region_name.clone(),
            city_name: address.city_name.clone(),
            postal_code: address.postal_code.clone(),
            phone: address.phone.clone(),
            address1: line(&address.lines, 0),
            address2: line(&address.lines, 1),
            address3: line(&address.lines, 2),
            address4: line(&address.lines, 3),
        }
    }
}

/// A selected option of a configurable product.
///
/// Options are sent in the order given; duplicates are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigurableOption {
    pub id: String,
    pub value: String,
}

impl From<&ConfigurableOption> for proto::ConfigurableItemOption {
    fn from(option: &ConfigurableOption) -> Self {
        Self {
            id: option.id.clone(),
            value: option.value.clone(),
        }
    }
}

/// Billing address attached to a single payment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentBillingAddress {
    pub first_name: String,
    pub last_name: String,
    pub country_id: String,
    pub city: String,
    pub postcode: String,
    pub region_id: Option<i32>,
    /// Up to four street lines.
    pub street: Vec<String>,
}

impl From<&PaymentBillingAddress> for proto::Address {
    fn from(address: &PaymentBillingAddress) -> Self {
        Self {
            first_name: address.first_name.clone(),
            last_name: address.last_name.clone(),
            country_code: address.country_id.clone(),
            city_name: address.city.clone(),
            postal_code: address.postcode.clone(),
            region_id: address.region_id.unwrap_or_default(),
            address1: line(&address.street, 0),
            address2: line(&address.street, 1),
            address3: line(&address.street, 2),
            address4: line(&address.street, 3),
            ..Self::default()
        }
    }
}

/// One payment applied to an order.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentEntry {
    pub bank_id: Option<i32>,
    pub reference_no: String,
    pub description: String,
    pub amount: f64,
    pub payment_date: Option<DateTime<Utc>>,
    pub payment_method_code: String,
    pub currency_code: String,
    /// Overrides the order's billing address for this payment only.
    pub billing_address: Option<PaymentBillingAddress>,
}

/// One product line of an order.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductLine {
    pub id: Option<i32>,
    pub sku: String,
    pub quantity: f64,
    pub configurable_options: Vec<ConfigurableOption>,
}

/// Options of [`create_customer`](crate::StorefrontGateway::create_customer).
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCustomerParams {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl fmt::Debug for CreateCustomerParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateCustomerParams")
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password", &"*****")
            .finish()
    }
}

/// Options of [`change_password`](crate::StorefrontGateway::change_password).
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangePasswordParams {
    /// Required.
    pub token: Option<String>,
    pub current_password: String,
    pub new_password: String,
}

impl fmt::Debug for ChangePasswordParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChangePasswordParams(*****)")
    }
}

/// Options of [`reset_password`](crate::StorefrontGateway::reset_password).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResetPasswordParams {
    /// Optional; the ambient context is used without it.
    pub token: Option<String>,
    pub user_name: String,
    pub email: String,
}

/// Options of operations that only need the caller's token.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TokenParams {
    /// Required.
    pub token: Option<String>,
}

/// Options of [`update_customer`](crate::StorefrontGateway::update_customer).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateCustomerParams {
    pub customer_id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub addresses: Vec<Address>,
}

/// Options of stock lookups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockParams {
    pub sku: String,
    pub store_code: String,
}

/// Options of product listings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProductsParams {
    pub skus: Vec<String>,
}

/// Options of [`get_resource`](crate::StorefrontGateway::get_resource).
///
/// At least one of name or uuid is required.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceParams {
    pub resource_name: String,
    pub resource_uuid: String,
}

/// Options of [`create_cart`](crate::StorefrontGateway::create_cart).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateCartParams {
    pub token: Option<String>,
}

/// Options of operations that address an existing cart and nothing else.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CartParams {
    pub token: Option<String>,
    /// Numeric id with a token, guest cart id without.
    pub cart_id: String,
}

/// Options of [`update_cart`](crate::StorefrontGateway::update_cart).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateCartParams {
    pub token: Option<String>,
    pub cart_id: String,
    pub sku: String,
    pub quantity: f64,
    pub configurable_options: Vec<ConfigurableOption>,
}

/// Options of [`get_shipping_methods`](crate::StorefrontGateway::get_shipping_methods).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingMethodsParams {
    pub token: Option<String>,
    pub cart_id: String,
    pub shipping_address: Address,
}

/// Options of [`get_shipping_information`](crate::StorefrontGateway::get_shipping_information).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingInformationParams {
    pub token: Option<String>,
    pub cart_id: String,
    pub shipping_address: Address,
    pub billing_address: Address,
    pub carrier_code: String,
    pub method_code: String,
}

/// Options of [`delete_cart_item`](crate::StorefrontGateway::delete_cart_item).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteCartItemParams {
    pub token: Option<String>,
    pub cart_id: String,
    pub sku: String,
    pub product_id: Option<i32>,
}

/// Options of [`create_order`](crate::StorefrontGateway::create_order).
///
/// Unlike the other cart operations, the cart is addressed by the shape of
/// `cart_id`: a positive number selects the authenticated cart, anything
/// else the guest cart.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateOrderParams {
    pub token: Option<String>,
    pub cart_id: String,
    pub user_id: Option<i32>,
    pub customer_id: Option<i32>,
    pub shipping_address: Address,
    pub billing_address: Address,
    pub carrier_code: String,
    pub method_code: String,
    pub payment_method_code: String,
    pub payments: Vec<PaymentEntry>,
    pub products: Vec<ProductLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_maps_first_four_lines() {
        let address = Address {
            first_name: "Ana".to_string(),
            region_id: Some(5),
            lines: vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into()],
            ..Address::default()
        };
        let record = proto::Address::from(&address);

        assert_eq!(record.first_name, "Ana");
        assert_eq!(record.region_id, 5);
        assert_eq!(
            [record.address1, record.address2, record.address3, record.address4],
            ["a", "b", "c", "d"]
        );
    }

    #[test]
    fn test_address_with_fewer_lines_leaves_rest_empty() {
        let address = Address {
            lines: vec!["only".into()],
            ..Address::default()
        };
        let record = proto::Address::from(&address);
        assert_eq!(record.address1, "only");
        assert!(record.address2.is_empty());
        assert!(record.address4.is_empty());
    }

    #[test]
    fn test_payment_billing_address_maps_locale_fields() {
        let billing = PaymentBillingAddress {
            first_name: "Luis".into(),
            country_id: "VE".into(),
            city: "Caracas".into(),
            postcode: "1010".into(),
            street: vec!["Av. Principal".into(), "Edif. 3".into()],
            ..PaymentBillingAddress::default()
        };
        let record = proto::Address::from(&billing);

        assert_eq!(record.country_code, "VE");
        assert_eq!(record.city_name, "Caracas");
        assert_eq!(record.postal_code, "1010");
        assert_eq!(record.address2, "Edif. 3");
        assert!(record.address3.is_empty());
    }

    #[test]
    fn test_password_params_debug_masks_secrets() {
        let params = ChangePasswordParams {
            token: Some("tok".into()),
            current_password: "old-secret".into(),
            new_password: "new-secret".into(),
        };
        let debug = format!("{params:?}");
        assert!(!debug.contains("secret"));
        assert!(!debug.contains("tok"));

        let params = CreateCustomerParams {
            email: "a@b.c".into(),
            password: "pw-secret".into(),
            ..CreateCustomerParams::default()
        };
        assert!(!format!("{params:?}").contains("pw-secret"));
    }

    #[test]
    fn test_create_order_params_deserialize_from_json() {
        let params: CreateOrderParams = serde_json::from_str(
            r#"{
                "cartId": "abc-guest-uuid",
                "shippingAddress": {"firstName": "Ana", "lines": ["Calle 1"]},
                "payments": [{"amount": 10.5, "paymentDate": "2024-03-01T12:00:00Z",
                              "billingAddress": {"street": ["x"]}}],
                "products": [{"sku": "SKU-1", "quantity": 2,
                              "configurableOptions": [{"id": "93", "value": "52"}]}]
            }"#,
        )
        .unwrap();

        assert_eq!(params.cart_id, "abc-guest-uuid");
        assert_eq!(params.shipping_address.lines, vec!["Calle 1"]);
        assert!(params.payments[0].payment_date.is_some());
        assert!(params.payments[0].billing_address.is_some());
        assert_eq!(params.products[0].configurable_options[0].value, "52");
    }
}
