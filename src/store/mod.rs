//! Storefront operations.
//!
//! # Overview
//!
//! - [`StorefrontGateway`]: one async method per commerce operation
//! - [`params`]: the named-field options each operation accepts
//! - [`addressing`]: guest vs authenticated cart addressing
//! - [`OrderCartRef`] / [`build_order_request`]: order assembly
//! - [`assemble_resource`] / [`build_image_from_bytes`]: streamed resources
//! - [`StoreError`]: the error every operation returns
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_rpc::store::{CartParams, CreateCartParams, UpdateCartParams};
//! use storefront_rpc::{StoreConfig, StorefrontGateway};
//!
//! let gateway = StorefrontGateway::connect(&StoreConfig::from_json(&settings)?)?;
//!
//! // Guest cart under the ambient context
//! let cart = gateway.create_cart(CreateCartParams::default()).await?;
//! gateway
//!     .update_cart(UpdateCartParams {
//!         cart_id: cart.uuid.clone(),
//!         sku: "SKU-1".to_string(),
//!         quantity: 2.0,
//!         ..UpdateCartParams::default()
//!     })
//!     .await?;
//!
//! // The customer's own cart
//! let totals = gateway
//!     .get_cart_totals(CartParams {
//!         token: Some(customer_token),
//!         cart_id: "42".to_string(),
//!     })
//!     .await?;
//! ```

pub mod addressing;
mod errors;
mod gateway;
mod order;
pub mod params;
mod resource;

pub use addressing::AddressingMode;
pub use errors::StoreError;
pub use gateway::StorefrontGateway;
pub use order::{build_order_request, OrderCartRef};
pub use params::*;
pub use resource::{assemble_resource, build_image_from_bytes, RESOURCE_UNAVAILABLE};
