//! # Storefront RPC Client
//!
//! An async Rust client for a gRPC commerce backend. It logs in against the
//! access service and runs catalog, cart, customer and order calls against
//! the storefront service.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`StoreConfig`] and [`StoreConfigBuilder`]
//! - Validated newtypes for hosts, client version, language and token
//! - Session management via [`SessionManager`], holding a single ambient
//!   context established once from the configured token
//! - A storefront facade, [`StorefrontGateway`], with one async method per
//!   operation
//! - Guest vs authenticated cart addressing
//! - Streamed resource retrieval and [`build_image_from_bytes`]
//! - Pluggable channels: `tonic` gRPC transport or in-memory recorders
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront_rpc::{StoreConfig, HostUrl, ClientVersion, Language, ApiToken};
//!
//! // Create configuration using the builder pattern
//! let config = StoreConfig::builder()
//!     .access_host(HostUrl::new("localhost:50050").unwrap())
//!     .store_host(HostUrl::new("localhost:50059").unwrap())
//!     .client_version(ClientVersion::new("1.0").unwrap())
//!     .language(Language::new("es_VE").unwrap())
//!     .token(ApiToken::new("service-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making Storefront Calls
//!
//! ```rust,ignore
//! use storefront_rpc::store::{CreateCartParams, ProductsParams};
//! use storefront_rpc::StorefrontGateway;
//!
//! let gateway = StorefrontGateway::connect(&config)?;
//!
//! // Calls without a token run under the ambient context
//! let products = gateway
//!     .list_products(ProductsParams { skus: vec!["SKU-1".into()] })
//!     .await?;
//!
//! // A token switches cart calls to the customer's own cart
//! let cart = gateway
//!     .create_cart(CreateCartParams { token: Some(customer_token) })
//!     .await?;
//! ```
//!
//! ## Logging In
//!
//! ```rust,ignore
//! use storefront_rpc::LoginParams;
//!
//! let session = gateway
//!     .login(LoginParams::with_password("user", "pass").role("role-uuid"))
//!     .await?;
//! println!("Logged in as {}", session.name);
//! ```
//!
//! ## Images
//!
//! ```rust,ignore
//! use storefront_rpc::build_image_from_bytes;
//! use storefront_rpc::store::ResourceParams;
//!
//! let bytes = gateway
//!     .get_resource(ResourceParams {
//!         resource_uuid: product.image_uuid.clone(),
//!         ..ResourceParams::default()
//!     })
//!     .await?;
//! let src = build_image_from_bytes("image/jpeg", &bytes);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the ambient context lives in a [`SessionManager`]
//!   instance, so several gateways can coexist in one process
//! - **Fail-fast validation**: newtypes validate on construction, and
//!   operations reject missing identifiers before dispatch
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod proto;
pub mod store;

// Re-export public types at crate root for convenience
pub use auth::{ClientContext, Credentials, LoginParams, Session, SessionManager};
pub use config::{ApiToken, ClientVersion, HostUrl, Language, StoreConfig, StoreConfigBuilder};
pub use error::ConfigError;

// Re-export storefront types
pub use store::{build_image_from_bytes, AddressingMode, StoreError, StorefrontGateway};
