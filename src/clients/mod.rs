//! Channels to the backend services.
//!
//! This module provides the transport layer the storefront client dispatches
//! through. It is deliberately narrow: the gateway in [`crate::store`] builds
//! request records, and a channel only moves them.
//!
//! # Overview
//!
//! - [`AccessChannel`]: the login service
//! - [`StorefrontChannel`]: the commerce service, unary calls plus the
//!   resource stream
//! - [`StoreRequest`] / [`StoreResponse`]: the unary envelopes
//! - [`GrpcAccessChannel`] / [`GrpcStorefrontChannel`]: the `tonic` transport
//! - [`memory`]: recording in-memory channels (feature `memory`, on by default)
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_rpc::clients::{GrpcStorefrontChannel, StorefrontChannel};
//! use storefront_rpc::proto::store::CreateCartRequest;
//! use storefront_rpc::HostUrl;
//!
//! let channel = GrpcStorefrontChannel::connect(&HostUrl::new("localhost:50059")?)?;
//! let reply = channel.unary(CreateCartRequest::default().into()).await?;
//! ```

mod channel;
pub mod grpc;
#[cfg(feature = "memory")]
pub mod memory;

pub use channel::{AccessChannel, ResourceStream, StoreRequest, StoreResponse, StorefrontChannel};
pub use grpc::{GrpcAccessChannel, GrpcStorefrontChannel};

#[cfg(feature = "memory")]
pub use memory::{MemoryAccessChannel, MemoryStorefrontChannel};
