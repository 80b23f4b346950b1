//! Error type for storefront operations.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_rpc::StoreError;
//!
//! match gateway.get_cart(params).await {
//!     Ok(cart) => println!("{} items", cart.items.len()),
//!     Err(StoreError::Rpc(status)) => println!("backend said {}", status.message()),
//!     Err(StoreError::NoContext) => println!("configure a token or pass one"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use thiserror::Error;

use crate::error::ConfigError;

/// Errors returned by [`StorefrontGateway`](crate::StorefrontGateway) and
/// [`SessionManager`](crate::SessionManager) operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The channel reported an error; forwarded as received.
    #[error("RPC failed: {0}")]
    Rpc(#[from] tonic::Status),

    /// The resource stream reported the resource as unavailable.
    #[error("Resource unavailable: {}", .0.message())]
    ResourceUnavailable(tonic::Status),

    /// No token was supplied and no ambient context could be established.
    #[error("No client context: configure a token or pass one with the call")]
    NoContext,

    /// A field the operation requires was not supplied.
    #[error("Missing required field: '{field}'")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A field was supplied in an unusable form.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidField {
        /// The name of the invalid field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The channel answered with a record of the wrong type.
    #[error("Unexpected reply to {method}: received {received}")]
    UnexpectedResponse {
        /// The RPC method that was called.
        method: &'static str,
        /// The kind of record received.
        received: &'static str,
    },

    /// A channel could not be created.
    #[error("Failed to create channel: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// Configuration was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl StoreError {
    /// Returns the gRPC status behind this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<&tonic::Status> {
        match self {
            Self::Rpc(status) | Self::ResourceUnavailable(status) => Some(status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_field() {
        let error = StoreError::MissingField { field: "cart_id" };
        assert_eq!(error.to_string(), "Missing required field: 'cart_id'");
    }

    #[test]
    fn test_status_is_exposed_for_rpc_errors() {
        let error = StoreError::from(tonic::Status::not_found("no cart"));
        assert_eq!(error.status().unwrap().code(), tonic::Code::NotFound);
        assert!(StoreError::NoContext.status().is_none());
    }

    #[test]
    fn test_resource_unavailable_message() {
        let error = StoreError::ResourceUnavailable(tonic::Status::internal("image missing"));
        assert_eq!(error.to_string(), "Resource unavailable: image missing");
    }

    #[test]
    fn test_store_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StoreError>();
    }
}
