//! Wire records exchanged with the backend.
//!
//! These are `prost` messages matching the backend's `access` and `store`
//! protobuf packages. They are plain data: the gateway fills them in from
//! caller parameters and the transport encodes them.
//!
//! - [`access`]: login request and the session it yields
//! - [`store`]: every storefront request and response record

pub mod access;
pub mod store;
