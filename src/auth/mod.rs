//! Authentication types for the storefront client.
//!
//! # Overview
//!
//! - [`SessionManager`]: logs in and resolves the context for every call
//! - [`ClientContext`]: identity + language attached to storefront requests
//! - [`Session`]: the result of a successful login
//! - [`LoginParams`] / [`Credentials`]: what a login sends
//!
//! # Ambient vs explicit identity
//!
//! A call that supplies a bearer token runs under an ephemeral context built
//! from that token. A call without one runs under the ambient context, which
//! the manager establishes once from the configured token.
//!
//! ```rust,ignore
//! use storefront_rpc::LoginParams;
//!
//! let session = manager
//!     .login(LoginParams::with_password("user", "pass").role("role-uuid"))
//!     .await?;
//! let context = session.context();
//! ```

mod context;
mod login;
mod manager;
pub mod session;

pub use context::ClientContext;
pub use login::{Credentials, LoginParams};
pub use manager::SessionManager;
pub use session::Session;
