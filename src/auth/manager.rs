//! Ownership of the ambient identity.
//!
//! [`SessionManager`] logs in through the access channel and hands out the
//! [`ClientContext`] every storefront call carries. It holds at most one
//! ambient context, established once from the configured token and never
//! refreshed.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::auth::{ClientContext, LoginParams, Session};
use crate::clients::AccessChannel;
use crate::config::{ApiToken, ClientVersion, Language, StoreConfig};
use crate::store::StoreError;

/// Establishes sessions and resolves the context for each call.
///
/// # Ambient context
///
/// The ambient context is write-once. Concurrent [`initialize`](Self::initialize)
/// calls perform at most one login and all observe the same context. A
/// failed login is logged and leaves the context unset, so the next call
/// that needs it tries again.
///
/// # Example
///
#[cfg_attr(feature = "memory", doc = "```rust")]
#[cfg_attr(not(feature = "memory"), doc = "```rust,ignore")]
/// use std::sync::Arc;
/// use storefront_rpc::{SessionManager, StoreConfig, HostUrl, ClientVersion, ApiToken};
/// use storefront_rpc::clients::MemoryAccessChannel;
///
/// # tokio_test::block_on(async {
/// let config = StoreConfig::builder()
///     .access_host(HostUrl::new("h1").unwrap())
///     .store_host(HostUrl::new("h2").unwrap())
///     .client_version(ClientVersion::new("1.0").unwrap())
///     .token(ApiToken::new("T").unwrap())
///     .build()
///     .unwrap();
///
/// let manager = SessionManager::new(Arc::new(MemoryAccessChannel::new()), &config);
/// let ambient = manager.initialize().await.cloned();
/// assert_eq!(ambient.unwrap().session_uuid(), "session-1");
///
/// // An explicit token never touches the ambient context
/// let context = manager.context_for(Some("user-token")).await.unwrap();
/// assert_eq!(context.session_uuid(), "user-token");
/// # });
/// ```
pub struct SessionManager {
    access: Arc<dyn AccessChannel>,
    client_version: ClientVersion,
    language: Language,
    token: Option<ApiToken>,
    ambient: OnceCell<ClientContext>,
}

// Verify SessionManager is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SessionManager>();
};

impl SessionManager {
    /// Creates a manager dispatching logins through `access`.
    ///
    /// No login happens until [`initialize`](Self::initialize) runs or a call
    /// first needs the ambient context.
    #[must_use]
    pub fn new(access: Arc<dyn AccessChannel>, config: &StoreConfig) -> Self {
        Self {
            access,
            client_version: config.client_version().clone(),
            language: config.language().clone(),
            token: config.token().cloned(),
            ambient: OnceCell::new(),
        }
    }

    /// Returns the configured language.
    #[must_use]
    pub const fn language(&self) -> &Language {
        &self.language
    }

    /// Returns the ambient context, if it has been established.
    #[must_use]
    pub fn ambient_context(&self) -> Option<&ClientContext> {
        self.ambient.get()
    }

    /// Establishes the ambient context from the configured token.
    ///
    /// Does nothing when a context already exists or no token is configured.
    /// Login failures are logged, not returned.
    pub async fn initialize(&self) -> Option<&ClientContext> {
        if let Some(context) = self.ambient.get() {
            return Some(context);
        }
        let Some(token) = &self.token else {
            tracing::debug!("No token configured; ambient session not established");
            return None;
        };

        match self.ambient.get_or_try_init(|| self.establish(token)).await {
            Ok(context) => Some(context),
            Err(error) => {
                tracing::warn!(%error, "Failed to establish ambient session");
                None
            }
        }
    }

    async fn establish(&self, token: &ApiToken) -> Result<ClientContext, StoreError> {
        let session = self.login(LoginParams::with_token(token.as_ref())).await?;
        tracing::info!(session_id = session.id, "Ambient session established");
        Ok(ClientContext::new(session.uuid, self.language.clone()))
    }

    /// Logs in through the access channel.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingField`] for empty credentials, or
    /// [`StoreError::Rpc`] with whatever the access service reported.
    pub async fn login(&self, params: LoginParams) -> Result<Session, StoreError> {
        let request = params.to_request(&self.client_version, &self.language)?;
        tracing::debug!(
            role = %request.role_uuid,
            organization = %request.organization_uuid,
            warehouse = %request.warehouse_uuid,
            "Dispatching RunLogin"
        );
        let reply = self.access.run_login(request).await?;
        Ok(Session::from_reply(reply, &params, &self.language))
    }

    /// Builds an ephemeral context from a bearer token.
    ///
    /// The ambient context is neither read nor written.
    #[must_use]
    pub fn context_from_token(&self, token: &str) -> ClientContext {
        ClientContext::new(token, self.language.clone())
    }

    /// Resolves the context for one call.
    ///
    /// A non-empty `token` yields an ephemeral context. Otherwise the ambient
    /// context is returned, establishing it first if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoContext`] when no token is given and no
    /// ambient context can be established.
    pub async fn context_for(&self, token: Option<&str>) -> Result<ClientContext, StoreError> {
        match token.filter(|t| !t.is_empty()) {
            Some(token) => Ok(self.context_from_token(token)),
            None => self
                .initialize()
                .await
                .cloned()
                .ok_or(StoreError::NoContext),
        }
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("client_version", &self.client_version)
            .field("language", &self.language)
            .field("token", &self.token)
            .field("ambient", &self.ambient.get())
            .finish_non_exhaustive()
    }
}

#[cfg(all(test, feature = "memory"))]
mod tests {
    use super::*;
    use crate::clients::MemoryAccessChannel;
    use crate::config::HostUrl;
    use tonic::Status;

    fn config(token: Option<&str>) -> StoreConfig {
        let mut builder = StoreConfig::builder()
            .access_host(HostUrl::new("h1").unwrap())
            .store_host(HostUrl::new("h2").unwrap())
            .client_version(ClientVersion::new("1.0").unwrap());
        if let Some(token) = token {
            builder = builder.token(ApiToken::new(token).unwrap());
        }
        builder.build().unwrap()
    }

    #[tokio::test]
    async fn test_initialize_without_token_is_noop() {
        let access = Arc::new(MemoryAccessChannel::new());
        let manager = SessionManager::new(access.clone(), &config(None));

        assert!(manager.initialize().await.is_none());
        assert_eq!(access.login_count(), 0);
    }

    #[tokio::test]
    async fn test_initialize_logs_in_with_configured_token() {
        let access = Arc::new(MemoryAccessChannel::new());
        let manager = SessionManager::new(access.clone(), &config(Some("T")));

        let context = manager.initialize().await.cloned().unwrap();

        assert_eq!(context.session_uuid(), "session-1");
        assert_eq!(context.language().as_ref(), "en_US");
        let logins = access.logins();
        assert_eq!(logins.len(), 1);
        assert_eq!(logins[0].token, "T");
        assert_eq!(logins[0].client_version, "1.0");
    }

    #[tokio::test]
    async fn test_initialize_failure_leaves_context_unset() {
        let access = Arc::new(
            MemoryAccessChannel::new().with_responder(|_| Err(Status::unauthenticated("expired"))),
        );
        let manager = SessionManager::new(access.clone(), &config(Some("T")));

        assert!(manager.initialize().await.is_none());
        assert!(manager.ambient_context().is_none());
        assert!(matches!(
            manager.context_for(None).await,
            Err(StoreError::NoContext)
        ));
    }

    #[tokio::test]
    async fn test_context_for_empty_token_uses_ambient() {
        let access = Arc::new(MemoryAccessChannel::new());
        let manager = SessionManager::new(access, &config(Some("T")));

        let context = manager.context_for(Some("")).await.unwrap();
        assert_eq!(context.session_uuid(), "session-1");
    }

    #[tokio::test]
    async fn test_login_forwards_access_errors() {
        let access = Arc::new(
            MemoryAccessChannel::new()
                .with_responder(|_| Err(Status::permission_denied("role not allowed"))),
        );
        let manager = SessionManager::new(access, &config(None));

        let err = manager
            .login(LoginParams::with_password("u", "p").role("r"))
            .await
            .unwrap_err();

        match err {
            StoreError::Rpc(status) => {
                assert_eq!(status.code(), tonic::Code::PermissionDenied);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
