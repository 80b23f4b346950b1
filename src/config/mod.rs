//! Configuration types for the storefront client.
//!
//! # Overview
//!
//! - [`StoreConfig`]: endpoints, client version, language and optional token
//! - [`StoreConfigBuilder`]: a builder for constructing [`StoreConfig`] instances
//! - [`HostUrl`], [`ClientVersion`], [`Language`], [`ApiToken`]: validated newtypes
//!
//! # Example
//!
//! ```rust
//! use storefront_rpc::{StoreConfig, HostUrl, ClientVersion, ApiToken};
//!
//! let config = StoreConfig::builder()
//!     .access_host(HostUrl::new("localhost:50050").unwrap())
//!     .store_host(HostUrl::new("localhost:50059").unwrap())
//!     .client_version(ClientVersion::new("1.0").unwrap())
//!     .token(ApiToken::new("service-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.language().as_ref(), "en_US");
//! ```

mod newtypes;

pub use newtypes::{ApiToken, ClientVersion, HostUrl, Language};

use serde::Deserialize;

use crate::error::ConfigError;

/// Configuration for a [`StorefrontGateway`](crate::StorefrontGateway).
///
/// # Thread Safety
///
/// `StoreConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    access_host: HostUrl,
    store_host: HostUrl,
    client_version: ClientVersion,
    language: Language,
    token: Option<ApiToken>,
}

impl StoreConfig {
    /// Creates a new builder for constructing a `StoreConfig`.
    #[must_use]
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::new()
    }

    /// Loads configuration from a JSON settings document.
    ///
    /// The document may be the bare settings object or nest it under
    /// `adempiereStore.api` or `store.api`:
    ///
    /// ```rust
    /// use storefront_rpc::StoreConfig;
    ///
    /// let config = StoreConfig::from_json(r#"{
    ///     "store": { "api": {
    ///         "accessHost": "localhost:50050",
    ///         "storeHost": "localhost:50059",
    ///         "version": "1.0",
    ///         "language": "es_VE",
    ///         "token": ""
    ///     } }
    /// }"#).unwrap();
    ///
    /// assert_eq!(config.language().as_ref(), "es_VE");
    /// assert!(config.token().is_none());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSettings`] if the document is not valid
    /// JSON or a field fails validation.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let invalid = |e: serde_json::Error| ConfigError::InvalidSettings {
            reason: e.to_string(),
        };

        let mut value: serde_json::Value = serde_json::from_str(document).map_err(invalid)?;
        for nesting in SETTINGS_NESTINGS {
            if let Some(api) = value.pointer_mut(nesting) {
                value = api.take();
                break;
            }
        }
        let settings: ApiSettings = serde_json::from_value(value).map_err(invalid)?;

        let mut builder = Self::builder()
            .access_host(settings.access_host)
            .store_host(settings.store_host)
            .client_version(settings.version);
        if let Some(language) = settings.language {
            builder = builder.language(language);
        }
        // An empty token means "no ambient session".
        if let Some(token) = settings.token.filter(|t| !t.is_empty()) {
            builder = builder.token(ApiToken::new(token)?);
        }
        builder.build()
    }

    /// Returns the access (login) service endpoint.
    #[must_use]
    pub const fn access_host(&self) -> &HostUrl {
        &self.access_host
    }

    /// Returns the storefront service endpoint.
    #[must_use]
    pub const fn store_host(&self) -> &HostUrl {
        &self.store_host
    }

    /// Returns the client version sent at login.
    #[must_use]
    pub const fn client_version(&self) -> &ClientVersion {
        &self.client_version
    }

    /// Returns the language attached to every client context.
    #[must_use]
    pub const fn language(&self) -> &Language {
        &self.language
    }

    /// Returns the token used to establish the ambient session, if any.
    #[must_use]
    pub const fn token(&self) -> Option<&ApiToken> {
        self.token.as_ref()
    }
}

// Verify StoreConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreConfig>();
};

// JSON pointers tried, in order, to locate a nested settings block.
const SETTINGS_NESTINGS: [&str; 2] = ["/adempiereStore/api", "/store/api"];

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiSettings {
    access_host: HostUrl,
    store_host: HostUrl,
    version: ClientVersion,
    #[serde(default)]
    language: Option<Language>,
    #[serde(default)]
    token: Option<String>,
}

/// Builder for constructing [`StoreConfig`] instances.
///
/// Required fields are `access_host`, `store_host` and `client_version`.
///
/// # Defaults
///
/// - `language`: `en_US`
/// - `token`: `None` (no ambient session)
#[derive(Debug, Default)]
pub struct StoreConfigBuilder {
    access_host: Option<HostUrl>,
    store_host: Option<HostUrl>,
    client_version: Option<ClientVersion>,
    language: Option<Language>,
    token: Option<ApiToken>,
}

impl StoreConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access service endpoint (required).
    #[must_use]
    pub fn access_host(mut self, host: HostUrl) -> Self {
        self.access_host = Some(host);
        self
    }

    /// Sets the storefront service endpoint (required).
    #[must_use]
    pub fn store_host(mut self, host: HostUrl) -> Self {
        self.store_host = Some(host);
        self
    }

    /// Sets the client version (required).
    #[must_use]
    pub fn client_version(mut self, version: ClientVersion) -> Self {
        self.client_version = Some(version);
        self
    }

    /// Sets the language.
    #[must_use]
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Sets the token used to establish the ambient session.
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Builds the [`StoreConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if a required field is unset.
    pub fn build(self) -> Result<StoreConfig, ConfigError> {
        let access_host = self.access_host.ok_or(ConfigError::MissingRequiredField {
            field: "access_host",
        })?;
        let store_host = self.store_host.ok_or(ConfigError::MissingRequiredField {
            field: "store_host",
        })?;
        let client_version = self
            .client_version
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_version",
            })?;

        Ok(StoreConfig {
            access_host,
            store_host,
            client_version,
            language: self.language.unwrap_or_default(),
            token: self.token,
        })
    }
}
