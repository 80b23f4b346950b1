//! Login parameters for the access service.

use std::fmt;

use serde::Deserialize;

use crate::config::{ClientVersion, Language};
use crate::proto::access::LoginRequest;
use crate::store::StoreError;

/// How a login authenticates.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Credentials {
    /// User name and password.
    Password {
        /// User name.
        user: String,
        /// Password.
        password: String,
    },
    /// A previously issued bearer token.
    Token {
        /// The token.
        token: String,
    },
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Password { user, .. } => f
                .debug_struct("Credentials::Password")
                .field("user", user)
                .field("password", &"*****")
                .finish(),
            Self::Token { .. } => f.write_str("Credentials::Token(*****)"),
        }
    }
}

/// Parameters of a login.
///
/// Role, organization and warehouse scopes are optional and passed through
/// empty when absent; the access service decides which defaults apply.
///
/// # Example
///
/// ```rust
/// use storefront_rpc::LoginParams;
///
/// let params = LoginParams::with_password("GardenAdmin", "GardenAdmin")
///     .role("role-uuid")
///     .warehouse("warehouse-uuid");
///
/// assert_eq!(params.role_uuid.as_deref(), Some("role-uuid"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginParams {
    /// How to authenticate.
    #[serde(flatten)]
    pub credentials: Credentials,
    /// Role to log in with.
    #[serde(default)]
    pub role_uuid: Option<String>,
    /// Organization to log in with.
    #[serde(default)]
    pub organization_uuid: Option<String>,
    /// Warehouse to log in with.
    #[serde(default)]
    pub warehouse_uuid: Option<String>,
    /// Language of the session; the configured language when absent.
    #[serde(default)]
    pub language: Option<Language>,
}

impl LoginParams {
    /// Login with user name and password.
    #[must_use]
    pub fn with_password(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self::from_credentials(Credentials::Password {
            user: user.into(),
            password: password.into(),
        })
    }

    /// Login with a bearer token.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::from_credentials(Credentials::Token {
            token: token.into(),
        })
    }

    const fn from_credentials(credentials: Credentials) -> Self {
        Self {
            credentials,
            role_uuid: None,
            organization_uuid: None,
            warehouse_uuid: None,
            language: None,
        }
    }

    /// Scopes the session to a role.
    #[must_use]
    pub fn role(mut self, role_uuid: impl Into<String>) -> Self {
        self.role_uuid = Some(role_uuid.into());
        self
    }

    /// Scopes the session to an organization.
    #[must_use]
    pub fn organization(mut self, organization_uuid: impl Into<String>) -> Self {
        self.organization_uuid = Some(organization_uuid.into());
        self
    }

    /// Scopes the session to a warehouse.
    #[must_use]
    pub fn warehouse(mut self, warehouse_uuid: impl Into<String>) -> Self {
        self.warehouse_uuid = Some(warehouse_uuid.into());
        self
    }

    /// Sets the session language.
    #[must_use]
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Builds the wire request, rejecting empty credentials.
    pub(crate) fn to_request(
        &self,
        client_version: &ClientVersion,
        default_language: &Language,
    ) -> Result<LoginRequest, StoreError> {
        let (user_name, user_pass, token) = match &self.credentials {
            Credentials::Password { user, password } => {
                if user.is_empty() {
                    return Err(StoreError::MissingField { field: "user" });
                }
                if password.is_empty() {
                    return Err(StoreError::MissingField { field: "password" });
                }
                (user.clone(), password.clone(), String::new())
            }
            Credentials::Token { token } => {
                if token.is_empty() {
                    return Err(StoreError::MissingField { field: "token" });
                }
                (String::new(), String::new(), token.clone())
            }
        };

        Ok(LoginRequest {
            user_name,
            user_pass,
            token,
            role_uuid: self.role_uuid.clone().unwrap_or_default(),
            organization_uuid: self.organization_uuid.clone().unwrap_or_default(),
            warehouse_uuid: self.warehouse_uuid.clone().unwrap_or_default(),
            language: self
                .language
                .as_ref()
                .unwrap_or(default_language)
                .as_ref()
                .to_string(),
            client_version: client_version.as_ref().to_string(),
        })
    }
}
