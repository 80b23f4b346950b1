//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated backend endpoint.
///
/// The backend is dialed over plaintext HTTP/2, so a bare `host:port` is
/// accepted and normalized to `http://host:port`. Explicit `http` and
/// `https` schemes are kept as given.
///
/// # Example
///
/// ```rust
/// use storefront_rpc::HostUrl;
///
/// let url = HostUrl::new("localhost:50059").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:50059");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    const DEFAULT_SCHEME: &'static str = "http://";

    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the scheme is not `http` or
    /// `https`, or if the host part is empty.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        let url = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("{}{trimmed}", Self::DEFAULT_SCHEME)
        };

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;
        if !matches!(&url[..scheme_end], "http" | "https") {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for HostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for HostUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// The client version reported to the access service at login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientVersion(String);

impl ClientVersion {
    /// Creates a new client version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientVersion`] if the version is empty.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into();
        if version.trim().is_empty() {
            return Err(ConfigError::EmptyClientVersion);
        }
        Ok(Self(version))
    }
}

impl AsRef<str> for ClientVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ClientVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A language tag attached to every client context, e.g. `en_US`.
///
/// # Example
///
/// ```rust
/// use storefront_rpc::Language;
///
/// assert_eq!(Language::default().as_ref(), "en_US");
/// assert_eq!(Language::new("es_VE").unwrap().as_ref(), "es_VE");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Language(String);

impl Language {
    /// Language used when none is configured.
    pub const DEFAULT: &'static str = "en_US";

    /// Creates a new language tag.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyLanguage`] if the tag is empty.
    pub fn new(tag: impl Into<String>) -> Result<Self, ConfigError> {
        let tag = tag.into();
        if tag.trim().is_empty() {
            return Err(ConfigError::EmptyLanguage);
        }
        Ok(Self(tag))
    }
}

impl Default for Language {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A bearer token used to establish the ambient session.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `ApiToken(*****)`.
///
/// ```rust
/// use storefront_rpc::ApiToken;
///
/// let token = ApiToken::new("secret-token").unwrap();
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

impl<'de> Deserialize<'de> for ApiToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_url_normalizes_bare_host_port() {
        let url = HostUrl::new("api.example.com:50059").unwrap();
        assert_eq!(url.as_ref(), "http://api.example.com:50059");
        assert_eq!(url.host_name(), "api.example.com");
    }

    #[test]
    fn test_host_url_keeps_explicit_scheme() {
        let url = HostUrl::new("https://store.example.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "store.example.com");

        let url = HostUrl::new("  http://localhost:8080/  ").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:8080/");
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        assert!(HostUrl::new("").is_err());
        assert!(HostUrl::new("ftp://example.com").is_err());
        assert!(HostUrl::new("http://").is_err());
        assert!(HostUrl::new(":50059").is_err());
    }

    #[test]
    fn test_client_version_rejects_blank() {
        assert!(matches!(
            ClientVersion::new("  "),
            Err(ConfigError::EmptyClientVersion)
        ));
        assert_eq!(ClientVersion::new("1.0").unwrap().as_ref(), "1.0");
    }

    #[test]
    fn test_language_default_and_validation() {
        assert_eq!(Language::default().as_ref(), "en_US");
        assert!(matches!(Language::new(""), Err(ConfigError::EmptyLanguage)));
    }

    #[test]
    fn test_api_token_masks_value_in_debug() {
        let token = ApiToken::new("super-secret").unwrap();
        let debug_output = format!("{token:?}");
        assert_eq!(debug_output, "ApiToken(*****)");
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_newtypes_deserialize_through_validation() {
        let host: HostUrl = serde_json::from_str(r#""localhost:50059""#).unwrap();
        assert_eq!(host.as_ref(), "http://localhost:50059");

        let token: Result<ApiToken, _> = serde_json::from_str(r#""""#);
        assert!(token.is_err());
    }
}
