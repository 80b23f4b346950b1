//! Configuration error types for the storefront client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! malformed host or an empty language tag is rejected before any channel is
//! dialed.
//!
//! # Example
//!
//! ```rust
//! use storefront_rpc::{ClientVersion, ConfigError};
//!
//! let result = ClientVersion::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientVersion)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`StoreConfig`](crate::StoreConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Host URL is invalid.
    #[error("Invalid host '{url}'. Expected 'host:port' or a URL such as 'http://host:port'.")]
    InvalidHostUrl {
        /// The invalid host that was provided.
        url: String,
    },

    /// Client version cannot be empty.
    #[error("Client version cannot be empty.")]
    EmptyClientVersion,

    /// Language tag cannot be empty.
    #[error("Language cannot be empty. Please provide a tag such as 'en_US'.")]
    EmptyLanguage,

    /// API token cannot be empty.
    #[error("API token cannot be empty. Omit the token instead of passing an empty one.")]
    EmptyApiToken,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The JSON settings document could not be parsed.
    #[error("Invalid settings document: {reason}")]
    InvalidSettings {
        /// Parser message.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_host_error_message() {
        let error = ConfigError::InvalidHostUrl {
            url: "ftp://nope".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://nope"));
        assert!(message.contains("host:port"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "store_host",
        };
        let message = error.to_string();
        assert!(message.contains("store_host"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyLanguage;
        let _: &dyn std::error::Error = &error;
    }
}
