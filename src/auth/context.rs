//! Per-call identity attached to storefront requests.

use std::fmt;

use crate::config::Language;
use crate::proto::store::ClientRequest;

/// Identity token plus language carried by every storefront request.
///
/// A context is either the ambient one established by
/// [`SessionManager::initialize`](crate::SessionManager::initialize) or an
/// ephemeral one built from a caller-supplied bearer token. It is immutable
/// once constructed.
///
/// # Example
///
/// ```rust
/// use storefront_rpc::{ClientContext, Language};
///
/// let context = ClientContext::new("session-uuid", Language::default());
/// assert_eq!(context.session_uuid(), "session-uuid");
/// assert_eq!(context.to_request().language, "en_US");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientContext {
    session_uuid: String,
    language: Language,
}

impl ClientContext {
    /// Creates a context for the given session identifier.
    #[must_use]
    pub fn new(session_uuid: impl Into<String>, language: Language) -> Self {
        Self {
            session_uuid: session_uuid.into(),
            language,
        }
    }

    /// Returns the session identifier (or bearer token).
    #[must_use]
    pub fn session_uuid(&self) -> &str {
        &self.session_uuid
    }

    /// Returns the language tag.
    #[must_use]
    pub const fn language(&self) -> &Language {
        &self.language
    }

    /// Builds the wire record for this context.
    #[must_use]
    pub fn to_request(&self) -> ClientRequest {
        ClientRequest {
            session_uuid: self.session_uuid.clone(),
            language: self.language.as_ref().to_string(),
        }
    }
}

impl fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientContext")
            .field("session_uuid", &"*****")
            .field("language", &self.language)
            .finish()
    }
}
